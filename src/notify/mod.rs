//! Where the current contact list goes after it changes.
//!
//! The skill never talks to a display directly. It hands the full listing to a
//! [`NotificationSink`] and lets the caller decide whether that means a bus
//! message, an HTTP request or nothing at all.

pub mod bus;
pub mod http;

use std::fmt;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub use bus::{BusMessage, BusSink};
pub use http::HttpSink;

/// Display widget that receives listings unless someone else asked.
pub const DEFAULT_RECEIVER: &str = "MMM-contacts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receiver {
    Named(String),
    Broadcast,
}

impl Receiver {
    pub fn named(name: impl Into<String>) -> Self {
        Receiver::Named(name.into())
    }

    /// A missing, blank or `*` sender means everyone.
    pub fn from_sender(sender: Option<&str>) -> Self {
        match sender.map(str::trim) {
            None | Some("") | Some("*") => Receiver::Broadcast,
            Some(name) => Receiver::Named(name.to_string()),
        }
    }
}

impl Default for Receiver {
    fn default() -> Self {
        Receiver::named(DEFAULT_RECEIVER)
    }
}

impl fmt::Display for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receiver::Named(name) => write!(f, "{name}"),
            Receiver::Broadcast => write!(f, "*"),
        }
    }
}

pub trait NotificationSink: Send + Sync {
    fn publish(&self, receiver: &Receiver, contacts: &[Contact]) -> Result<(), AppError>;
}

/// Drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn publish(&self, _receiver: &Receiver, _contacts: &[Contact]) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Bus,
    Http,
    None,
}

impl SinkKind {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "bus" => Ok(SinkKind::Bus),
            "http" => Ok(SinkKind::Http),
            "none" => Ok(SinkKind::None),
            _ => Err(AppError::Validation(
                "Not a recognized notification sink".to_string(),
            )),
        }
    }
}

/// Builds the sink named on the command line. Bus messages go to stdout.
pub fn parse_sink(kind: SinkKind, url: Option<&str>) -> Result<Box<dyn NotificationSink>, AppError> {
    match kind {
        SinkKind::Bus => Ok(Box::new(BusSink::new(std::io::stdout()))),
        SinkKind::Http => {
            let url = url.ok_or_else(|| AppError::NotFound("Sink url".to_string()))?;
            Ok(Box::new(HttpSink::new(url)?))
        }
        SinkKind::None => Ok(Box::new(NullSink)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_maps_to_receiver() {
        assert_eq!(Receiver::from_sender(None), Receiver::Broadcast);
        assert_eq!(Receiver::from_sender(Some("*")), Receiver::Broadcast);
        assert_eq!(Receiver::from_sender(Some(" ")), Receiver::Broadcast);
        assert_eq!(
            Receiver::from_sender(Some("MMM-phone")),
            Receiver::named("MMM-phone")
        );
    }

    #[test]
    fn default_receiver_is_the_display_widget() {
        assert_eq!(Receiver::default().to_string(), "MMM-contacts");
        assert_eq!(Receiver::Broadcast.to_string(), "*");
    }

    #[test]
    fn http_sink_requires_a_url() {
        let err = parse_sink(SinkKind::Http, None).err().unwrap();
        assert!(err.is_not_found());

        assert!(parse_sink(SinkKind::Http, Some("not a url")).is_err());
        assert!(parse_sink(SinkKind::None, None).is_ok());
        assert!(SinkKind::from("carrier-pigeon").is_err());
    }
}
