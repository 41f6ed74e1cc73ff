use std::io::Write;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::*;

/// One message on the skill's event bus, serialized as a single JSON line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    #[serde(rename = "type")]
    pub msg_type: String,

    #[serde(default)]
    pub data: Value,
}

impl BusMessage {
    pub fn new(msg_type: impl Into<String>, data: Value) -> Self {
        Self {
            msg_type: msg_type.into(),
            data,
        }
    }

    /// `RELAY:<receiver>:LIST-ALL` carrying `{"contacts": [...]}`.
    pub fn list_all(receiver: &Receiver, contacts: &[Contact]) -> Self {
        Self::new(
            format!("RELAY:{receiver}:LIST-ALL"),
            json!({ "contacts": contacts }),
        )
    }
}

/// Writes bus messages line by line to any writer (stdout for the CLI).
pub struct BusSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> BusSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn emit(&self, message: &BusMessage) -> Result<(), AppError> {
        let mut out = self.out.lock()?;
        serde_json::to_writer(&mut *out, message)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, AppError> {
        Ok(self.out.into_inner()?)
    }
}

impl<W: Write + Send> NotificationSink for BusSink<W> {
    fn publish(&self, receiver: &Receiver, contacts: &[Contact]) -> Result<(), AppError> {
        self.emit(&BusMessage::list_all(receiver, contacts))
    }
}
