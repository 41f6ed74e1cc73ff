use tracing::{debug, warn};

use super::*;
use crate::notify::{NotificationSink, Receiver};
use crate::store::ContactStore;

/// Owns the store and the sink, and keeps the display in step with the table.
pub struct ContactManager {
    pub storage: Box<dyn ContactStore>,
    sink: Box<dyn NotificationSink>,
    resolver: NameResolver,
    receiver: Receiver,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>, sink: Box<dyn NotificationSink>) -> Self {
        Self {
            storage,
            sink,
            resolver: NameResolver::default(),
            receiver: Receiver::default(),
        }
    }

    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }

    pub fn with_resolver(mut self, resolver: NameResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn receiver(&self) -> &Receiver {
        &self.receiver
    }

    pub fn add_contact(&self, contact: &Contact) -> Result<(), AppError> {
        self.storage.add(contact)?;
        self.notify_listing(&self.receiver);
        Ok(())
    }

    pub fn contact_list(&self) -> Result<Vec<Contact>, AppError> {
        self.storage.list()
    }

    pub fn delete_contact(&self, contact: &Contact) -> Result<(), AppError> {
        self.storage.delete(contact)?;
        self.notify_listing(&self.receiver);
        Ok(())
    }

    /// Sends the full listing to `receiver`. Fails only if the store cannot be read
    /// or the sink refuses the message.
    pub fn publish_listing(&self, receiver: &Receiver) -> Result<Vec<Contact>, AppError> {
        let contacts = self.storage.list()?;
        self.sink.publish(receiver, &contacts)?;
        Ok(contacts)
    }

    /// Contacts whose name ties for the best score against `query`.
    ///
    /// When several tie they are shown on the display, so the user can pick
    /// one by phone number.
    pub fn best_match(&self, query: &str) -> Result<Vec<Match>, AppError> {
        let contacts = self.storage.list()?;
        let matches = self.resolver.resolve(query, &contacts);
        debug!(query, found = matches.len(), "resolved contact name");

        if matches.len() > 1 {
            let tied: Vec<Contact> = matches.iter().map(|m| m.contact.clone()).collect();
            if let Err(e) = self.sink.publish(&self.receiver, &tied) {
                warn!(error = %e, "failed to show tied contacts");
            }
        }

        Ok(matches)
    }

    // The mutation already happened, so a sink failure is only logged.
    fn notify_listing(&self, receiver: &Receiver) {
        if let Err(e) = self.publish_listing(receiver) {
            warn!(error = %e, %receiver, "failed to publish contact list");
        }
    }
}
