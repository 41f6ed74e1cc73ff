use serde::Deserialize;
use tracing::{debug, info, warn};

use super::*;
use crate::notify::{BusMessage, Receiver};

pub const DELETE_CONTACT_EVENT: &str = "contacts-skill:delete_contact";
pub const GET_CONTACTS_EVENT: &str = "contacts-skill:get_contacts";

#[derive(Debug, Deserialize)]
struct DeleteContactData {
    name: String,
    email: String,
    phone: String,
}

#[derive(Debug, Default, Deserialize)]
struct GetContactsData {
    #[serde(default)]
    sender: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Deleted(Contact),
    Published(Receiver),
    Ignored,
    Failed(String),
}

impl<P: Prompter> ContactsSkill<P> {
    /// Handles one inbound bus message. Malformed or unknown messages are ignored.
    pub fn handle_event(&mut self, message: &BusMessage) -> EventOutcome {
        match message.msg_type.as_str() {
            DELETE_CONTACT_EVENT => self.handle_delete_contact_event(message),
            GET_CONTACTS_EVENT => self.handle_get_contacts_event(message),
            other => {
                debug!(msg_type = other, "ignoring event");
                EventOutcome::Ignored
            }
        }
    }

    // The display asks to delete a specific contact. Every field must be present.
    fn handle_delete_contact_event(&mut self, message: &BusMessage) -> EventOutcome {
        let Ok(data) = serde_json::from_value::<DeleteContactData>(message.data.clone()) else {
            return EventOutcome::Ignored;
        };
        let contact = Contact::new(data.name, data.email, data.phone);
        if contact.validate().is_err() {
            return EventOutcome::Ignored;
        }

        match self.manager.delete_contact(&contact) {
            Ok(()) => {
                info!(name = %contact.name, "contact deleted from display");
                self.prompter
                    .speak(Dialog::ContactRemoved, &DialogData::from(&contact));
                EventOutcome::Deleted(contact)
            }
            Err(e) => {
                warn!(error = %e, "delete event failed");
                if !e.is_not_found() {
                    self.prompter.speak(Dialog::Error, &DialogData::none());
                }
                // Resync the display, it showed a contact that is not stored
                let receiver = self.manager.receiver().clone();
                if let Err(e) = self.manager.publish_listing(&receiver) {
                    warn!(error = %e, "failed to resync display");
                }
                EventOutcome::Failed(e.to_string())
            }
        }
    }

    fn handle_get_contacts_event(&mut self, message: &BusMessage) -> EventOutcome {
        let data: GetContactsData = serde_json::from_value(message.data.clone()).unwrap_or_default();
        let receiver = Receiver::from_sender(data.sender.as_deref());

        match self.manager.publish_listing(&receiver) {
            Ok(_) => EventOutcome::Published(receiver),
            Err(e) => {
                info!(error = %e, "could not answer contact request");
                EventOutcome::Failed(e.to_string())
            }
        }
    }
}
