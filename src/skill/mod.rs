//! Voice-facing side of the contact list.
//!
//! [`ContactsSkill`] turns intents ("add contact", "list contacts", "remove
//! contact") and bus events into calls on a [`ContactManager`]. Whatever the
//! host uses to talk and listen sits behind [`Prompter`]; errors stop here and
//! come out as spoken dialogs.

pub mod dialog;
pub mod events;
pub mod removal;

use std::collections::VecDeque;

use tracing::{info, warn};

use crate::domain::{AppError, Contact, ContactManager, Match};
use crate::validation::{normalize_email, normalize_phone};

pub use dialog::{Dialog, DialogData};
pub use events::{DELETE_CONTACT_EVENT, EventOutcome, GET_CONTACTS_EVENT};
pub use removal::{RemovalFlow, RemovalState};

/// The host's way of speaking to and hearing from the user.
///
/// `None` means the user said nothing (or the host timed out).
pub trait Prompter {
    fn get_response(&mut self, dialog: Dialog) -> Option<String>;

    /// Reads out `options` and returns the one the user picked.
    fn ask_selection(&mut self, options: &[String], dialog: Dialog) -> Option<String>;

    /// `Some(true)` for yes, `Some(false)` for anything else that was heard.
    fn ask_yesno(&mut self, dialog: Dialog, data: &DialogData) -> Option<bool>;

    fn speak(&mut self, dialog: Dialog, data: &DialogData);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Contact),
    Aborted,
    Invalid,
    Duplicate,
    Failed,
}

pub struct ContactsSkill<P: Prompter> {
    manager: ContactManager,
    prompter: P,
}

impl<P: Prompter> ContactsSkill<P> {
    pub fn new(manager: ContactManager, prompter: P) -> Self {
        Self { manager, prompter }
    }

    pub fn manager(&self) -> &ContactManager {
        &self.manager
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// "Add contact": asks for name, email and phone, in that order.
    /// Stops quietly as soon as one answer is missing.
    pub fn add_contact(&mut self) -> AddOutcome {
        let Some(name) = self.prompter.get_response(Dialog::AskForName) else {
            return AddOutcome::Aborted;
        };
        let Some(email) = self.prompter.get_response(Dialog::AskForEmail) else {
            return AddOutcome::Aborted;
        };
        let Some(phone) = self.prompter.get_response(Dialog::AskForPhone) else {
            return AddOutcome::Aborted;
        };

        let contact = Contact::new(name.trim(), normalize_email(&email), normalize_phone(&phone));

        match self.manager.add_contact(&contact) {
            Ok(()) => {
                info!(name = %contact.name, "contact added");
                self.prompter
                    .speak(Dialog::ContactAdded, &DialogData::from(&contact));
                AddOutcome::Added(contact)
            }
            Err(AppError::DuplicateKey) => {
                self.prompter.speak(Dialog::NotUnique, &DialogData::none());
                AddOutcome::Duplicate
            }
            Err(AppError::Validation(reason)) => {
                info!(%reason, "contact rejected");
                self.prompter.speak(Dialog::CouldNotAdd, &DialogData::none());
                AddOutcome::Invalid
            }
            Err(e) => {
                warn!(error = %e, "failed to add contact");
                self.prompter.speak(Dialog::Error, &DialogData::none());
                AddOutcome::Failed
            }
        }
    }

    /// "List contacts": pushes the listing to the display.
    pub fn list_contacts(&mut self) -> Option<Vec<Contact>> {
        let receiver = self.manager.receiver().clone();
        match self.manager.publish_listing(&receiver) {
            Ok(contacts) => {
                self.prompter.speak(Dialog::ShowContacts, &DialogData::none());
                Some(contacts)
            }
            Err(e) => {
                warn!(error = %e, "failed to list contacts");
                self.prompter.speak(Dialog::Error, &DialogData::none());
                None
            }
        }
    }

    /// "Remove contact", with or without a name in the utterance.
    pub fn remove_contact(&mut self, name: Option<&str>) -> RemovalState {
        let state =
            RemovalFlow::new(&self.manager, &mut self.prompter).run(name.map(str::to_string));
        info!(?state, "removal finished");
        state
    }

    /// Best match lookup exposed to other skills.
    pub fn find_contact(&mut self, query: &str) -> Vec<Match> {
        if query.trim().is_empty() {
            self.prompter.speak(Dialog::NoMatch, &DialogData::none());
            return Vec::new();
        }

        match self.manager.best_match(query) {
            Ok(matches) => {
                if matches.is_empty() {
                    self.prompter.speak(Dialog::NotFound, &DialogData::name(query));
                }
                matches
            }
            Err(e) => {
                warn!(error = %e, "contact lookup failed");
                self.prompter.speak(Dialog::Error, &DialogData::none());
                Vec::new()
            }
        }
    }
}

/// Answers from a prepared script and records what was said and asked.
///
/// Replays a conversation whose answers are known up front.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    confirmations: VecDeque<bool>,
    pub asked: Vec<Dialog>,
    pub selections: Vec<Vec<String>>,
    pub spoken: Vec<(Dialog, String)>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(answer.into());
        self
    }

    pub fn yes(mut self) -> Self {
        self.confirmations.push_back(true);
        self
    }

    pub fn no(mut self) -> Self {
        self.confirmations.push_back(false);
        self
    }

    pub fn spoken_lines(&self) -> impl Iterator<Item = &str> {
        self.spoken.iter().map(|(_, line)| line.as_str())
    }
}

impl Prompter for ScriptedPrompter {
    fn get_response(&mut self, dialog: Dialog) -> Option<String> {
        self.asked.push(dialog);
        self.answers.pop_front()
    }

    fn ask_selection(&mut self, options: &[String], dialog: Dialog) -> Option<String> {
        self.asked.push(dialog);
        self.selections.push(options.to_vec());
        self.answers.pop_front()
    }

    fn ask_yesno(&mut self, dialog: Dialog, _data: &DialogData) -> Option<bool> {
        self.asked.push(dialog);
        self.confirmations.pop_front()
    }

    fn speak(&mut self, dialog: Dialog, data: &DialogData) {
        self.spoken.push((dialog, dialog.render(data)));
    }
}

/// Prompter for headless event handling: logs what would be said, hears nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPrompter;

impl Prompter for LogPrompter {
    fn get_response(&mut self, _dialog: Dialog) -> Option<String> {
        None
    }

    fn ask_selection(&mut self, _options: &[String], _dialog: Dialog) -> Option<String> {
        None
    }

    fn ask_yesno(&mut self, _dialog: Dialog, _data: &DialogData) -> Option<bool> {
        None
    }

    fn speak(&mut self, dialog: Dialog, data: &DialogData) {
        info!(?dialog, "{}", dialog.render(data));
    }
}
