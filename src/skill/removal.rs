use tracing::{info, warn};

use super::*;

/// Where a spoken "remove contact" request currently stands.
///
/// ```text
/// AwaitingQuery -> Resolved(1) -> AwaitingConfirmation -> Deleted
/// AwaitingQuery -> Resolved(n) -> AwaitingSelection -> AwaitingConfirmation -> Deleted
/// AwaitingQuery -> NotFound
/// ```
/// Any awaiting step without an answer ends in `Aborted`.
#[derive(Debug, Clone, PartialEq)]
pub enum RemovalState {
    AwaitingQuery(Option<String>),
    Resolved(Vec<Match>),
    AwaitingSelection(Vec<Match>),
    AwaitingConfirmation(Contact),
    Deleted(Contact),
    Declined(Contact),
    NotFound(String),
    Aborted,
    Failed(String),
}

impl RemovalState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RemovalState::Deleted(_)
                | RemovalState::Declined(_)
                | RemovalState::NotFound(_)
                | RemovalState::Aborted
                | RemovalState::Failed(_)
        )
    }
}

pub struct RemovalFlow<'a, P: Prompter> {
    manager: &'a ContactManager,
    prompter: &'a mut P,
    // The display shows only the tied contacts until the flow ends.
    showing_ties: bool,
}

impl<'a, P: Prompter> RemovalFlow<'a, P> {
    pub fn new(manager: &'a ContactManager, prompter: &'a mut P) -> Self {
        Self {
            manager,
            prompter,
            showing_ties: false,
        }
    }

    /// Drives the flow from a (possibly missing) spoken name to a terminal state.
    pub fn run(&mut self, name: Option<String>) -> RemovalState {
        let mut state = RemovalState::AwaitingQuery(name);
        while !state.is_terminal() {
            state = self.step(state);
        }
        state
    }

    pub fn step(&mut self, state: RemovalState) -> RemovalState {
        let next = match state {
            RemovalState::AwaitingQuery(name) => self.resolve(name),
            RemovalState::Resolved(mut matches) => {
                if matches.len() == 1 {
                    RemovalState::AwaitingConfirmation(matches.remove(0).contact)
                } else {
                    RemovalState::AwaitingSelection(matches)
                }
            }
            RemovalState::AwaitingSelection(matches) => self.select(matches),
            RemovalState::AwaitingConfirmation(contact) => self.confirm(contact),
            terminal => terminal,
        };

        if next.is_terminal() && self.showing_ties {
            self.showing_ties = false;
            // A delete has already republished the listing
            if !matches!(next, RemovalState::Deleted(_)) {
                self.restore_display();
            }
        }
        next
    }

    fn resolve(&mut self, name: Option<String>) -> RemovalState {
        let Some(name) =
            non_empty(name).or_else(|| non_empty(self.prompter.get_response(Dialog::Who)))
        else {
            return RemovalState::Aborted;
        };

        match self.manager.best_match(&name) {
            Ok(matches) if matches.is_empty() => {
                self.prompter.speak(Dialog::NotFound, &DialogData::name(&name));
                RemovalState::NotFound(name)
            }
            Ok(matches) => {
                self.showing_ties = matches.len() > 1;
                RemovalState::Resolved(matches)
            }
            Err(e) => self.fail(e),
        }
    }

    // Tied contacts are told apart by phone number, which is unique.
    fn select(&mut self, matches: Vec<Match>) -> RemovalState {
        let options: Vec<String> = matches.iter().map(|m| m.contact.phone.clone()).collect();

        let Some(selection) = non_empty(self.prompter.ask_selection(&options, Dialog::WhoFromSelection))
        else {
            return RemovalState::Aborted;
        };

        let mut selected: Vec<Contact> = matches
            .into_iter()
            .filter(|m| m.contact.phone == selection)
            .map(|m| m.contact)
            .collect();

        if selected.len() == 1 {
            RemovalState::AwaitingConfirmation(selected.remove(0))
        } else {
            RemovalState::Aborted
        }
    }

    fn confirm(&mut self, contact: Contact) -> RemovalState {
        let data = DialogData::from(&contact);

        match self.prompter.ask_yesno(Dialog::ConfirmRemove, &data) {
            Some(true) => match self.manager.delete_contact(&contact) {
                Ok(()) => {
                    info!(name = %contact.name, "contact removed");
                    self.prompter.speak(Dialog::ContactRemoved, &data);
                    RemovalState::Deleted(contact)
                }
                Err(e) => self.fail(e),
            },
            Some(false) => {
                self.prompter.speak(Dialog::NotRemoved, &data);
                RemovalState::Declined(contact)
            }
            None => {
                self.prompter.speak(Dialog::NotRemoved, &data);
                RemovalState::Aborted
            }
        }
    }

    fn restore_display(&self) {
        if let Err(e) = self.manager.publish_listing(self.manager.receiver()) {
            warn!(error = %e, "failed to restore contact list on display");
        }
    }

    fn fail(&mut self, e: AppError) -> RemovalState {
        warn!(error = %e, "contact removal failed");
        self.prompter.speak(Dialog::Error, &DialogData::none());
        RemovalState::Failed(e.to_string())
    }
}

fn non_empty(answer: Option<String>) -> Option<String> {
    answer
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
}
