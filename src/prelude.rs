pub use crate::cli::{command, run::run_app};
pub use crate::domain::{
    contact::{self, Contact},
    manager::ContactManager,
    search::{Match, NameResolver, resolve},
};
pub use crate::errors::AppError;
pub use crate::notify::{BusMessage, BusSink, NotificationSink, NullSink, Receiver};
pub use crate::skill::{
    AddOutcome, ContactsSkill, Dialog, DialogData, EventOutcome, Prompter, RemovalState,
    ScriptedPrompter,
};
pub use crate::store::{self, ContactStore, MemStore, SqliteStore};
pub use crate::validation::{normalize_email, normalize_phone};
