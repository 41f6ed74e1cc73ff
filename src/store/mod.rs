pub mod memory;
pub mod sqlite;

use std::path::PathBuf;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub use memory::MemStore;
pub use sqlite::SqliteStore;

pub trait ContactStore: Send + Sync {
    /// Inserts a contact. Email and phone must not already be stored.
    fn add(&self, contact: &Contact) -> Result<(), AppError>;

    /// Every stored contact, sorted by name ascending.
    fn list(&self) -> Result<Vec<Contact>, AppError>;

    /// Removes the row matching all three fields exactly.
    fn delete(&self, contact: &Contact) -> Result<(), AppError>;

    fn count(&self) -> Result<usize, AppError> {
        Ok(self.list()?.len())
    }

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Sqlite,
    Mem,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "sqlite" => Ok(StorageMediums::Sqlite),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_store(
    medium: StorageMediums,
    db_path: PathBuf,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Sqlite => Ok(Box::new(SqliteStore::open(db_path)?)),
        StorageMediums::Mem => Ok(Box::new(MemStore::new())),
    }
}
