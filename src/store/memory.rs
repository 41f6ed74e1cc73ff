use std::sync::Mutex;

use super::*;

/// Process-local store with the same uniqueness and ordering rules as the
/// SQLite table. The lock makes the duplicate check and the insert one step.
#[derive(Debug, Default)]
pub struct MemStore {
    data: Mutex<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Result<Self, AppError> {
        let store = Self::new();
        for contact in &contacts {
            store.add(contact)?;
        }
        Ok(store)
    }
}

impl ContactStore for MemStore {
    fn add(&self, contact: &Contact) -> Result<(), AppError> {
        contact.validate()?;

        let mut data = self.data.lock()?;
        if data.iter().any(|stored| stored.shares_key_with(contact)) {
            return Err(AppError::DuplicateKey);
        }
        data.push(contact.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Contact>, AppError> {
        let mut contacts = self.data.lock()?.clone();
        contacts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(contacts)
    }

    fn delete(&self, contact: &Contact) -> Result<(), AppError> {
        let mut data = self.data.lock()?;
        match data.iter().position(|stored| stored == contact) {
            Some(index) => {
                data.remove(index);
                Ok(())
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    fn count(&self) -> Result<usize, AppError> {
        Ok(self.data.lock()?.len())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
