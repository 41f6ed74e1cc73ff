use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags, params};
use tracing::debug;

use super::*;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS contacts(\
    name TEXT NOT NULL, \
    email TEXT NOT NULL UNIQUE, \
    phone TEXT NOT NULL UNIQUE)";

// Concurrent writers wait this long for the file lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Contacts persisted in a single SQLite table.
///
/// Holds only the database path. Every operation opens its own connection
/// and drops it before returning, whatever the outcome.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Creates the parent directory, the database file and the table if any are missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        create_file_parent(&path)?;

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA_SQL)?;

        debug!(path = %path.display(), "contact table ready");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Read-write, never create: the file must exist since `open`.
    fn connect(&self) -> Result<Connection, AppError> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

impl ContactStore for SqliteStore {
    fn add(&self, contact: &Contact) -> Result<(), AppError> {
        contact.validate()?;

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO contacts (name, email, phone) VALUES (?1, ?2, ?3)",
            params![contact.name, contact.email, contact.phone],
        )
        .map_err(AppError::from_sqlite)?;

        debug!(name = %contact.name, "contact inserted");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Contact>, AppError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT name, email, phone FROM contacts ORDER BY name ASC")?;

        let contacts = stmt
            .query_map([], |row| {
                Ok(Contact {
                    name: row.get(0)?,
                    email: row.get(1)?,
                    phone: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<Contact>, rusqlite::Error>>()?;

        Ok(contacts)
    }

    fn delete(&self, contact: &Contact) -> Result<(), AppError> {
        let conn = self.connect()?;
        let removed = conn.execute(
            "DELETE FROM contacts WHERE name = ?1 AND email = ?2 AND phone = ?3",
            params![contact.name, contact.email, contact.phone],
        )?;

        if removed == 0 {
            return Err(AppError::NotFound("Contact".to_string()));
        }

        debug!(name = %contact.name, "contact deleted");
        Ok(())
    }

    fn count(&self) -> Result<usize, AppError> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn get_medium(&self) -> &str {
        "sqlite"
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> Result<(TempDir, SqliteStore), AppError> {
        let dir = tempfile::tempdir()?;
        let store = SqliteStore::open(dir.path().join("nested").join("contacts.db"))?;
        Ok((dir, store))
    }

    #[test]
    fn open_creates_parent_directories_and_table() -> Result<(), AppError> {
        let (_dir, store) = temp_store()?;

        assert!(store.path().exists());
        assert_eq!(store.count()?, 0);
        assert!(store.list()?.is_empty());
        Ok(())
    }

    #[test]
    fn reopening_keeps_existing_rows() -> Result<(), AppError> {
        let (_dir, store) = temp_store()?;
        store.add(&Contact::new("Uche", "uche@example.com", "08012345678"))?;

        let reopened = SqliteStore::open(store.path())?;

        assert_eq!(reopened.list()?, vec![Contact::new("Uche", "uche@example.com", "08012345678")]);
        Ok(())
    }

    #[test]
    fn list_is_sorted_by_name() -> Result<(), AppError> {
        let (_dir, store) = temp_store()?;
        store.add(&Contact::new("Wayne", "jackie73@lopez.com", "08062866694"))?;
        store.add(&Contact::new("Diane", "grahammatthew@gmail.com", "08064879199"))?;
        store.add(&Contact::new("Patricia", "lmartinez@bender.net", "08066809241"))?;

        let names: Vec<String> = store.list()?.into_iter().map(|c| c.name).collect();

        assert_eq!(names, vec!["Diane", "Patricia", "Wayne"]);
        Ok(())
    }

    #[test]
    fn duplicate_email_or_phone_is_rejected() -> Result<(), AppError> {
        let (_dir, store) = temp_store()?;
        store.add(&Contact::new("Ann", "ann@example.com", "0701111111"))?;

        let same_email = store.add(&Contact::new("Anna", "ann@example.com", "0702222222"));
        let same_phone = store.add(&Contact::new("Bob", "bob@example.com", "0701111111"));

        assert!(same_email.unwrap_err().is_duplicate());
        assert!(same_phone.unwrap_err().is_duplicate());
        assert_eq!(store.count()?, 1);
        Ok(())
    }

    #[test]
    fn blank_fields_never_reach_the_table() -> Result<(), AppError> {
        let (_dir, store) = temp_store()?;

        let err = store.add(&Contact::new("Ann", "", "0701111111")).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.count()?, 0);
        Ok(())
    }

    #[test]
    fn delete_needs_the_exact_triple() -> Result<(), AppError> {
        let (_dir, store) = temp_store()?;
        let ann = Contact::new("Ann", "ann@example.com", "0701111111");
        store.add(&ann)?;

        let wrong_phone = Contact::new("Ann", "ann@example.com", "0709999999");
        assert!(store.delete(&wrong_phone).unwrap_err().is_not_found());
        assert_eq!(store.count()?, 1);

        store.delete(&ann)?;
        assert_eq!(store.count()?, 0);
        Ok(())
    }

    #[test]
    fn operations_fail_once_the_file_is_gone() -> Result<(), AppError> {
        let (_dir, store) = temp_store()?;
        std::fs::remove_file(store.path())?;

        let err = store.list().unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        Ok(())
    }
}
