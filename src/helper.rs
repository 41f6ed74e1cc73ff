use std::path::PathBuf;

use crate::errors::AppError;

/// `~/mycroft-core/database/contacts-skill/contacts.db`, where the voice
/// assistant keeps skill databases.
pub fn default_db_path() -> Result<PathBuf, AppError> {
    let home = dirs::home_dir().ok_or_else(|| AppError::NotFound("Home directory".to_string()))?;
    Ok(home
        .join("mycroft-core")
        .join("database")
        .join("contacts-skill")
        .join("contacts.db"))
}

pub fn resolve_db_path(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => default_db_path(),
    }
}
