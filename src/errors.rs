use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Email or phone is already taken by a stored contact.
    #[error("A contact with this email or phone already exists")]
    DuplicateKey,

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid url: {0}")]
    ParseUrl(#[from] url::ParseError),

    #[error("Store lock poisoned")]
    LockPoisoned,

    /// The user-facing side already explained what happened.
    #[error("{0}")]
    Aborted(String),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}

impl AppError {
    /// Maps a rusqlite error onto the store's error kinds. Unique constraint
    /// violations become `DuplicateKey`, everything else is a storage failure.
    pub fn from_sqlite(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AppError::DuplicateKey
            }
            _ => AppError::Storage(err),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, AppError::DuplicateKey)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}
