use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Record with name {name} already exists")]
    DuplicateKey { name: String },

    #[error("Record with name {name} not found")]
    NotFound { name: String },

    #[error("Invalid number of arguments. Usage: {usage}")]
    ArityMismatch { usage: String },

    #[error("Refusing to overwrite {path}: the stored book could not be loaded")]
    UnreadableBook { path: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Config { var: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BookResult<T> = Result<T, BookError>;
