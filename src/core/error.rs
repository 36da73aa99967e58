/// CRUD Error Module
///
/// This module defines the error type shared by every database operation.
/// Driver errors are carried unmodified as the error source.
use thiserror::Error;

/// Error type for the crudsql crate.
///
/// The taxonomy is flat:
/// - Connection failures (open, close, pragma setup)
/// - SQL failures (any statement the engine rejects)
/// - Requests refused before reaching the engine
/// - Configuration loading
#[derive(Error, Debug)]
pub enum CrudError {
    /// Opening or closing the database failed
    #[error("Connection error: {0}")]
    Connection(#[source] rusqlite::Error),

    /// The engine rejected or failed to run a statement
    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// Request refused before any SQL was executed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration parsing errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CrudError {
    /// Returns the underlying driver error, if this error came from the engine.
    pub fn driver_error(&self) -> Option<&rusqlite::Error> {
        match self {
            CrudError::Connection(e) | CrudError::Sql(e) => Some(e),
            _ => None,
        }
    }
}

/// Type alias for Result to use CrudError as the error type.
pub type Result<T> = std::result::Result<T, CrudError>;
