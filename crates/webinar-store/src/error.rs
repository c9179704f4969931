use thiserror::Error;

use crate::WebinarId;

/// Errors that can occur when interacting with a webinar repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A webinar with the same id is already stored.
    #[error("Webinar already exists: {0}")]
    Conflict(WebinarId),

    /// No webinar is stored under the given id.
    #[error("Webinar not found: {0}")]
    NotFound(WebinarId),

    /// A stored or submitted record cannot be represented in the target schema.
    #[error("Invalid webinar record: {0}")]
    InvalidRecord(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
