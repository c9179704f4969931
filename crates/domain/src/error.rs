//! Domain error types.

use thiserror::Error;
use webinar_store::StoreError;

use crate::webinar::WebinarError;

/// Coarse classification of a failure, independent of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The referenced webinar does not exist.
    NotFound,
    /// The caller is not the organizer of record.
    Unauthorized,
    /// A business rule rejected the request.
    ValidationFailed,
    /// Anything else, typically infrastructure failures.
    Internal,
}

impl ErrorKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::ValidationFailed => "validation_failed",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A webinar business rule was violated.
    #[error(transparent)]
    Webinar(#[from] WebinarError),

    /// The repository failed. Propagated unchanged.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Webinar(err) => err.kind(),
            DomainError::Store(_) => ErrorKind::Internal,
        }
    }

    /// Returns the rule violation, if this is one.
    pub fn as_webinar_error(&self) -> Option<&WebinarError> {
        match self {
            DomainError::Webinar(err) => Some(err),
            DomainError::Store(_) => None,
        }
    }
}
