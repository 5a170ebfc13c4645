use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during table operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("Table not found: {0}")]
    NotFound(String),
    #[error("Table number already in use by {0}")]
    DuplicateNumber(String),
    #[error("Table rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for TableError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => TableError::NotFound(id),
            FrameworkError::Conflict(existing) => TableError::DuplicateNumber(existing),
            FrameworkError::Rejected(reason) => TableError::Rejected(reason),
            other => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}
