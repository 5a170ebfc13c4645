use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),
    #[error("Menu item rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::Rejected(reason) | FrameworkError::Conflict(reason) => MenuError::Rejected(reason),
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
