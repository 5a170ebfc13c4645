use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during gallery operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GalleryError {
    #[error("Gallery image not found: {0}")]
    NotFound(String),
    #[error("Gallery image rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for GalleryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => GalleryError::NotFound(id),
            FrameworkError::Rejected(reason) | FrameworkError::Conflict(reason) => GalleryError::Rejected(reason),
            other => GalleryError::ActorCommunicationError(other.to_string()),
        }
    }
}
