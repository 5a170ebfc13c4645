use thiserror::Error;

use crate::domain::InvalidTransition;
use crate::table_actor::TableError;

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
    #[error("Table lookup failed: {0}")]
    Table(#[from] TableError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
