use thiserror::Error;

use crate::booking_service::BookingError;
use crate::gallery_actor::GalleryError;
use crate::menu_actor::MenuError;
use crate::table_actor::TableError;

/// Top-level error for building, driving and stopping the whole system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
