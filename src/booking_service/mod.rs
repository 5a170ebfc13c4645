//! The reservation service: owns every booking and decides table assignment.
//!
//! Unlike menu items or gallery images, bookings are not managed by the generic
//! resource actor. Allocation needs the table list and every existing booking at
//! once, so a dedicated root actor holds the bookings and asks the table actor for
//! the current tables. Requests are handled one at a time, which keeps allocation
//! free of double assignment without any locking.

pub mod allocation;
pub mod error;
pub mod messages;
mod service;

pub use error::*;
pub use messages::*;
pub use service::BookingService;
