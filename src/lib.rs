//! # Reservation desk
//!
//! The data layer behind a restaurant website: menu, gallery, dining tables and
//! reservations, each owned by an actor and reached through a cloneable client.
//!
//! - **Resource actors** - menu items, gallery images and tables live in a generic
//!   [`actor_framework::ResourceActor`], one per collection
//! - **Booking service** - a root actor that owns every booking, resolves per-date
//!   availability and assigns tables ([`booking_service::BookingService`])
//! - **System** - [`app_system::RestaurantSystem`] starts, wires and stops all of them
//!
//! ```no_run
//! # use reservation_desk::app_system::{RestaurantSystem, SystemConfig};
//! # use reservation_desk::domain::BookingDraft;
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = RestaurantSystem::new(SystemConfig::default())?;
//!
//! let date = "2025-06-01".parse()?;
//! let draft = BookingDraft::new("Alice", "alice@example.com", "555-0100", date, "7:00 PM", 4);
//! let booking = system.bookings.create_booking(draft).await?;
//! println!("{:?}", booking.table);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod booking_service;
pub mod clients;
pub mod domain;
pub mod gallery_actor;
pub mod menu_actor;
pub mod seed;
pub mod table_actor;

#[cfg(test)]
mod mock_framework;
