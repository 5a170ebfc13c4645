//! Typed handles for talking to the actors. Cheap to clone; every clone feeds the same mailbox.

#[macro_use]
mod macros;

mod booking_client;
mod gallery_client;
mod menu_client;
mod table_client;

pub use booking_client::BookingClient;
pub use gallery_client::GalleryClient;
pub use menu_client::MenuClient;
pub use table_client::TableClient;
