pub mod booking;
pub mod gallery;
pub mod menu;
pub mod table;

pub use booking::*;
pub use gallery::*;
pub use menu::*;
pub use table::*;
