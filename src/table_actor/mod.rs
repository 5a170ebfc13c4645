//! Dining table domain logic, including the manual availability toggle.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
