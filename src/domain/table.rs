use serde::{Deserialize, Serialize};

/// A physical table in the dining room.
///
/// `is_available` is the manually toggled default. Per-date availability is computed
/// by the booking service on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    /// Number painted on the table, unique across the room
    pub table_number: u32,
    /// Seats
    pub capacity: u32,
    pub is_available: bool,
}

/// Payload for adding a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub table_number: u32,
    pub capacity: u32,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl DiningTable {
    pub fn new(id: impl Into<String>, table_number: u32, capacity: u32, is_available: bool) -> Self {
        Self {
            id: id.into(),
            table_number,
            capacity,
            is_available,
        }
    }

    pub fn seats(&self, guests: u32) -> bool {
        self.capacity >= guests
    }
}
