use crate::domain::DiningTable;

/// Custom actions for DiningTable entities.
#[derive(Debug, Clone)]
pub enum TableAction {
    /// Overwrites the manual availability flag.
    ///
    /// Setting the flag to its current value is a no-op that still succeeds.
    SetAvailability(bool),
}

/// Results from TableActions - variants match 1:1 with TableAction
#[derive(Debug, Clone)]
pub enum TableActionResult {
    /// The table as stored after the change
    SetAvailability(DiningTable),
}
