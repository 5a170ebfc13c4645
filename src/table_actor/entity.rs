use super::actions::{TableAction, TableActionResult};
use crate::actor_framework::Entity;
use crate::domain::{DiningTable, TableCreate};

impl Entity for DiningTable {
    type Id = String;
    type CreateParams = TableCreate;
    type Patch = (); // Tables change only through actions
    type Action = TableAction;
    type ActionResult = TableActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: TableCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.table_number, params.capacity, params.is_available))
    }

    /// Two tables may not share a number.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.table_number == other.table_number
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    /// Handles table-specific actions.
    ///
    /// # Actions
    /// - `SetAvailability(flag)`: Overwrites the manual availability flag
    fn handle_action(&mut self, action: TableAction) -> Result<TableActionResult, String> {
        match action {
            TableAction::SetAvailability(flag) => {
                self.is_available = flag;
                Ok(TableActionResult::SetAvailability(self.clone()))
            }
        }
    }
}
