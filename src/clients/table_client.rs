use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{DiningTable, TableCreate};
use crate::table_actor::{TableAction, TableActionResult, TableError};

/// Client for interacting with the table actor.
///
/// Availability reported here is the manual flag only. Ask the booking service for
/// availability on a given date.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<DiningTable>,
}

impl_basic_client!(TableClient, DiningTable, TableError, table, tables);

impl TableClient {
    #[instrument(skip(self))]
    pub async fn add_table(&self, table: TableCreate) -> Result<DiningTable, TableError> {
        debug!("Sending request");
        self.inner.create(table).await.map_err(TableError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_table_availability(&self, id: String, is_available: bool) -> Result<DiningTable, TableError> {
        debug!("Sending request");
        match self.inner.perform_action(id, TableAction::SetAvailability(is_available)).await {
            Ok(TableActionResult::SetAvailability(table)) => Ok(table),
            Err(e) => Err(TableError::from(e)),
        }
    }
}
