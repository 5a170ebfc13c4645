use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{MenuItem, MenuItemCreate};
use crate::menu_actor::MenuError;

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl_basic_client!(MenuClient, MenuItem, MenuError, menu_item, menu_items);

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn add_menu_item(&self, item: MenuItemCreate) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(MenuError::from)
    }

    /// Replaces the stored item that has `item.id` with `item`.
    #[instrument(skip(self), fields(menu_item_id = %item.id))]
    pub async fn update_menu_item(&self, item: MenuItem) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        let id = item.id.clone();
        self.inner.update(id, item.into()).await.map_err(MenuError::from)
    }
}
