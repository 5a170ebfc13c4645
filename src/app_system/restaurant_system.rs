use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, warn};

use super::config::SystemConfig;
use super::error::SystemError;
use crate::actor_framework::ResourceActor;
use crate::booking_service::BookingService;
use crate::clients::{BookingClient, GalleryClient, MenuClient, TableClient};
use crate::domain::{DiningTable, GalleryImage, MenuItem};
use crate::seed::SeedData;

/// Id generator producing `<prefix>-1`, `<prefix>-2`, ...
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", prefix, id)
    }
}

/// The restaurant's data layer with every actor running.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
/// Must be created inside a Tokio runtime.
pub struct RestaurantSystem {
    pub menu: MenuClient,
    pub gallery: GalleryClient,
    pub tables: TableClient,
    pub bookings: BookingClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    pub fn new(config: SystemConfig) -> Result<Self, SystemError> {
        info!(?config, "Starting restaurant system");
        let seed = if config.seed_demo_data {
            SeedData::demo()?
        } else {
            SeedData::default()
        };
        let buffer_size = config.buffer_size;

        // 1. Menu
        let (menu_actor, menu_resource_client) = ResourceActor::<MenuItem>::new(buffer_size, sequential_ids("menu"));
        let menu = MenuClient::new(menu_resource_client);
        let menu_handle = tokio::spawn(menu_actor.with_seed(seed.menu_items).run());

        // 2. Gallery
        let (gallery_actor, gallery_resource_client) =
            ResourceActor::<GalleryImage>::new(buffer_size, sequential_ids("gallery"));
        let gallery = GalleryClient::new(gallery_resource_client);
        let gallery_handle = tokio::spawn(gallery_actor.with_seed(seed.gallery_images).run());

        // 3. Tables
        let (table_actor, table_resource_client) =
            ResourceActor::<DiningTable>::new(buffer_size, sequential_ids("table"));
        let tables = TableClient::new(table_resource_client);
        let table_handle = tokio::spawn(table_actor.with_seed(seed.tables).run());

        // 4. Bookings, wired to the table actor
        let (booking_service, bookings) = BookingService::new(buffer_size, tables.clone());
        let booking_handle = tokio::spawn(booking_service.run());

        Ok(Self {
            menu,
            gallery,
            tables,
            bookings,
            handles: vec![booking_handle, menu_handle, gallery_handle, table_handle],
        })
    }

    /// Stops every actor and waits for them to finish.
    ///
    /// Resource actors stop once every client clone is gone, so clones handed out
    /// elsewhere must be dropped before this can complete.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // The service may already be gone; its task is still joined below.
        if let Err(e) = self.bookings.shutdown().await {
            warn!(error = %e, "Booking service did not accept shutdown");
        }

        // Drop clients to close channels
        drop(self.bookings);
        drop(self.menu);
        drop(self.gallery);
        drop(self.tables);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
