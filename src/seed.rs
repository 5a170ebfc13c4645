//! Demo data the restaurant site ships with.

use serde::{Deserialize, Serialize};

use crate::domain::{DiningTable, GalleryImage, MenuItem};

const DEMO_SEED: &str = include_str!("../data/seed.json");

/// Initial contents of the menu, gallery and table stores. Bookings always start empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub gallery_images: Vec<GalleryImage>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
}

impl SeedData {
    pub fn demo() -> Result<Self, serde_json::Error> {
        Self::from_json(DEMO_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
