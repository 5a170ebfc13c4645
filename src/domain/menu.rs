use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dish or drink on the restaurant menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image URI
    pub image: String,
    /// Free-form label, e.g. "Main Courses"
    pub category: String,
}

/// Payload for adding a menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub category: String,
}

/// Payload for updating a menu item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl From<MenuItem> for MenuItemUpdate {
    /// Full replacement: every field of the stored item is overwritten.
    fn from(item: MenuItem) -> Self {
        Self {
            name: Some(item.name),
            description: Some(item.description),
            price: Some(item.price),
            image: Some(item.image),
            category: Some(item.category),
        }
    }
}
