use serde::{Deserialize, Serialize};

/// A photo shown on the gallery page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImageCreate {
    pub url: String,
    pub alt: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryImageUpdate {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub category: Option<String>,
}

impl From<GalleryImage> for GalleryImageUpdate {
    fn from(image: GalleryImage) -> Self {
        Self {
            url: Some(image.url),
            alt: Some(image.alt),
            category: Some(image.category),
        }
    }
}
