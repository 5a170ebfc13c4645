use crate::actor_framework::Entity;
use crate::domain::{GalleryImage, GalleryImageCreate, GalleryImageUpdate};

impl Entity for GalleryImage {
    type Id = String;
    type CreateParams = GalleryImageCreate;
    type Patch = GalleryImageUpdate;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: GalleryImageCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            url: params.url,
            alt: params.alt,
            category: params.category,
        })
    }

    fn on_update(&mut self, patch: GalleryImageUpdate) -> Result<(), String> {
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(alt) = patch.alt {
            self.alt = alt;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
