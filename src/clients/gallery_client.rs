use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{GalleryImage, GalleryImageCreate};
use crate::gallery_actor::GalleryError;

/// Client for interacting with the gallery actor.
#[derive(Clone)]
pub struct GalleryClient {
    inner: ResourceClient<GalleryImage>,
}

impl_basic_client!(GalleryClient, GalleryImage, GalleryError, gallery_image, gallery_images);

impl GalleryClient {
    #[instrument(skip(self))]
    pub async fn add_gallery_image(&self, image: GalleryImageCreate) -> Result<GalleryImage, GalleryError> {
        debug!("Sending request");
        self.inner.create(image).await.map_err(GalleryError::from)
    }

    #[instrument(skip(self), fields(image_id = %image.id))]
    pub async fn update_gallery_image(&self, image: GalleryImage) -> Result<GalleryImage, GalleryError> {
        debug!("Sending request");
        let id = image.id.clone();
        self.inner.update(id, image.into()).await.map_err(GalleryError::from)
    }

    /// Removes the image with `id`. Returns `false` when there was nothing to remove.
    #[instrument(skip(self))]
    pub async fn delete_gallery_image(&self, id: String) -> Result<bool, GalleryError> {
        debug!("Sending request");
        let removed = self.inner.delete(id).await.map_err(GalleryError::from)?;
        if removed.is_none() {
            info!("No gallery image with that id, nothing deleted");
        }
        Ok(removed.is_some())
    }
}
