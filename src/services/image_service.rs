// src/services/image_service.rs
use crate::config::LibraryConfig;
use crate::error::AppResult;
use crate::infrastructure::ImageStore;

/// Turns a user-supplied cover/screenshot location into a path inside the
/// library's images directory.
pub struct ImageService {
    store: ImageStore,
}

impl ImageService {
    pub fn new(store: ImageStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &LibraryConfig) -> AppResult<Self> {
        Ok(Self::new(ImageStore::new(config.images_dir())?))
    }

    /// Returns the stored copy's absolute path, ready for `cover_art_path`
    /// or `screenshots`.
    pub async fn import(&self, source: &str) -> AppResult<String> {
        let path = self.store.import(source).await?;
        log::info!("imported image {} -> {}", source, path);
        Ok(path)
    }
}
