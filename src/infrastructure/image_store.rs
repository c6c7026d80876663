// src/infrastructure/image_store.rs
//
// Image Store
//
// Copies cover art and screenshots into the library's images directory.
// Files are content-addressed (`<sha256>.<ext>`), so importing the same
// image twice yields the same path and no duplicate file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use sha2::{Digest, Sha256};

use crate::domain::DomainError;
use crate::error::{AppError, AppResult};

const DEFAULT_EXTENSION: &str = "jpg";
const DOWNLOAD_TIMEOUT_SECS: u64 = 30;

pub struct ImageStore {
    images_dir: PathBuf,
    http_client: Client,
}

impl ImageStore {
    pub fn new(images_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            images_dir: images_dir.into(),
            http_client,
        })
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Import an image from a URL or a local file and return the absolute
    /// path of the stored copy.
    pub async fn import(&self, source: &str) -> AppResult<String> {
        let source = source.trim();
        if source.is_empty() {
            return Err(DomainError::validation("source", "cannot be empty").into());
        }

        let bytes = if is_remote(source) {
            self.download(source).await?
        } else {
            read_local(source).await?
        };

        let file_name = format!("{}.{}", content_hash(&bytes), extension_of(source));
        tokio::fs::create_dir_all(&self.images_dir).await?;
        let target = self.images_dir.join(file_name);

        if tokio::fs::try_exists(&target).await? {
            log::debug!("image already stored at {}", target.display());
        } else {
            tokio::fs::write(&target, &bytes).await?;
            log::info!("stored image {} ({} bytes)", target.display(), bytes.len());
        }

        let absolute = std::path::absolute(&target)?;
        Ok(absolute.to_string_lossy().into_owned())
    }

    async fn download(&self, url: &str) -> AppResult<Vec<u8>> {
        log::debug!("downloading image {}", url);
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http(format!(
                "Image download failed with status {}: {}",
                status, url
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn read_local(source: &str) -> AppResult<Vec<u8>> {
    match tokio::fs::read(source).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DomainError::validation(
            "source",
            format!("file not found: {}", source),
        )
        .into()),
        Err(e) => Err(AppError::Io(e)),
    }
}

fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Lower-cased extension of the last path segment, ignoring any query
/// string or fragment. Falls back to `jpg`.
fn extension_of(source: &str) -> String {
    let path = source
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let name = path.rsplit(['/', '\\']).next().unwrap_or_default();

    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= 5
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_ascii_lowercase()
        }
        _ => DEFAULT_EXTENSION.to_string(),
    }
}
