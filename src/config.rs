// src/config.rs
//
// Library configuration
//
// Everything lives under a single data directory:
//   {DATA_DIR}/gametrc/games.db
//   {DATA_DIR}/gametrc/images/
//
// GAMETRC_DATA_DIR overrides the per-OS default.

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const DATA_DIR_ENV: &str = "GAMETRC_DATA_DIR";

const APP_DIR_NAME: &str = "gametrc";
const DEFAULT_DATABASE_FILE: &str = "games.db";
const DEFAULT_IMAGES_DIR: &str = "images";
const DEFAULT_MAX_POOL_SIZE: u32 = 8;
const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
    pub images_dir_name: String,
    pub max_pool_size: u32,
    pub busy_timeout_ms: u32,
}

impl LibraryConfig {
    /// Configuration rooted at an explicit directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            images_dir_name: DEFAULT_IMAGES_DIR.to_string(),
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// Resolve the data directory from the environment, falling back to the
    /// platform data directory.
    pub fn from_env() -> AppResult<Self> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_data_dir(PathBuf::from(dir)));
        }

        let base = dirs::data_dir()
            .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

        Ok(Self::with_data_dir(base.join(APP_DIR_NAME)))
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join(&self.images_dir_name)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory if it does not exist yet.
    pub fn ensure_dirs(&self) -> AppResult<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}
