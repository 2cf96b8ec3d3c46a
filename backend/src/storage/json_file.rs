use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// File-backed key-value store: one `<key>.json` file per key under a base
/// directory.
///
/// Each write replaces the whole value atomically (temp file + rename), so a
/// key is never observed half-written. There is no coordination across keys.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_directory: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `base_directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a store in the default data directory,
    /// `~/Documents/Gift Tracker`.
    pub fn new_default() -> Result<Self> {
        let documents_dir =
            dirs::document_dir().context("could not determine the documents directory")?;
        Self::new(documents_dir.join("Gift Tracker"))
    }

    /// The directory the store reads and writes under.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.value_path(key);

        if !path.exists() {
            debug!("No value stored under key '{}'", key);
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.value_path(key);

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote {} bytes under key '{}'", value.len(), key);
        Ok(())
    }
}
