//! `FileStore` implementation over the local filesystem

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sealbox_core::FileStore;
use sealbox_domain::{ExternalLocation, Result, SealboxError, StorageConfig};
use tracing::debug;

/// Filesystem capability backed by `tokio::fs`.
///
/// `copy_external` resolves [`ExternalLocation::Downloads`] to the
/// configured downloads directory and creates it on first use.
pub struct LocalFileStore {
    storage: StorageConfig,
}

impl LocalFileStore {
    /// Create a store over the configured storage locations.
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }

    fn external_dir(&self, location: ExternalLocation) -> &Path {
        match location {
            ExternalLocation::Downloads => &self.storage.downloads_dir,
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| SealboxError::Filesystem(format!("read {}: {e}", path.display())))
    }

    async fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                SealboxError::Filesystem(format!("create {}: {e}", parent.display()))
            })?;
        }
        tokio::fs::write(path, content)
            .await
            .map_err(|e| SealboxError::Filesystem(format!("write {}: {e}", path.display())))
    }

    async fn copy_external(
        &self,
        source: &Path,
        name: &str,
        location: ExternalLocation,
    ) -> Result<PathBuf> {
        let dir = self.external_dir(location);
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| SealboxError::Filesystem(format!("create {}: {e}", dir.display())))?;

        let dest = dir.join(name);
        tokio::fs::copy(source, &dest).await.map_err(|e| {
            SealboxError::Filesystem(format!(
                "copy {} -> {}: {e}",
                source.display(),
                dest.display()
            ))
        })?;
        debug!(source = %source.display(), dest = %dest.display(), "exported file");
        Ok(dest)
    }
}
