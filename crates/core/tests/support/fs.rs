//! In-memory filesystem mock

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use sealbox_core::FileStore;
use sealbox_domain::{ExternalLocation, Result, SealboxError};

/// Shared in-memory file table. Cloning shares the underlying storage so a
/// mock accelerator and a mock file store can see the same files.
#[derive(Default, Clone)]
pub struct MemoryFs {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryFs {
    /// Store a file.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files.lock().insert(path.into(), content.into());
    }

    /// Fetch a file's content, if present.
    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().get(path).cloned()
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.lock().len()
    }
}

/// `FileStore` over a [`MemoryFs`], with a fixed downloads directory.
#[derive(Clone)]
pub struct MemoryFileStore {
    fs: MemoryFs,
    downloads: PathBuf,
}

impl MemoryFileStore {
    pub fn new(fs: MemoryFs) -> Self {
        Self { fs, downloads: PathBuf::from("/downloads") }
    }

    /// Path a named download would land at.
    pub fn download_path(&self, name: &str) -> PathBuf {
        self.downloads.join(name)
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.fs
            .get(path)
            .ok_or_else(|| SealboxError::Filesystem(format!("no such file: {}", path.display())))
    }

    async fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.fs.insert(path, content);
        Ok(())
    }

    async fn copy_external(
        &self,
        source: &Path,
        name: &str,
        location: ExternalLocation,
    ) -> Result<PathBuf> {
        debug_assert_eq!(location, ExternalLocation::Downloads);
        let content = self.read(source).await?;
        let dest = self.downloads.join(name);
        self.fs.insert(dest.clone(), content);
        Ok(dest)
    }
}
