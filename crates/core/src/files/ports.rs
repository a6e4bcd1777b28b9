//! Port interface for filesystem access

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sealbox_domain::{ExternalLocation, Result};

/// Filesystem capability used by the workflows.
///
/// `read`/`write` operate inside the application sandbox; `copy_external`
/// exports a sandboxed file into a user-visible location.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Read a file fully into memory.
    async fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write a buffer to a file, replacing any previous content.
    async fn write(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Copy a sandboxed file into `location` under `name`. Returns the
    /// destination path.
    async fn copy_external(
        &self,
        source: &Path,
        name: &str,
        location: ExternalLocation,
    ) -> Result<PathBuf>;
}
