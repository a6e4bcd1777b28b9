//! Scripted document picker for headless runs
//!
//! A real device presents a native chooser UI; that stays outside this
//! workspace. For headless runs and integration tests this adapter replays
//! a queue of source paths, copying each into the cache directory before
//! handing it back, which preserves the picker contract: the returned path
//! is always a cache copy the application can read.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use sealbox_core::DocumentPicker;
use sealbox_domain::{PickerOptions, SealboxError, SelectedFile, SelectionError};
use tracing::debug;

/// Picker that replays scripted source paths.
///
/// An exhausted queue behaves as user cancellation. A request issued while
/// another is still being served reproduces the "picker already open"
/// condition.
#[derive(Clone)]
pub struct ScriptedPicker {
    sources: Arc<Mutex<VecDeque<PathBuf>>>,
    cache_dir: PathBuf,
    in_flight: Arc<AtomicBool>,
}

impl ScriptedPicker {
    /// Create a picker copying selections into `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            sources: Arc::new(Mutex::new(VecDeque::new())),
            cache_dir: cache_dir.into(),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Queue a source path as the next selection.
    pub fn push(&self, source: impl Into<PathBuf>) {
        self.sources.lock().push_back(source.into());
    }

    async fn serve(&self, source: PathBuf) -> std::result::Result<SelectedFile, SelectionError> {
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                SelectionError::Failed(SealboxError::Picker(format!(
                    "source has no usable filename: {}",
                    source.display()
                )))
            })?;

        tokio::fs::create_dir_all(&self.cache_dir).await.map_err(|e| {
            SelectionError::Failed(SealboxError::Filesystem(format!(
                "create {}: {e}",
                self.cache_dir.display()
            )))
        })?;

        let cache_copy = self.cache_dir.join(&name);
        let size = tokio::fs::copy(&source, &cache_copy).await.map_err(|e| {
            SelectionError::Failed(SealboxError::Filesystem(format!(
                "copy {} into cache: {e}",
                source.display()
            )))
        })?;

        debug!(name = %name, path = %cache_copy.display(), "scripted selection served");
        Ok(SelectedFile { path: cache_copy, name, size: Some(size) })
    }
}

#[async_trait]
impl DocumentPicker for ScriptedPicker {
    async fn pick_single(
        &self,
        _options: PickerOptions,
    ) -> std::result::Result<SelectedFile, SelectionError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SelectionError::InProgress);
        }

        let next = self.sources.lock().pop_front();
        let result = match next {
            Some(source) => self.serve(source).await,
            None => Err(SelectionError::Cancelled),
        };

        self.in_flight.store(false, Ordering::SeqCst);
        result
    }
}
