//! Encryption workflows - the four user-triggered operations
//!
//! Each workflow runs its steps strictly sequentially: selection completes
//! before encryption starts, encryption completes before the export copy
//! starts. Different triggers are not mutually exclusive; their suspended
//! steps may interleave.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use sealbox_domain::constants::ENCRYPTED_FILE_SUFFIX;
use sealbox_domain::{ClearFile, ExternalLocation, PathTimings, Result};
use tracing::info;

use crate::files::ports::FileStore;
use crate::sdk::ports::{EncryptionSession, FileCryptor};
use crate::selector::DocumentSelector;

/// Composes the encryption session, the accelerator, the selector and the
/// filesystem capability into the four demo workflows.
///
/// Constructed only after bootstrap succeeds, so holding a `WorkflowService`
/// implies the session exists. The session is borrowed, never replaced.
pub struct WorkflowService {
    session: Arc<dyn EncryptionSession>,
    cryptor: Arc<dyn FileCryptor>,
    selector: DocumentSelector,
    files: Arc<dyn FileStore>,
}

impl WorkflowService {
    /// Create a workflow service over a live encryption session.
    pub fn new(
        session: Arc<dyn EncryptionSession>,
        cryptor: Arc<dyn FileCryptor>,
        selector: DocumentSelector,
        files: Arc<dyn FileStore>,
    ) -> Self {
        Self { session, cryptor, selector, files }
    }

    /// Encrypt an in-memory string tagged with a filename, then immediately
    /// decrypt it again.
    ///
    /// The recovered filename and content are logged; the recovered file is
    /// also returned so callers can observe the round-trip. This workflow
    /// always executes: its payload is inline, no selection is involved.
    pub async fn round_trip_string(&self, content: &str, name: &str) -> Result<ClearFile> {
        let envelope = self.cryptor.encrypt_string(self.session.as_ref(), content, name).await?;
        info!(envelope_bytes = envelope.len(), "string encrypted");

        let clear = self.cryptor.decrypt_string(self.session.as_ref(), &envelope).await?;
        info!(filename = %clear.filename, "recovered filename");
        info!(content = %clear.content_lossy(), "recovered content");
        Ok(clear)
    }

    /// Let the user choose a file, encrypt it by reference and export the
    /// ciphertext into the downloads location as `<name>.seald`.
    ///
    /// Returns `Ok(None)` when the selection yielded nothing.
    pub async fn encrypt_document(&self) -> Result<Option<PathBuf>> {
        let Some(selected) = self.selector.select().await? else {
            return Ok(None);
        };

        info!(name = %selected.name, "starting encryption");
        let encrypted_path =
            self.cryptor.encrypt_file(self.session.as_ref(), &selected.path, &selected.name).await?;
        info!(path = %encrypted_path.display(), "file encryption finished");

        // Copy outside the sandbox so the file can be picked again later.
        let export_name = format!("{}{}", selected.name, ENCRYPTED_FILE_SUFFIX);
        let exported = self
            .files
            .copy_external(&encrypted_path, &export_name, ExternalLocation::Downloads)
            .await?;
        Ok(Some(exported))
    }

    /// Let the user choose an encrypted file, decrypt it by reference and
    /// export the clear copy under its recovered original filename.
    ///
    /// Returns `Ok(None)` when the selection yielded nothing.
    pub async fn decrypt_document(&self) -> Result<Option<PathBuf>> {
        let Some(selected) = self.selector.select().await? else {
            return Ok(None);
        };

        info!(name = %selected.name, "starting decryption");
        let decrypted =
            self.cryptor.decrypt_file(self.session.as_ref(), &selected.path).await?;
        info!(filename = %decrypted.filename, "decryption finished");

        let exported = self
            .files
            .copy_external(&decrypted.path, &decrypted.filename, ExternalLocation::Downloads)
            .await?;
        Ok(Some(exported))
    }

    /// Time the accelerated path against the naive read/encrypt/write path
    /// on a user-chosen file.
    ///
    /// Four wall-clock durations are measured and logged: accelerated
    /// encrypt-by-reference, raw read, in-memory encrypt through the
    /// session, raw write. This is a manual benchmarking aid; nothing is
    /// asserted about relative magnitudes.
    pub async fn compare_paths(&self) -> Result<Option<PathTimings>> {
        let Some(selected) = self.selector.select().await? else {
            return Ok(None);
        };

        let start = Instant::now();
        self.cryptor.encrypt_file(self.session.as_ref(), &selected.path, &selected.name).await?;
        let accelerated_encrypt = start.elapsed();
        info!(duration_ms = accelerated_encrypt.as_millis() as u64, "accelerator encryption time");

        let start = Instant::now();
        let content = self.files.read(&selected.path).await?;
        let fs_read = start.elapsed();

        let start = Instant::now();
        let envelope = self.session.encrypt_bytes(&content, &selected.name).await?;
        let session_encrypt = start.elapsed();

        let start = Instant::now();
        self.files.write(&selected.path, &envelope.0).await?;
        let fs_write = start.elapsed();

        info!(duration_ms = fs_read.as_millis() as u64, "FS read duration");
        info!(duration_ms = session_encrypt.as_millis() as u64, "default encryption duration");
        info!(duration_ms = fs_write.as_millis() as u64, "FS write duration");

        Ok(Some(PathTimings { accelerated_encrypt, fs_read, session_encrypt, fs_write }))
    }
}
