//! Common data types used throughout the application

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file chosen by the user through the document picker.
///
/// `path` points at the cache copy the picker made of the origin file, so
/// later reads do not depend on the origin's accessibility scope. The value
/// is transient: produced by one selection, consumed by exactly one workflow
/// invocation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: Option<u64>,
}

/// Opaque ciphertext envelope produced by the SDK or the accelerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope(pub Vec<u8>);

impl EncryptedEnvelope {
    /// Envelope size in bytes, for logging.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the envelope carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of decrypting an in-memory envelope: the recovered filename and
/// the clear content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearFile {
    pub filename: String,
    pub content: Vec<u8>,
}

impl ClearFile {
    /// Clear content as UTF-8, lossy, for log output.
    pub fn content_lossy(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// Result of decrypting a file by reference: the path of the decrypted copy
/// inside the cache and the recovered original filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptedFile {
    pub path: PathBuf,
    pub filename: String,
}

/// Signed signup credential permitting a new identity to join the
/// application scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationToken {
    pub raw: String,
    pub issued_at: DateTime<Utc>,
}

/// Options for registration token generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegistrationOptions {
    pub join_team: bool,
}

impl Default for RegistrationOptions {
    fn default() -> Self {
        Self { join_team: true }
    }
}

/// Identifier attached to an encryption session, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a fresh random session id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Recipients of an encryption session.
///
/// The current user is added by the SDK implicitly, so the default (empty)
/// set yields a session only the current identity can open.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipientSet {
    pub user_ids: Vec<String>,
}

impl RecipientSet {
    /// True when no explicit recipients were added.
    pub fn is_empty(&self) -> bool {
        self.user_ids.is_empty()
    }
}

/// How the picker is presented to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationStyle {
    #[default]
    FullScreen,
    Sheet,
}

/// Where the picker copies the chosen file before handing it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyDestination {
    #[default]
    CacheDir,
}

/// Options passed to a single-selection picker request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PickerOptions {
    pub presentation: PresentationStyle,
    pub copy_to: CopyDestination,
}

/// User-visible location outside the application sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalLocation {
    Downloads,
}

/// Wall-clock durations gathered by the comparison workflow.
///
/// All four values are captured with monotonic clocks and therefore
/// non-negative by construction. The workflow records them; it does not
/// assert anything about their relative magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathTimings {
    /// Accelerated encrypt-by-reference.
    pub accelerated_encrypt: Duration,
    /// Raw file read into memory.
    pub fs_read: Duration,
    /// In-memory encrypt through the session (non-accelerated path).
    pub session_encrypt: Duration,
    /// Raw file write from memory.
    pub fs_write: Duration,
}
