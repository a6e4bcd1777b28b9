//! Port interfaces for the encryption SDK and its accelerator add-on
//!
//! These traits define the boundaries between the orchestration logic and
//! the external SDK. Key management, the identity protocol and the
//! cryptographic primitives all live behind these ports; nothing in this
//! workspace implements them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use sealbox_domain::{
    ClearFile, DecryptedFile, EncryptedEnvelope, RecipientSet, RegistrationOptions,
    RegistrationToken, Result, SdkConfig, SessionId, SharedSecret,
};

/// Entry point of the SDK: constructs a client bound to a service endpoint
/// and an application identifier.
#[async_trait]
pub trait SdkLifecycle: Send + Sync {
    /// Construct a client for the given endpoint and application id.
    async fn create_client(&self, config: &SdkConfig) -> Result<Arc<dyn SdkClient>>;
}

/// A constructed SDK client, prior to or after identity establishment.
#[async_trait]
pub trait SdkClient: Send + Sync {
    /// Generate a registration token scoped to the shared secret.
    async fn generate_registration_token(
        &self,
        secret: &SharedSecret,
        options: RegistrationOptions,
    ) -> Result<RegistrationToken>;

    /// Establish the client's identity from a registration token.
    async fn initiate_identity(&self, token: &RegistrationToken) -> Result<()>;

    /// Open an encryption session for the given recipients. The current
    /// user is always a recipient, even with an empty set.
    async fn create_encryption_session(
        &self,
        recipients: &RecipientSet,
    ) -> Result<Arc<dyn EncryptionSession>>;
}

/// A reusable encryption/decryption scope bound to a fixed recipient set.
///
/// These are the SDK's own in-memory operations (the non-accelerated path).
/// The session's identity never changes after creation; workflows only
/// borrow it.
#[async_trait]
pub trait EncryptionSession: Send + Sync {
    /// Session identifier, for logging.
    fn id(&self) -> SessionId;

    /// Encrypt in-memory content tagged with a filename.
    async fn encrypt_bytes(&self, content: &[u8], name: &str) -> Result<EncryptedEnvelope>;

    /// Decrypt an envelope, recovering the filename and the clear content.
    async fn decrypt_bytes(&self, envelope: &EncryptedEnvelope) -> Result<ClearFile>;
}

/// The native accelerator add-on.
///
/// Operates directly on file references, bypassing the explicit
/// read-into-memory / write-from-memory round trip. Every operation borrows
/// the session whose recipient scope applies.
#[async_trait]
pub trait FileCryptor: Send + Sync {
    /// Encrypt an in-memory string tagged with a filename.
    async fn encrypt_string(
        &self,
        session: &dyn EncryptionSession,
        content: &str,
        name: &str,
    ) -> Result<EncryptedEnvelope>;

    /// Decrypt an envelope produced by [`Self::encrypt_string`].
    async fn decrypt_string(
        &self,
        session: &dyn EncryptionSession,
        envelope: &EncryptedEnvelope,
    ) -> Result<ClearFile>;

    /// Encrypt a file by reference. Returns the path of the encrypted copy
    /// inside the application cache.
    async fn encrypt_file(
        &self,
        session: &dyn EncryptionSession,
        source: &Path,
        name: &str,
    ) -> Result<PathBuf>;

    /// Decrypt a file by reference. Returns the decrypted copy's path and
    /// the recovered original filename.
    async fn decrypt_file(
        &self,
        session: &dyn EncryptionSession,
        source: &Path,
    ) -> Result<DecryptedFile>;
}
