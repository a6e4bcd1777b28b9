//! Mock SDK, session and accelerator

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use sealbox_domain::{
    ClearFile, DecryptedFile, EncryptedEnvelope, RecipientSet, RegistrationOptions,
    RegistrationToken, Result, SdkConfig, SealboxError, SessionId, SharedSecret,
};

use sealbox_core::{EncryptionSession, FileCryptor, SdkClient, SdkLifecycle};

use super::envelope;
use super::fs::MemoryFs;

/// Pipeline step the mock SDK should fail at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailStep {
    None,
    CreateClient,
    GenerateToken,
    InitiateIdentity,
    CreateSession,
}

/// Mock SDK lifecycle recording the order of pipeline calls.
#[derive(Clone)]
pub struct MockSdk {
    fail: FailStep,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockSdk {
    pub fn new() -> Self {
        Self { fail: FailStep::None, calls: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Make the pipeline fail at the given step.
    pub fn failing_at(step: FailStep) -> Self {
        Self { fail: step, calls: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Pipeline calls observed so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }
}

impl Default for MockSdk {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SdkLifecycle for MockSdk {
    async fn create_client(&self, config: &SdkConfig) -> Result<Arc<dyn SdkClient>> {
        self.calls.lock().push("create_client");
        if self.fail == FailStep::CreateClient {
            return Err(SealboxError::Sdk("create_client failed".into()));
        }
        Ok(Arc::new(MockClient {
            app_id: config.app_id.clone(),
            fail: self.fail,
            calls: Arc::clone(&self.calls),
        }))
    }
}

struct MockClient {
    app_id: String,
    fail: FailStep,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl SdkClient for MockClient {
    async fn generate_registration_token(
        &self,
        secret: &SharedSecret,
        options: RegistrationOptions,
    ) -> Result<RegistrationToken> {
        self.calls.lock().push("generate_registration_token");
        if self.fail == FailStep::GenerateToken {
            return Err(SealboxError::Sdk("token generation failed".into()));
        }
        let raw = format!(
            "mock-jwt;app={};kid={};join_team={}",
            self.app_id, secret.key_id, options.join_team
        );
        Ok(RegistrationToken { raw, issued_at: Utc::now() })
    }

    async fn initiate_identity(&self, token: &RegistrationToken) -> Result<()> {
        self.calls.lock().push("initiate_identity");
        if self.fail == FailStep::InitiateIdentity {
            return Err(SealboxError::Sdk("identity initiation failed".into()));
        }
        if token.raw.is_empty() {
            return Err(SealboxError::Sdk("empty registration token".into()));
        }
        Ok(())
    }

    async fn create_encryption_session(
        &self,
        recipients: &RecipientSet,
    ) -> Result<Arc<dyn EncryptionSession>> {
        self.calls.lock().push("create_encryption_session");
        if self.fail == FailStep::CreateSession {
            return Err(SealboxError::Sdk("session creation failed".into()));
        }
        // Current user is implicit; the demo never adds explicit recipients.
        assert!(recipients.is_empty(), "demo sessions use an empty recipient set");
        Ok(Arc::new(MockSession::new()))
    }
}

/// Mock encryption session using the reversible envelope codec.
pub struct MockSession {
    id: SessionId,
}

impl MockSession {
    pub fn new() -> Self {
        Self { id: SessionId::new() }
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EncryptionSession for MockSession {
    fn id(&self) -> SessionId {
        self.id
    }

    async fn encrypt_bytes(&self, content: &[u8], name: &str) -> Result<EncryptedEnvelope> {
        envelope::seal(name, content)
    }

    async fn decrypt_bytes(&self, env: &EncryptedEnvelope) -> Result<ClearFile> {
        envelope::open(env)
    }
}

/// Mock accelerator operating on a shared [`MemoryFs`].
#[derive(Clone)]
pub struct MockCryptor {
    fs: MemoryFs,
    cache: PathBuf,
}

impl MockCryptor {
    pub fn new(fs: MemoryFs) -> Self {
        Self { fs, cache: PathBuf::from("/cache") }
    }
}

#[async_trait]
impl FileCryptor for MockCryptor {
    async fn encrypt_string(
        &self,
        session: &dyn EncryptionSession,
        content: &str,
        name: &str,
    ) -> Result<EncryptedEnvelope> {
        session.encrypt_bytes(content.as_bytes(), name).await
    }

    async fn decrypt_string(
        &self,
        session: &dyn EncryptionSession,
        env: &EncryptedEnvelope,
    ) -> Result<ClearFile> {
        session.decrypt_bytes(env).await
    }

    async fn encrypt_file(
        &self,
        session: &dyn EncryptionSession,
        source: &Path,
        name: &str,
    ) -> Result<PathBuf> {
        let content = self.fs.get(source).ok_or_else(|| {
            SealboxError::Filesystem(format!("no such file: {}", source.display()))
        })?;
        let env = session.encrypt_bytes(&content, name).await?;
        let dest = self.cache.join(format!("{name}.enc"));
        self.fs.insert(dest.clone(), env.0);
        Ok(dest)
    }

    async fn decrypt_file(
        &self,
        session: &dyn EncryptionSession,
        source: &Path,
    ) -> Result<DecryptedFile> {
        let content = self.fs.get(source).ok_or_else(|| {
            SealboxError::Filesystem(format!("no such file: {}", source.display()))
        })?;
        let clear = session.decrypt_bytes(&EncryptedEnvelope(content)).await?;
        let dest = self.cache.join(&clear.filename);
        self.fs.insert(dest.clone(), clear.content);
        Ok(DecryptedFile { path: dest, filename: clear.filename })
    }
}
