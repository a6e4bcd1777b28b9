//! SDK bootstrapper - strict three-step initialization pipeline

use std::sync::Arc;

use sealbox_domain::{Config, RecipientSet, RegistrationOptions, Result};
use tracing::info;

use crate::sdk::ports::{EncryptionSession, SdkClient, SdkLifecycle};

/// Outcome of a successful bootstrap: the client handle and the working
/// encryption session. Both live until screen teardown.
pub struct SdkReady {
    pub client: Arc<dyn SdkClient>,
    pub session: Arc<dyn EncryptionSession>,
}

impl std::fmt::Debug for SdkReady {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkReady").finish_non_exhaustive()
    }
}

/// Runs the SDK initialization pipeline.
///
/// Each step's output is the next step's required input; none may be
/// skipped or reordered. Any step failure aborts the pipeline and
/// propagates to the caller, which decides how to surface it (the shell
/// moves to a retryable failed state).
pub struct BootstrapService {
    lifecycle: Arc<dyn SdkLifecycle>,
}

impl BootstrapService {
    /// Create a bootstrap service over the SDK lifecycle capability.
    pub fn new(lifecycle: Arc<dyn SdkLifecycle>) -> Self {
        Self { lifecycle }
    }

    /// Execute the pipeline: create client, register identity, open a
    /// session for an empty recipient set.
    pub async fn run(&self, config: &Config) -> Result<SdkReady> {
        config.validate()?;

        let client = self.lifecycle.create_client(&config.sdk).await?;
        info!(app_id = %config.sdk.app_id, "SDK client created");

        let token = client
            .generate_registration_token(&config.credentials, RegistrationOptions::default())
            .await?;
        info!(issued_at = %token.issued_at, "registration token generated");

        client.initiate_identity(&token).await?;
        info!("identity established");

        // Current user is added by default. There will be no other recipients.
        let recipients = RecipientSet::default();
        let session = client.create_encryption_session(&recipients).await?;
        info!(session_id = %session.id(), "encryption session created");

        Ok(SdkReady { client, session })
    }
}
