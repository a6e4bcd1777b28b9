//! Application context - dependency injection container

use std::sync::Arc;

use parking_lot::RwLock;
use sealbox_core::{
    BootstrapService, DocumentPicker, DocumentSelector, FileCryptor, FileStore, SdkLifecycle,
    WorkflowService,
};
use sealbox_domain::{Config, Result, SealboxError};
use sealbox_infra::{LocalFileStore, ScriptedPicker};
use tracing::{info, warn};

use crate::shell::{ShellPhase, ShellState};

/// Application context - holds the configuration, the capability ports and
/// the shell state.
///
/// Created once at startup and shared by reference with every command. The
/// client handle and encryption session live inside the shell state; they
/// are written when bootstrap completes and only borrowed afterwards.
pub struct AppContext {
    config: Config,
    bootstrap: BootstrapService,
    cryptor: Arc<dyn FileCryptor>,
    selector: DocumentSelector,
    files: Arc<dyn FileStore>,
    shell: RwLock<ShellState>,
}

impl AppContext {
    /// Wire the context from its capability ports.
    pub fn new(
        config: Config,
        lifecycle: Arc<dyn SdkLifecycle>,
        cryptor: Arc<dyn FileCryptor>,
        picker: Arc<dyn DocumentPicker>,
        files: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            config,
            bootstrap: BootstrapService::new(lifecycle),
            cryptor,
            selector: DocumentSelector::new(picker),
            files,
            shell: RwLock::new(ShellState::Initializing),
        }
    }

    /// Wire the context with the shipped local adapters: a scripted picker
    /// over the cache directory and a file store over the local filesystem.
    ///
    /// The SDK lifecycle and the accelerator still come from the host; only
    /// they know the real bindings. The picker handle is returned so the
    /// host can queue selections.
    pub fn with_local_adapters(
        config: Config,
        lifecycle: Arc<dyn SdkLifecycle>,
        cryptor: Arc<dyn FileCryptor>,
    ) -> (Self, ScriptedPicker) {
        let picker = ScriptedPicker::new(config.storage.cache_dir.clone());
        let files = Arc::new(LocalFileStore::new(config.storage.clone()));
        let ctx = Self::new(config, lifecycle, cryptor, Arc::new(picker.clone()), files);
        (ctx, picker)
    }

    /// The loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the bootstrap pipeline and transition the shell.
    ///
    /// On success the shell becomes `Ready` and stays there; repeated calls
    /// are no-ops once ready. On failure the shell becomes `Failed` with
    /// the error as reason - it never panics and never stays silently stuck
    /// in `Initializing`.
    pub async fn initialize(&self) -> ShellPhase {
        if matches!(*self.shell.read(), ShellState::Ready { .. }) {
            return ShellPhase::Ready;
        }

        match self.bootstrap.run(&self.config).await {
            Ok(ready) => {
                let mut shell = self.shell.write();
                // Ready is entered at most once; a concurrent bootstrap
                // that lost the race drops its session.
                if !matches!(*shell, ShellState::Ready { .. }) {
                    let workflows = WorkflowService::new(
                        ready.session,
                        Arc::clone(&self.cryptor),
                        self.selector.clone(),
                        Arc::clone(&self.files),
                    );
                    *shell =
                        ShellState::Ready { client: ready.client, workflows: Arc::new(workflows) };
                    info!("shell ready, workflow triggers enabled");
                }
                ShellPhase::Ready
            }
            Err(err) => {
                warn!(error = %err, "bootstrap failed, shell disabled until retry");
                let reason = err.to_string();
                *self.shell.write() = ShellState::Failed { reason: reason.clone() };
                ShellPhase::Failed { reason }
            }
        }
    }

    /// Re-run the bootstrap pipeline after a failure.
    ///
    /// Meaningful only in the `Failed` state; in any other state the
    /// current phase is returned unchanged.
    pub async fn retry_bootstrap(&self) -> ShellPhase {
        match self.phase() {
            ShellPhase::Failed { .. } => {
                info!("retrying SDK bootstrap");
                self.initialize().await
            }
            phase => {
                warn!(?phase, "retry requested outside the failed state, ignoring");
                phase
            }
        }
    }

    /// Current shell phase.
    pub fn phase(&self) -> ShellPhase {
        ShellPhase::from(&*self.shell.read())
    }

    /// The workflow service, available only in the `Ready` state.
    ///
    /// # Errors
    /// Returns `SealboxError::Unavailable` while the shell is initializing
    /// or failed - no workflow may run before the client handle and the
    /// encryption session both exist.
    pub fn workflows(&self) -> Result<Arc<WorkflowService>> {
        match &*self.shell.read() {
            ShellState::Ready { workflows, .. } => Ok(Arc::clone(workflows)),
            ShellState::Initializing => {
                Err(SealboxError::Unavailable("SDK is still initializing".into()))
            }
            ShellState::Failed { reason } => {
                Err(SealboxError::Unavailable(format!("bootstrap failed: {reason}")))
            }
        }
    }
}
