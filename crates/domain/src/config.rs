//! Configuration structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SealboxError};

/// SDK endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Base URL of the SDK service endpoint.
    pub api_url: String,
    /// Application identifier registered with the service.
    pub app_id: String,
}

/// Shared secret used to sign registration tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedSecret {
    /// Identifier of the secret, sent alongside the signature.
    pub key_id: String,
    /// The secret value itself. Never logged.
    pub key: String,
}

/// Filesystem locations the application works with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Application-managed cache directory (picker copies, crypto scratch).
    pub cache_dir: PathBuf,
    /// User-visible downloads directory for exported files.
    pub downloads_dir: PathBuf,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sdk: SdkConfig,
    pub credentials: SharedSecret,
    pub storage: StorageConfig,
}

impl Config {
    /// Validate that the configuration is usable.
    ///
    /// # Errors
    /// Returns `SealboxError::Config` if a required field is empty.
    pub fn validate(&self) -> Result<()> {
        if self.sdk.api_url.is_empty() {
            return Err(SealboxError::Config("api_url must not be empty".into()));
        }
        if self.sdk.app_id.is_empty() {
            return Err(SealboxError::Config("app_id must not be empty".into()));
        }
        if self.credentials.key.is_empty() {
            return Err(SealboxError::Config("shared secret key must not be empty".into()));
        }
        Ok(())
    }
}
