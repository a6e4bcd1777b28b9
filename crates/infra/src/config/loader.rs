//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SEALBOX_API_URL`: SDK service endpoint
//! - `SEALBOX_APP_ID`: application identifier
//! - `SEALBOX_JWT_SECRET_ID`: identifier of the registration shared secret
//! - `SEALBOX_JWT_SECRET_KEY`: the registration shared secret
//! - `SEALBOX_CACHE_DIR`: application cache directory (optional)
//! - `SEALBOX_DOWNLOADS_DIR`: user-visible downloads directory (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml`
//! 2. `./sealbox.json` or `./sealbox.toml`
//! 3. The same names in the parent directory

use std::path::{Path, PathBuf};

use sealbox_domain::{Config, Result, SdkConfig, SealboxError, SharedSecret, StorageConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `SealboxError::Config` if configuration cannot be loaded from
/// either source or fails validation.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The SDK endpoint and credential variables are required; the storage
/// directories fall back to defaults under the system temp directory and
/// `./downloads`.
///
/// # Errors
/// Returns `SealboxError::Config` if a required variable is missing.
pub fn load_from_env() -> Result<Config> {
    let api_url = env_var("SEALBOX_API_URL")?;
    let app_id = env_var("SEALBOX_APP_ID")?;
    let key_id = env_var("SEALBOX_JWT_SECRET_ID")?;
    let key = env_var("SEALBOX_JWT_SECRET_KEY")?;

    let cache_dir = std::env::var("SEALBOX_CACHE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("sealbox").join("cache"));
    let downloads_dir = std::env::var("SEALBOX_DOWNLOADS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("downloads"));

    let config = Config {
        sdk: SdkConfig { api_url, app_id },
        credentials: SharedSecret { key_id, key },
        storage: StorageConfig { cache_dir, downloads_dir },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SealboxError::Config` if no file is found, the format is
/// invalid, or validation fails.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SealboxError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SealboxError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SealboxError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content, format detected by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SealboxError::Config(format!("Invalid TOML config: {e}"))),
        _ => serde_json::from_str(contents)
            .map_err(|e| SealboxError::Config(format!("Invalid JSON config: {e}"))),
    }
}

/// Probe the standard config file locations, returning the first that exists.
fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.json", "config.toml", "sealbox.json", "sealbox.toml"];
    let bases = [PathBuf::from("."), PathBuf::from("..")];

    for base in &bases {
        for name in &names {
            let candidate = base.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| SealboxError::Config(format!("Missing environment variable: {name}")))
}
