//! Logging helpers for the trigger commands

use std::time::Duration;

use sealbox_domain::SealboxError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize telemetry for a hosting process.
///
/// Loads `.env` if present and installs a `tracing` subscriber honouring
/// `RUST_LOG` (default `info`). Safe to call more than once; later calls
/// are no-ops.
pub fn init_telemetry() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"workflows::encrypt_uri"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
/// * `error_type` - Stable error label when the command failed.
///
/// The helper keeps the command wrappers concise and consistent. Callers
/// must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&'static str>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, error_type, "command_execution_failure");
    }
}

/// Convert a `SealboxError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SealboxError) -> &'static str {
    match error {
        SealboxError::Sdk(_) => "sdk",
        SealboxError::Crypto(_) => "crypto",
        SealboxError::Picker(_) => "picker",
        SealboxError::Filesystem(_) => "filesystem",
        SealboxError::Config(_) => "config",
        SealboxError::Unavailable(_) => "unavailable",
        SealboxError::Internal(_) => "internal",
    }
}
