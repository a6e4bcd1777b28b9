//! Workflow trigger commands
//!
//! One command per trigger surface. Each command is the uniform error
//! boundary around its workflow: failures come back as error values with a
//! stable label, never as a panic that would take the shell down.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use sealbox_domain::constants::{DEMO_CONTENT, DEMO_FILENAME};
use sealbox_domain::{ClearFile, PathTimings, Result};
use tracing::info;

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Trigger "File as String": encrypt an inline demo payload and decrypt it
/// again, logging the recovered filename and content.
///
/// Always executes; the payload is inline, no selection is involved.
pub async fn encrypt_decrypt_as_string(ctx: &Arc<AppContext>) -> Result<ClearFile> {
    let command_name = "workflows::encrypt_decrypt_as_string";
    let start = Instant::now();

    info!(command = command_name, "Running string round-trip");
    let result = match ctx.workflows() {
        Ok(workflows) => workflows.round_trip_string(DEMO_CONTENT, DEMO_FILENAME).await,
        Err(err) => Err(err),
    };

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);
    result
}

/// Trigger "encrypt URI": pick a file, encrypt it by reference and export
/// the ciphertext to downloads as `<name>.seald`.
///
/// Returns `Ok(None)` when the user selected nothing.
pub async fn encrypt_uri(ctx: &Arc<AppContext>) -> Result<Option<PathBuf>> {
    let command_name = "workflows::encrypt_uri";
    let start = Instant::now();

    info!(command = command_name, "Running URI encryption");
    let result = match ctx.workflows() {
        Ok(workflows) => workflows.encrypt_document().await,
        Err(err) => Err(err),
    };

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);
    result
}

/// Trigger "decrypt URI": pick an encrypted file, decrypt it by reference
/// and export the clear copy to downloads under its recovered filename.
///
/// Returns `Ok(None)` when the user selected nothing.
pub async fn decrypt_uri(ctx: &Arc<AppContext>) -> Result<Option<PathBuf>> {
    let command_name = "workflows::decrypt_uri";
    let start = Instant::now();

    info!(command = command_name, "Running URI decryption");
    let result = match ctx.workflows() {
        Ok(workflows) => workflows.decrypt_document().await,
        Err(err) => Err(err),
    };

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);
    result
}

/// Trigger "comparison": time the accelerated path against the naive
/// read/encrypt/write path on a picked file and log the four durations.
///
/// Returns `Ok(None)` when the user selected nothing.
pub async fn comparison(ctx: &Arc<AppContext>) -> Result<Option<PathTimings>> {
    let command_name = "workflows::comparison";
    let start = Instant::now();

    info!(command = command_name, "Running path comparison");
    let result = match ctx.workflows() {
        Ok(workflows) => workflows.compare_paths().await,
        Err(err) => Err(err),
    };

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);
    result
}
