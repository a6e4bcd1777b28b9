//! Shell state commands

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::shell::ShellPhase;
use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Current shell phase, for the host UI to render.
pub fn shell_status(ctx: &Arc<AppContext>) -> ShellPhase {
    ctx.phase()
}

/// Trigger "retry": re-run the bootstrap pipeline from the failed state.
pub async fn retry_bootstrap(ctx: &Arc<AppContext>) -> ShellPhase {
    let command_name = "shell::retry_bootstrap";
    let start = Instant::now();

    info!(command = command_name, "Retrying bootstrap");
    let phase = ctx.retry_bootstrap().await;

    log_command_execution(command_name, start.elapsed(), phase.triggers_enabled(), None);
    phase
}
