//! # Sealbox App
//!
//! Application layer - trigger commands and shell state.
//!
//! This crate contains:
//! - The trigger commands (the host UI binds one button per command)
//! - Application context (dependency injection)
//! - The presentation shell state machine
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Host-UI agnostic: any event loop that can await these commands can
//!   render the shell

pub mod commands;
pub mod context;
pub mod shell;
pub mod utils;

// Re-export for convenience
pub use commands::{
    comparison, decrypt_uri, encrypt_decrypt_as_string, encrypt_uri, retry_bootstrap,
    shell_status,
};
pub use context::AppContext;
pub use shell::ShellPhase;
pub use utils::logging::init_telemetry;
