//! # Sealbox Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment variables and config files)
//! - Local filesystem store (cache and downloads directories)
//! - Scripted document picker for headless runs and tests
//!
//! ## Architecture
//! - Implements traits defined in `sealbox-core`
//! - Contains all "impure" code (I/O)
//! - The real SDK and accelerator bindings stay outside this workspace;
//!   only their ports are defined here

pub mod config;
pub mod fs;
pub mod picker;

// Re-export commonly used items
pub use fs::LocalFileStore;
pub use picker::ScriptedPicker;
