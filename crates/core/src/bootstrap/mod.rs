//! SDK bootstrap pipeline

pub mod service;

pub use service::{BootstrapService, SdkReady};
