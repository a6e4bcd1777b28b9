//! # Sealbox Core
//!
//! Pure orchestration layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the SDK, accelerator, picker and
//!   filesystem capabilities
//! - The bootstrap pipeline, document selector and workflow services
//!
//! ## Architecture Principles
//! - Only depends on `sealbox-domain`
//! - No SDK, filesystem, or platform code
//! - All external dependencies via traits
//! - Pure, testable orchestration logic

pub mod bootstrap;
pub mod files;
pub mod sdk;
pub mod selector;
pub mod workflows;

// Re-export specific items to avoid ambiguity
pub use bootstrap::{BootstrapService, SdkReady};
pub use files::ports::FileStore;
pub use sdk::ports::{EncryptionSession, FileCryptor, SdkClient, SdkLifecycle};
pub use selector::ports::DocumentPicker;
pub use selector::DocumentSelector;
pub use workflows::WorkflowService;
