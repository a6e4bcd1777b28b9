//! Mock capability implementations for testing
//!
//! Provides in-memory mocks for the SDK, accelerator, picker and filesystem
//! ports, enabling deterministic unit tests without a real SDK or device.

#![allow(dead_code)]

pub mod envelope;
pub mod fs;
pub mod picker;
pub mod sdk;

pub use fs::{MemoryFileStore, MemoryFs};
pub use picker::QueuePicker;
pub use sdk::{FailStep, MockCryptor, MockSdk, MockSession};
