//! SDK lifecycle, encryption session and accelerator ports

pub mod ports;

pub use ports::{EncryptionSession, FileCryptor, SdkClient, SdkLifecycle};
