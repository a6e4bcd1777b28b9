//! Filesystem capability port

pub mod ports;

pub use ports::FileStore;
