//! Local filesystem adapter

pub mod local;

pub use local::LocalFileStore;
