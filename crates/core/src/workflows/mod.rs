//! User-triggered encryption workflows

pub mod service;

pub use service::WorkflowService;
