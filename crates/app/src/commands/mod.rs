//! Trigger commands - host UI to workflow bridge

mod shell;
mod workflows;

pub use shell::*;
pub use workflows::*;
