//! Document selection: picker port and outcome normalization

pub mod ports;
pub mod service;

pub use ports::DocumentPicker;
pub use service::DocumentSelector;
