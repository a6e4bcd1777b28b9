//! Document picker adapters

pub mod scripted;

pub use scripted::ScriptedPicker;
