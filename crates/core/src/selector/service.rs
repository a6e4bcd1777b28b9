//! Document selector - normalizes picker outcomes

use std::sync::Arc;

use sealbox_domain::{PickerOptions, Result, SelectedFile, SelectionError};
use tracing::{debug, warn};

use super::ports::DocumentPicker;

/// Wraps the picker capability and folds its two expected non-failure
/// conditions into a quiet `None`.
///
/// Cancellation is a normal user action; a request issued while another is
/// in flight drops the newer request with a warning. Anything else aborts
/// the calling workflow.
#[derive(Clone)]
pub struct DocumentSelector {
    picker: Arc<dyn DocumentPicker>,
    options: PickerOptions,
}

impl DocumentSelector {
    /// Create a selector using the default picker options.
    pub fn new(picker: Arc<dyn DocumentPicker>) -> Self {
        Self { picker, options: PickerOptions::default() }
    }

    /// Override the picker options.
    pub fn with_options(mut self, options: PickerOptions) -> Self {
        self.options = options;
        self
    }

    /// Ask the user to choose one file.
    ///
    /// Returns `Ok(None)` on cancellation or a duplicate request; only
    /// genuine picker failures surface as errors.
    pub async fn select(&self) -> Result<Option<SelectedFile>> {
        match self.picker.pick_single(self.options).await {
            Ok(file) => {
                debug!(name = %file.name, path = %file.path.display(), "document selected");
                Ok(Some(file))
            }
            Err(SelectionError::Cancelled) => {
                warn!("selection cancelled");
                Ok(None)
            }
            Err(SelectionError::InProgress) => {
                warn!("a picker is already open, dropping this request");
                Ok(None)
            }
            Err(SelectionError::Failed(err)) => Err(err),
        }
    }
}
