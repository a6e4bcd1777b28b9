//! Port interface for the document picker

use async_trait::async_trait;
use sealbox_domain::{PickerOptions, SelectedFile, SelectionError};

/// Single-selection file chooser capability.
///
/// Implementations copy the chosen file into the application cache before
/// returning it, so subsequent reads do not depend on the origin file's
/// accessibility scope.
#[async_trait]
pub trait DocumentPicker: Send + Sync {
    /// Present the picker and wait for the user's choice.
    async fn pick_single(
        &self,
        options: PickerOptions,
    ) -> std::result::Result<SelectedFile, SelectionError>;
}
