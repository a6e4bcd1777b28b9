//! Scriptable document picker mock

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use sealbox_core::DocumentPicker;
use sealbox_domain::{PickerOptions, SelectedFile, SelectionError};

/// Picker that replays a scripted sequence of outcomes.
///
/// Each `pick_single` call pops the next scripted outcome; an exhausted
/// script behaves like user cancellation. The number of consumed selections
/// is tracked so tests can assert exactly-once consumption.
#[derive(Default, Clone)]
pub struct QueuePicker {
    outcomes: Arc<Mutex<VecDeque<std::result::Result<SelectedFile, SelectionError>>>>,
    consumed: Arc<AtomicUsize>,
    options_seen: Arc<Mutex<Vec<PickerOptions>>>,
}

impl QueuePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful selection.
    pub fn with_selection(self, file: SelectedFile) -> Self {
        self.outcomes.lock().push_back(Ok(file));
        self
    }

    /// Script a picker outcome (cancellation, in-progress, failure).
    pub fn with_outcome(self, outcome: SelectionError) -> Self {
        self.outcomes.lock().push_back(Err(outcome));
        self
    }

    /// Selections actually handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed.load(Ordering::SeqCst)
    }

    /// Options received per request, in call order.
    pub fn options_seen(&self) -> Vec<PickerOptions> {
        self.options_seen.lock().clone()
    }
}

#[async_trait]
impl DocumentPicker for QueuePicker {
    async fn pick_single(
        &self,
        options: PickerOptions,
    ) -> std::result::Result<SelectedFile, SelectionError> {
        self.options_seen.lock().push(options);
        let next = self.outcomes.lock().pop_front();
        match next {
            Some(Ok(file)) => {
                self.consumed.fetch_add(1, Ordering::SeqCst);
                Ok(file)
            }
            Some(Err(err)) => Err(err),
            None => Err(SelectionError::Cancelled),
        }
    }
}
