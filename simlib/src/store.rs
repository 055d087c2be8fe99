use crate::types::OutputText;

/// Holder of the latest completed run's output text.
///
/// Owned exclusively by the coordinator actor, whose message loop serializes
/// every publish and snapshot, so the slot itself needs no synchronization.
/// A later run silently overwrites an earlier run's text, viewed or not.
#[derive(Debug, Default)]
pub struct ResultSlot {
    text: Option<OutputText>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot with the output of a freshly completed run.
    pub fn publish(&mut self, text: OutputText) {
        self.text = Some(text);
    }

    /// Current value; the empty string until the first run completes.
    pub fn snapshot(&self) -> OutputText {
        self.text.clone().unwrap_or_default()
    }
}
