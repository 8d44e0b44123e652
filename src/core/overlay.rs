use crate::core::{history::History, sample::Sample};

/// Observable display state: the latest accepted reading plus the recent
/// history. [`Overlay::apply`] is the single mutation entry point, and the
/// watch loop's consumer task is its only caller.
pub struct Overlay {
    current: Option<Sample>,
    history: History,
}

impl Overlay {
    #[must_use]
    pub fn with_history_len(history_len: usize) -> Self {
        Self { current: None, history: History::with_capacity(history_len) }
    }

    pub fn apply(&mut self, sample: Sample) {
        self.history.push(sample.clone());
        self.current = Some(sample);
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Sample> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }
}
