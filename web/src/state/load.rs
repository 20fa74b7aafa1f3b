/// Loading/error status shared by the city store operations.
///
/// `pending` counts operations that have been dispatched but not settled, so overlapping
/// calls keep the store loading until the last one finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    pending: u32,
    error: Option<String>,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks an operation as in flight. A new attempt replaces the previous error.
    pub(crate) fn begin(&mut self) {
        self.pending += 1;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.pending = self.pending.saturating_sub(1);
        self.error = Some(message.into());
    }
}
