//! Reason trace: the human-readable log of rule firings returned to callers.

/// Ordered reason strings, one per firing that chose to explain itself.
///
/// Owned by a single run and handed back with the result; nothing is shared
/// between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReasonTrace {
    entries: Vec<String>,
}

impl ReasonTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reason.
    pub fn push(&mut self, reason: impl Into<String>) {
        self.entries.push(reason.into());
    }

    /// Returns the reasons in firing order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the number of reasons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the trace, returning the reasons.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}
