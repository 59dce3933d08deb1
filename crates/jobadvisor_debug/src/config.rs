//! Configuration for the observability system.

/// Configuration for the observability system.
///
/// Controls engine tracing and the depth of why-explanations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Whether tracing is enabled (false = zero overhead).
    pub enabled: bool,

    /// Trace ring buffer size (number of records to retain).
    pub buffer_size: usize,

    /// Default depth for why-explanations.
    pub why_depth: usize,

    /// Output trace to stderr.
    pub trace_to_stderr: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 1000,
            why_depth: 8,
            trace_to_stderr: false,
        }
    }
}

impl ObservabilityConfig {
    /// Creates a new configuration with tracing enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Creates a configuration that streams every event to stderr.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            enabled: true,
            buffer_size: 10_000,
            why_depth: 32,
            trace_to_stderr: true,
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to set default why depth.
    #[must_use]
    pub fn with_why_depth(mut self, depth: usize) -> Self {
        self.why_depth = depth;
        self
    }

    /// Builder method to enable/disable stderr tracing.
    #[must_use]
    pub fn with_trace_to_stderr(mut self, trace: bool) -> Self {
        self.trace_to_stderr = trace;
        self
    }
}
