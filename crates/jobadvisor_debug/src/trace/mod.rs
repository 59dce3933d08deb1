//! Tracing of engine runs.
//!
//! [`Tracer`] plugs into the engine as an [`EngineObserver`] and records
//! every declaration, activation, and firing, with zero overhead when
//! disabled.

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use jobadvisor_engine::{Activation, EngineObserver};
use jobadvisor_storage::{Fact, FactId};

use crate::config::ObservabilityConfig;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write to stderr as events happen.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 1000,
            output: TraceOutput::None,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

impl From<&ObservabilityConfig> for TracerConfig {
    fn from(config: &ObservabilityConfig) -> Self {
        Self {
            enabled: config.enabled,
            buffer_size: config.buffer_size,
            output: if config.trace_to_stderr {
                TraceOutput::Stderr
            } else {
                TraceOutput::None
            },
            event_filter: Vec::new(),
        }
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records engine events.
///
/// The `record` method returns immediately if tracing is off.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    cycle: usize,
    start_time: Instant,
    formatter: HumanFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            cycle: 0,
            start_time: Instant::now(),
            formatter: HumanFormatter::new(),
        }
    }

    /// Creates a tracer from the observability settings.
    #[must_use]
    pub fn from_config(config: &ObservabilityConfig) -> Self {
        Self::new(config.into())
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Number of firings seen so far.
    #[must_use]
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        // Fast path - if disabled, return immediately
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|filter| filter == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.cycle, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.formatter.format(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats every buffered record.
    #[must_use]
    pub fn format_all(&self) -> String {
        let records: Vec<_> = self.buffer.iter().collect();
        self.formatter.format_many(&records)
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cycle = 0;
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl EngineObserver for Tracer {
    fn rule_activated(&mut self, activation: &Activation) {
        if !self.is_enabled() {
            return;
        }
        self.record(TraceEvent::RuleActivated {
            rule: activation.rule_name,
            salience: activation.salience,
            bindings: activation
                .bindings
                .iter()
                .map(|(var, value)| (var, value.clone()))
                .collect(),
            facts: activation.facts.clone(),
        });
    }

    fn rule_firing(&mut self, activation: &Activation) {
        self.record(TraceEvent::RuleFiring {
            rule: activation.rule_name,
        });
    }

    fn fact_declared(&mut self, id: FactId, fact: &Fact, rule: Option<&'static str>) {
        if !self.is_enabled() {
            return;
        }
        self.record(TraceEvent::FactDeclared {
            fact: id,
            kind: fact.kind(),
            summary: fact.to_string(),
            rule,
        });
    }

    fn rule_fired(&mut self, activation: &Activation, declared: &[FactId]) {
        if self.is_enabled() {
            self.record(TraceEvent::RuleComplete {
                rule: activation.rule_name,
                declared: declared.to_vec(),
            });
        }
        self.cycle += 1;
    }

    fn run_complete(&mut self, activations_fired: usize) {
        self.record(TraceEvent::RunComplete { activations_fired });
    }
}

// =============================================================================
// Tests
// =============================================================================
