//! Trace output formatting.

use std::fmt::Write;

use jobadvisor_storage::FactId;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn fact_list(facts: &[FactId]) -> String {
        facts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "C{:03} ", record.cycle);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::FactDeclared {
                fact,
                summary,
                rule,
                ..
            } => match rule {
                Some(rule) => format!("    ASSERT ({rule}) {fact} {summary}"),
                None => format!("    ASSERT {fact} {summary}"),
            },
            TraceEvent::RuleActivated {
                rule,
                salience,
                bindings,
                facts,
            } => {
                let facts = Self::fact_list(facts);
                if bindings.is_empty() {
                    format!("  ACTIVATED {rule} [{salience}] <{facts}>")
                } else {
                    let bindings_str: Vec<_> =
                        bindings.iter().map(|(k, v)| format!("?{k}={v}")).collect();
                    format!(
                        "  ACTIVATED {rule} [{salience}] <{facts}> {{{}}}",
                        bindings_str.join(", ")
                    )
                }
            }
            TraceEvent::RuleFiring { rule } => format!("  FIRING {rule}"),
            TraceEvent::RuleComplete { rule, declared } => {
                if declared.is_empty() {
                    format!("  COMPLETE {rule}")
                } else {
                    format!("  COMPLETE {rule} -> {}", Self::fact_list(declared))
                }
            }
            TraceEvent::RunComplete { activations_fired } => {
                format!("=== RUN COMPLETE ({activations_fired} fired) ===")
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// Tests
// =============================================================================
