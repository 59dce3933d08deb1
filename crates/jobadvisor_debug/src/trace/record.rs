//! Trace event and record types.
//!
//! This module defines the events that can be traced during an engine run.

use jobadvisor_foundation::Value;
use jobadvisor_storage::{FactId, FactKind};

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during an engine run.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// A fact entered the store.
    FactDeclared {
        /// The new fact.
        fact: FactId,
        /// Its kind.
        kind: FactKind,
        /// One-line rendering of the fact.
        summary: String,
        /// The rule that declared it (`None` for the seed profile).
        rule: Option<&'static str>,
    },

    /// A rule has been activated (pattern matched).
    RuleActivated {
        /// The rule that was activated.
        rule: &'static str,
        /// Rule salience.
        salience: i32,
        /// The variable bindings from pattern matching.
        bindings: Vec<(&'static str, Value)>,
        /// The facts that matched.
        facts: Vec<FactId>,
    },

    /// A rule is about to fire.
    RuleFiring {
        /// The rule that is firing.
        rule: &'static str,
    },

    /// A rule has completed firing.
    RuleComplete {
        /// The rule that completed.
        rule: &'static str,
        /// Facts it declared.
        declared: Vec<FactId>,
    },

    /// The agenda emptied.
    RunComplete {
        /// Number of firings in the run.
        activations_fired: usize,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::FactDeclared { .. } => "fact-declared",
            Self::RuleActivated { .. } => "rule-activated",
            Self::RuleFiring { .. } => "rule-firing",
            Self::RuleComplete { .. } => "rule-complete",
            Self::RunComplete { .. } => "run-complete",
        }
    }

    /// Returns true if this is a rule-related event.
    #[must_use]
    pub fn is_rule_event(&self) -> bool {
        matches!(
            self,
            Self::RuleActivated { .. } | Self::RuleFiring { .. } | Self::RuleComplete { .. }
        )
    }

    /// Returns the rule the event concerns, if any.
    #[must_use]
    pub fn rule(&self) -> Option<&'static str> {
        match self {
            Self::RuleActivated { rule, .. }
            | Self::RuleFiring { rule }
            | Self::RuleComplete { rule, .. } => Some(rule),
            Self::FactDeclared { rule, .. } => *rule,
            Self::RunComplete { .. } => None,
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the tracer.
    pub id: u64,
    /// Number of firings completed when the event occurred.
    pub cycle: usize,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, cycle: usize, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            cycle,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
