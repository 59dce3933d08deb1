//! Provenance tracking.
//!
//! Records, for every fact a rule declares, which rule declared it and
//! which facts the firing activation matched. Supports "why was this
//! recommended" walks back to the seed profile.

use std::collections::BTreeMap;

use jobadvisor_storage::FactId;

/// How a fact came to exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation {
    /// The derived fact.
    pub fact: FactId,
    /// The rule whose action declared it.
    pub rule: &'static str,
    /// Facts matched by the rule's positive clauses, in clause order.
    pub premises: Vec<FactId>,
}

impl Derivation {
    /// Creates a derivation record.
    #[must_use]
    pub fn new(fact: FactId, rule: &'static str, premises: Vec<FactId>) -> Self {
        Self {
            fact,
            rule,
            premises,
        }
    }
}

/// Derivations for every rule-declared fact in a run.
///
/// Facts seeded by the caller have no derivation.
#[derive(Clone, Debug, Default)]
pub struct ProvenanceTracker {
    derivations: BTreeMap<FactId, Derivation>,
}

impl ProvenanceTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a derivation.
    pub fn record(&mut self, derivation: Derivation) {
        self.derivations.insert(derivation.fact, derivation);
    }

    /// Returns how `fact` was derived, or `None` for seeded facts.
    #[must_use]
    pub fn derivation(&self, fact: FactId) -> Option<&Derivation> {
        self.derivations.get(&fact)
    }

    /// Returns the rule that declared `fact`.
    #[must_use]
    pub fn rule_for(&self, fact: FactId) -> Option<&'static str> {
        self.derivation(fact).map(|d| d.rule)
    }

    /// Iterates derivations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Derivation> {
        self.derivations.values()
    }

    /// Returns the facts declared by a rule, in declaration order.
    #[must_use]
    pub fn facts_by_rule(&self, rule: &str) -> Vec<FactId> {
        self.iter()
            .filter(|d| d.rule == rule)
            .map(|d| d.fact)
            .collect()
    }

    /// Returns the number of derived facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.derivations.len()
    }

    /// Returns true if no fact has been derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.derivations.is_empty()
    }
}
