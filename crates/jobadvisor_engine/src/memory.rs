//! Working memory of a single run.

use jobadvisor_storage::{Fact, FactId, FactStore};

use crate::provenance::ProvenanceTracker;
use crate::trace::ReasonTrace;

/// Everything a run accumulates: facts, their provenance, and the reason trace.
///
/// Created fresh per run and discarded (or handed to the caller) afterwards.
#[derive(Clone, Debug, Default)]
pub struct WorkingMemory {
    /// Declared facts.
    pub store: FactStore,
    /// Which rule declared which fact.
    pub provenance: ProvenanceTracker,
    /// Reason strings, in firing order.
    pub trace: ReasonTrace,
}

impl WorkingMemory {
    /// Creates empty working memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates working memory seeded with one caller-supplied fact.
    #[must_use]
    pub fn seeded(fact: Fact) -> (Self, FactId) {
        let mut memory = Self::new();
        let id = memory.store.declare(fact);
        (memory, id)
    }
}
