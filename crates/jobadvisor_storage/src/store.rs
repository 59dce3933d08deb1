//! Append-only fact storage.
//!
//! The store assigns each declared fact the next sequential [`FactId`] and
//! never removes or mutates a fact afterwards. Backed by a persistent
//! vector, so cloning a store to snapshot it is cheap.

use im::Vector;

use crate::fact::{Fact, FactId, FactKind};

/// A fact together with the identity it was declared under.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredFact {
    /// Declaration id.
    pub id: FactId,
    /// The fact itself.
    pub fact: Fact,
}

/// Insertion-ordered, append-only collection of facts.
#[derive(Clone, Debug, Default)]
pub struct FactStore {
    facts: Vector<StoredFact>,
}

impl FactStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fact and returns its id.
    pub fn declare(&mut self, fact: Fact) -> FactId {
        let id = FactId(self.facts.len() as u64);
        self.facts.push_back(StoredFact { id, fact });
        id
    }

    /// Looks a fact up by id.
    #[must_use]
    pub fn get(&self, id: FactId) -> Option<&Fact> {
        self.facts.get(id.index()).map(|stored| &stored.fact)
    }

    /// Iterates every fact in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &StoredFact> {
        self.facts.iter()
    }

    /// Iterates the facts of one kind in declaration order.
    pub fn all_of_kind(&self, kind: FactKind) -> impl Iterator<Item = &StoredFact> {
        self.facts.iter().filter(move |stored| stored.fact.kind() == kind)
    }

    /// Returns the most recently declared fact of a kind.
    #[must_use]
    pub fn last_of_kind(&self, kind: FactKind) -> Option<&StoredFact> {
        self.all_of_kind(kind).last()
    }

    /// Counts the facts of one kind.
    #[must_use]
    pub fn count_of_kind(&self, kind: FactKind) -> usize {
        self.all_of_kind(kind).count()
    }

    /// Returns the number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Returns the id the next declared fact will receive.
    #[must_use]
    pub fn next_id(&self) -> FactId {
        FactId(self.facts.len() as u64)
    }
}
