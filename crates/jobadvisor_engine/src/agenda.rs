//! The agenda: pending activations and conflict resolution.
//!
//! Activations are held per rule so that a declaration only forces the
//! rules that read the declared kind to be re-matched. Selection order is
//! salience (descending), then recency of the matched facts (most recent
//! first), then catalog order.

use std::cmp::Ordering;

use crate::rule::Activation;

/// Pool of not-yet-fired activations.
#[derive(Clone, Debug, Default)]
pub struct Agenda {
    /// Pending activations, indexed by rule position in the catalog.
    slots: Vec<Vec<Activation>>,
}

impl Agenda {
    /// Creates an empty agenda.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending activations of one rule.
    pub fn replace(&mut self, rule: usize, activations: Vec<Activation>) {
        if self.slots.len() <= rule {
            self.slots.resize_with(rule + 1, Vec::new);
        }
        self.slots[rule] = activations;
    }

    /// Returns the activation that would fire next.
    #[must_use]
    pub fn peek(&self) -> Option<&Activation> {
        self.slots
            .iter()
            .flatten()
            .min_by(|a, b| firing_order(a, b))
    }

    /// Removes and returns the activation that fires next.
    pub fn pop(&mut self) -> Option<Activation> {
        let (slot, index) = self
            .slots
            .iter()
            .enumerate()
            .flat_map(|(slot, pending)| {
                pending
                    .iter()
                    .enumerate()
                    .map(move |(index, activation)| (slot, index, activation))
            })
            .min_by(|a, b| firing_order(a.2, b.2))
            .map(|(slot, index, _)| (slot, index))?;
        Some(self.slots[slot].remove(index))
    }

    /// Returns every pending activation in firing order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Activation> {
        let mut all: Vec<_> = self.slots.iter().flatten().collect();
        all.sort_by(|a, b| firing_order(a, b));
        all
    }

    /// Returns the number of pending activations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Drops every pending activation.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Conflict resolution. `Less` means `a` fires before `b`.
#[must_use]
pub fn firing_order(a: &Activation, b: &Activation) -> Ordering {
    b.salience
        .cmp(&a.salience)
        .then_with(|| b.recency.cmp(&a.recency))
        .then_with(|| a.rule.cmp(&b.rule))
        .then_with(|| a.facts.cmp(&b.facts))
}
