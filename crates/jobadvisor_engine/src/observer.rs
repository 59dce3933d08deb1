//! Hooks for observing an engine run.
//!
//! The engine reports what it does through [`EngineObserver`]; every method
//! has a no-op default, so observers implement only what they need.

use jobadvisor_storage::{Fact, FactId};

use crate::rule::Activation;

/// Receives engine events as a run progresses.
pub trait EngineObserver {
    /// A new activation entered the agenda.
    fn rule_activated(&mut self, _activation: &Activation) {}

    /// An activation was selected and is about to fire.
    fn rule_firing(&mut self, _activation: &Activation) {}

    /// A fact was declared, by a rule or by the caller (`rule` is `None`).
    fn fact_declared(&mut self, _id: FactId, _fact: &Fact, _rule: Option<&'static str>) {}

    /// An activation finished firing, having declared `declared`.
    fn rule_fired(&mut self, _activation: &Activation, _declared: &[FactId]) {}

    /// The agenda emptied after `activations_fired` firings.
    fn run_complete(&mut self, _activations_fired: usize) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
