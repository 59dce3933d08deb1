//! Forward-chaining rule engine and job rule catalog for the job advisor.
//!
//! This crate provides:
//! - [`PatternMatcher`] - Positive and negated pattern matching over a [`FactStore`]
//! - [`Agenda`] - Pending activations ordered by salience, then recency
//! - [`ProductionRuleEngine`] - Refraction, firing, and the run-to-quiescence loop
//! - [`ProvenanceTracker`] - Which rule derived which fact, from which premises
//! - [`catalog`] - The job recommendation rules
//! - [`advise`] - Runs one profile to quiescence and selects the final recommendation
//!
//! [`FactStore`]: jobadvisor_storage::FactStore

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod advise;
pub mod agenda;
pub mod catalog;
pub mod config;
pub mod memory;
pub mod observer;
pub mod pattern;
pub mod provenance;
pub mod rule;
pub mod trace;

pub use advise::{Advice, advise, advise_record, advise_with, select_recommendation};
pub use agenda::Agenda;
pub use catalog::job_rules;
pub use config::{AdvisorConfig, SalaryBand};
pub use memory::WorkingMemory;
pub use observer::{EngineObserver, NoopObserver};
pub use pattern::{Bindings, CompiledPattern, Constraint, FactPattern, Match, PatternMatcher};
pub use provenance::{Derivation, ProvenanceTracker};
pub use rule::{Activation, ProductionRuleEngine, Rule, RuleAction, RuleContext};
pub use trace::ReasonTrace;
