//! Top-level advice: run one profile to quiescence and pick the answer.

use jobadvisor_foundation::{Record, Result};
use jobadvisor_storage::{Branch, Fact, FactId, FactKind, FactStore, Profile, Recommendation};

use crate::catalog::job_rules;
use crate::config::AdvisorConfig;
use crate::memory::WorkingMemory;
use crate::observer::{EngineObserver, NoopObserver};
use crate::provenance::ProvenanceTracker;
use crate::rule::{ProductionRuleEngine, Rule};

/// Outcome of one advisory run.
#[derive(Clone, Debug)]
pub struct Advice {
    recommendation: Option<Recommendation>,
    final_fact: Option<FactId>,
    trace: Vec<String>,
    store: FactStore,
    provenance: ProvenanceTracker,
    activations_fired: usize,
    profile: FactId,
}

impl Advice {
    /// The final (most refined) recommendation, if any.
    #[must_use]
    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Id of the fact holding the final recommendation.
    #[must_use]
    pub fn final_fact(&self) -> Option<FactId> {
        self.final_fact
    }

    /// Reason strings, in firing order.
    #[must_use]
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Every fact declared during the run, seed profile included.
    #[must_use]
    pub fn store(&self) -> &FactStore {
        &self.store
    }

    /// How each derived fact came about.
    #[must_use]
    pub fn provenance(&self) -> &ProvenanceTracker {
        &self.provenance
    }

    /// Number of rule firings.
    #[must_use]
    pub fn activations_fired(&self) -> usize {
        self.activations_fired
    }

    /// Id of the seed profile fact.
    #[must_use]
    pub fn profile(&self) -> FactId {
        self.profile
    }

    /// The selected branch, if one was.
    #[must_use]
    pub fn branch(&self) -> Option<Branch> {
        self.store
            .last_of_kind(FactKind::Branch)
            .and_then(|stored| stored.fact.as_branch())
    }

    /// Every recommendation declared, in declaration order.
    pub fn recommendations(&self) -> impl Iterator<Item = (FactId, &Recommendation)> {
        self.store
            .all_of_kind(FactKind::Recommendation)
            .filter_map(|stored| stored.fact.as_recommendation().map(|rec| (stored.id, rec)))
    }

    /// Splits into the caller-facing pair.
    #[must_use]
    pub fn into_parts(self) -> (Option<Recommendation>, Vec<String>) {
        (self.recommendation, self.trace)
    }
}

/// The last recommendation in declaration order.
#[must_use]
pub fn select_recommendation(store: &FactStore) -> Option<(FactId, Recommendation)> {
    store
        .last_of_kind(FactKind::Recommendation)
        .and_then(|stored| {
            stored
                .fact
                .as_recommendation()
                .map(|rec| (stored.id, rec.clone()))
        })
}

/// Advise on a profile with the job rules.
///
/// # Errors
/// Returns a `MaxActivations` limit error if the run does not settle
/// within `config.max_activations` firings.
pub fn advise(profile: &Profile, config: &AdvisorConfig) -> Result<Advice> {
    advise_with(profile, config, job_rules(), &mut NoopObserver)
}

/// Advise on a profile with an explicit rule set and observer.
///
/// # Errors
/// Returns a `MaxActivations` limit error if the run does not settle, or
/// whatever error a rule action raises.
pub fn advise_with(
    profile: &Profile,
    config: &AdvisorConfig,
    rules: &[Rule],
    observer: &mut dyn EngineObserver,
) -> Result<Advice> {
    let seed = Fact::Profile(profile.clone());
    let (mut memory, profile_id) = WorkingMemory::seeded(seed.clone());
    observer.fact_declared(profile_id, &seed, None);

    let mut engine = ProductionRuleEngine::from_config(config);
    let activations_fired = engine.run_to_quiescence(rules, &mut memory, config, observer)?;

    let WorkingMemory {
        store,
        provenance,
        trace,
    } = memory;
    let (final_fact, recommendation) = select_recommendation(&store).unzip();

    Ok(Advice {
        recommendation,
        final_fact,
        trace: trace.into_vec(),
        store,
        provenance,
        activations_fired,
        profile: profile_id,
    })
}

/// Validate a profile record, then advise on it.
///
/// # Errors
/// Returns a validation error for a malformed record (the engine does not
/// run), or any error [`advise`] returns.
pub fn advise_record(record: &Record, config: &AdvisorConfig) -> Result<Advice> {
    let profile = Profile::from_record(record)?;
    advise(&profile, config)
}
