//! Integration tests for the run loop
//!
//! Tests refraction, cascading, the kill switch, and custom rule sets.

use jobadvisor_engine::{
    AdvisorConfig, CompiledPattern, FactPattern, NoopObserver, ProductionRuleEngine, Rule,
    RuleContext, WorkingMemory, advise_with, job_rules,
};
use jobadvisor_foundation::{ErrorKind, Result, SemanticLimit};
use jobadvisor_storage::{Attr, Fact, FactKind, Job, Profile, Recommendation};

/// Declares a recommendation named after the next job in the cycle.
fn rotate(ctx: &mut RuleContext<'_>) -> Result<()> {
    let count = ctx.store().count_of_kind(FactKind::Recommendation);
    let job = Job::ALL[count % Job::ALL.len()];
    ctx.declare(Fact::Recommendation(Recommendation::new(
        job,
        format!("rotation {count}"),
    )));
    ctx.note(format!("rotate -> {job}"));
    Ok(())
}

/// Fires once per recommendation ever declared, each with a fresh reason.
fn runaway() -> Vec<Rule> {
    vec![
        Rule::new(
            "runaway",
            CompiledPattern::new()
                .with(FactPattern::new(FactKind::Profile))
                .with(FactPattern::new(FactKind::Recommendation).bind(Attr::Reason, "why")),
            rotate,
        ),
        Rule::new(
            "seed",
            CompiledPattern::new()
                .with(FactPattern::new(FactKind::Profile))
                .without(FactPattern::new(FactKind::Recommendation)),
            rotate,
        ),
    ]
}

#[test]
fn runaway_rules_hit_the_kill_switch() {
    let config = AdvisorConfig::new().with_max_activations(10);
    let err = advise_with(&Profile::new(), &config, &runaway(), &mut NoopObserver).unwrap_err();

    assert!(!err.is_validation());
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(SemanticLimit::MaxActivations { limit: 10, .. })
    ));
    // Every completed firing left its note
    assert_eq!(err.partial_trace().len(), 10);
    assert_eq!(err.partial_trace()[0], "rotate -> ADMIN");
}

#[test]
fn default_cap_is_generous() {
    let err = advise_with(
        &Profile::new(),
        &AdvisorConfig::default(),
        &runaway(),
        &mut NoopObserver,
    )
    .unwrap_err();

    assert_eq!(err.partial_trace().len(), 500);
}

#[test]
fn catalog_settles_well_within_cap() {
    let config = AdvisorConfig::new().with_max_activations(8);
    let profile = Profile::new()
        .prefers_indoor(true)
        .stable_schedule(true)
        .remote_ok(true)
        .skill_match(0.1)
        .salary_expectation(5000.0);

    let advice = advise_with(&profile, &config, job_rules(), &mut NoopObserver).unwrap();
    assert!(advice.activations_fired() <= 8);
}

#[test]
fn same_values_fire_once() {
    // it_skill_check binds only ?sm, so the IT recommendation that
    // admin_salary_adjust declares later does not re-trigger it
    let (mut memory, _) = WorkingMemory::seeded(Fact::Profile(
        Profile::new().skill_match(0.1).salary_expectation(5000.0),
    ));
    memory
        .store
        .declare(Fact::Recommendation(Recommendation::new(Job::It, "a")));

    let config = AdvisorConfig::default();
    let mut engine = ProductionRuleEngine::new();
    engine
        .run_to_quiescence(job_rules(), &mut memory, &config, &mut NoopObserver)
        .unwrap();

    assert_eq!(
        memory.trace.entries(),
        ["Rule: it_skill_check -> ADMIN", "Rule: admin_salary_adjust -> IT"]
    );
}

#[test]
fn engine_can_resume_with_new_facts() {
    let (mut memory, _) = WorkingMemory::seeded(Fact::Profile(
        Profile::new().salary_expectation(6000.0).skill_match(0.9),
    ));
    let config = AdvisorConfig::default();
    let mut engine = ProductionRuleEngine::new();

    assert_eq!(
        engine
            .run_to_quiescence(job_rules(), &mut memory, &config, &mut NoopObserver)
            .unwrap(),
        0
    );

    memory
        .store
        .declare(Fact::Recommendation(Recommendation::new(Job::Admin, "manual")));
    engine
        .run_to_quiescence(job_rules(), &mut memory, &config, &mut NoopObserver)
        .unwrap();

    assert_eq!(memory.trace.entries(), ["Rule: admin_salary_adjust -> IT"]);
    assert_eq!(memory.provenance.len(), 1);
}
