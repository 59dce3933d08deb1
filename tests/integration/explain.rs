//! Tracing and explanation across a real run

use jobadvisor::{AdvisorConfig, Profile, advise};
use jobadvisor_debug::{ObservabilityConfig, TraceEvent, Tracer, format_why, why};
use jobadvisor_engine::{advise_with, job_rules};
use jobadvisor_storage::FactKind;

fn outdoor_delivery() -> Profile {
    Profile::new()
        .prefers_outdoor(true)
        .high_physical(true)
        .has_driving_license(true)
        .willing_shifts(true)
}

#[test]
fn tracer_sees_every_declaration_in_order() {
    let mut tracer = Tracer::from_config(&ObservabilityConfig::enabled());
    let advice = advise_with(
        &outdoor_delivery(),
        &AdvisorConfig::default(),
        job_rules(),
        &mut tracer,
    )
    .unwrap();

    let declared: Vec<_> = tracer
        .buffer()
        .iter()
        .filter_map(|r| match &r.event {
            TraceEvent::FactDeclared { fact, kind, .. } => Some((*fact, *kind)),
            _ => None,
        })
        .collect();
    let stored: Vec<_> = advice
        .store()
        .iter()
        .map(|s| (s.id, s.fact.kind()))
        .collect();
    assert_eq!(declared, stored);
    assert_eq!(declared[1].1, FactKind::Branch);
}

#[test]
fn firings_follow_activations() {
    let mut tracer = Tracer::from_config(&ObservabilityConfig::enabled());
    advise_with(
        &outdoor_delivery(),
        &AdvisorConfig::default(),
        job_rules(),
        &mut tracer,
    )
    .unwrap();

    let fired: Vec<_> = tracer
        .buffer()
        .by_event_type("rule-firing")
        .iter()
        .filter_map(|r| r.event.rule())
        .collect();
    assert_eq!(
        fired,
        ["prefer_outdoor", "outdoor_delivery_shifts", "outdoor_delivery_full"]
    );

    // outdoor_sales was activated but never fired
    assert_eq!(tracer.buffer().by_rule("outdoor_sales").len(), 1);
}

#[test]
fn why_chain_reaches_the_profile() {
    let advice = advise(&outdoor_delivery(), &AdvisorConfig::default()).unwrap();
    let chain = why(&advice, advice.final_fact().unwrap(), 8);

    assert_eq!(chain.rules(), ["outdoor_delivery_full", "prefer_outdoor"]);
    assert!(chain.reaches_given());
    assert_eq!(chain.steps.last().map(|s| s.fact), Some(advice.profile()));

    let text = format_why(&chain);
    assert!(text.starts_with("f-3 Recommendation(DELIVERY: Outdoor+physical+driving+shifts -> DELIVERY)"));
    assert!(text.ends_with("f-0 Profile (given)\n"));
}

#[test]
fn every_derived_fact_is_explained() {
    let advice = advise(&outdoor_delivery(), &AdvisorConfig::default()).unwrap();

    for stored in advice.store().iter() {
        let chain = why(&advice, stored.id, 8);
        assert_eq!(chain.steps[0].fact, stored.id);
        assert_eq!(chain.steps[0].is_given(), stored.id == advice.profile());
    }
}
