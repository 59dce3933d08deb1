//! Integration tests for pattern matching
//!
//! Tests joins, bindings, and negation against a populated fact store.

use jobadvisor_engine::{CompiledPattern, FactPattern, PatternMatcher};
use jobadvisor_foundation::Value;
use jobadvisor_storage::{Attr, Branch, Fact, FactId, FactKind, FactStore, Job, Profile, Recommendation};

fn store(profile: Profile, rest: Vec<Fact>) -> FactStore {
    let mut store = FactStore::new();
    store.declare(Fact::Profile(profile));
    for fact in rest {
        store.declare(fact);
    }
    store
}

fn rec(job: Job) -> Fact {
    Fact::Recommendation(Recommendation::new(job, "test"))
}

// =============================================================================
// Positive Clauses
// =============================================================================

#[test]
fn join_binds_across_clauses() {
    let store = store(
        Profile::new().remote_ok(true).skill_match(0.7),
        vec![Fact::Branch(Branch::Indoor)],
    );
    let pattern = CompiledPattern::new()
        .with(FactPattern::new(FactKind::Branch).eq(Attr::Branch, Branch::Indoor))
        .with(
            FactPattern::new(FactKind::Profile)
                .eq(Attr::RemoteOk, true)
                .bind(Attr::SkillMatch, "sm"),
        );

    let matches = PatternMatcher::match_pattern(&pattern, &store);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].facts, [FactId(1), FactId(0)]);
    assert_eq!(matches[0].bindings.get("sm"), Some(&Value::Float(0.7)));
}

#[test]
fn one_match_per_fact_combination() {
    let store = store(Profile::new(), vec![rec(Job::It), rec(Job::Admin), rec(Job::It)]);
    let pattern = CompiledPattern::new()
        .with(FactPattern::new(FactKind::Recommendation).eq(Attr::Job, Job::It));

    let matches = PatternMatcher::match_pattern(&pattern, &store);
    let facts: Vec<_> = matches.iter().map(|m| m.facts[0]).collect();
    assert_eq!(facts, [FactId(1), FactId(3)]);
}

#[test]
fn literal_on_keyword_attribute() {
    let store = store(Profile::new(), vec![Fact::Branch(Branch::Outdoor)]);
    let indoor = CompiledPattern::new()
        .with(FactPattern::new(FactKind::Branch).eq(Attr::Branch, Branch::Indoor));
    let outdoor = CompiledPattern::new()
        .with(FactPattern::new(FactKind::Branch).eq(Attr::Branch, Branch::Outdoor));

    assert!(PatternMatcher::match_pattern(&indoor, &store).is_empty());
    assert_eq!(PatternMatcher::match_pattern(&outdoor, &store).len(), 1);
}

#[test]
fn repeated_variable_must_unify() {
    let store = store(Profile::new(), vec![rec(Job::It), rec(Job::Admin)]);
    let pattern = CompiledPattern::new()
        .with(FactPattern::new(FactKind::Recommendation).bind(Attr::Job, "j"))
        .with(FactPattern::new(FactKind::Recommendation).bind(Attr::Job, "j"));

    // Each recommendation pairs only with itself
    let matches = PatternMatcher::match_pattern(&pattern, &store);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.facts[0] == m.facts[1]));
}

// =============================================================================
// Negation
// =============================================================================

#[test]
fn negation_of_any_fact_of_kind() {
    let pattern = CompiledPattern::new()
        .with(FactPattern::new(FactKind::Branch).eq(Attr::Branch, Branch::Outdoor))
        .without(FactPattern::new(FactKind::Recommendation));

    let before = store(Profile::new(), vec![Fact::Branch(Branch::Outdoor)]);
    assert_eq!(PatternMatcher::match_pattern(&pattern, &before).len(), 1);

    let after = store(
        Profile::new(),
        vec![Fact::Branch(Branch::Outdoor), rec(Job::Delivery)],
    );
    assert!(PatternMatcher::match_pattern(&pattern, &after).is_empty());
}

#[test]
fn negation_sees_positive_bindings() {
    // Recommendations whose job has no "other"-reason recommendation
    let pattern = CompiledPattern::new()
        .with(FactPattern::new(FactKind::Recommendation).bind(Attr::Job, "j"))
        .without(
            FactPattern::new(FactKind::Recommendation)
                .bind(Attr::Job, "j")
                .eq(Attr::Reason, "other"),
        );

    let store = store(
        Profile::new(),
        vec![
            rec(Job::It),
            rec(Job::Admin),
            Fact::Recommendation(Recommendation::new(Job::It, "other")),
        ],
    );

    let matches = PatternMatcher::match_pattern(&pattern, &store);
    let jobs: Vec<_> = matches
        .iter()
        .filter_map(|m| m.bindings.get("j").cloned())
        .collect();
    assert_eq!(jobs, [Value::from(Job::Admin)]);
}

#[test]
fn negation_only_pattern() {
    let pattern = CompiledPattern::new().without(FactPattern::new(FactKind::Branch));

    let empty = store(Profile::new(), vec![]);
    let matches = PatternMatcher::match_pattern(&pattern, &empty);
    assert_eq!(matches.len(), 1);
    assert!(matches[0].facts.is_empty());

    let branched = store(Profile::new(), vec![Fact::Branch(Branch::Hybrid)]);
    assert!(PatternMatcher::match_pattern(&pattern, &branched).is_empty());
}
