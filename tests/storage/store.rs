//! Fact store behavior

use jobadvisor_storage::{Branch, Fact, FactId, FactKind, FactStore, Job, Profile, Recommendation};

fn recommendation(job: Job) -> Fact {
    Fact::Recommendation(Recommendation::new(job, "test"))
}

#[test]
fn ids_follow_declaration_order() {
    let mut store = FactStore::new();
    let a = store.declare(Fact::Profile(Profile::new()));
    let b = store.declare(Fact::Branch(Branch::Outdoor));
    let c = store.declare(recommendation(Job::Sales));

    assert_eq!([a, b, c], [FactId(0), FactId(1), FactId(2)]);
    assert_eq!(store.next_id(), FactId(3));
    assert!(a < b && b < c);
}

#[test]
fn all_of_kind_is_in_declaration_order() {
    let mut store = FactStore::new();
    store.declare(Fact::Profile(Profile::new()));
    store.declare(recommendation(Job::Admin));
    store.declare(Fact::Branch(Branch::Indoor));
    store.declare(recommendation(Job::It));

    let jobs: Vec<_> = store
        .all_of_kind(FactKind::Recommendation)
        .filter_map(|stored| stored.fact.as_recommendation().map(|r| r.job))
        .collect();
    assert_eq!(jobs, [Job::Admin, Job::It]);
    assert_eq!(store.count_of_kind(FactKind::Branch), 1);
}

#[test]
fn last_of_kind_is_most_recent() {
    let mut store = FactStore::new();
    store.declare(recommendation(Job::Admin));
    let last = store.declare(recommendation(Job::It));

    assert_eq!(store.last_of_kind(FactKind::Recommendation).map(|s| s.id), Some(last));
    assert!(store.last_of_kind(FactKind::Branch).is_none());
}

#[test]
fn earlier_snapshots_are_unaffected() {
    let mut store = FactStore::new();
    store.declare(Fact::Profile(Profile::new()));
    let snapshot = store.clone();

    store.declare(Fact::Branch(Branch::Hybrid));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.len(), 2);
    assert!(snapshot.get(FactId(1)).is_none());
}
