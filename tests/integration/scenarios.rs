//! End-to-end advisory scenarios

use jobadvisor::{AdvisorConfig, Job, Profile, advise, advise_record};
use jobadvisor_foundation::{Record, Value};
use jobadvisor_storage::Branch;

fn run(profile: &Profile) -> (Option<Job>, Vec<String>) {
    let (rec, trace) = advise(profile, &AdvisorConfig::default())
        .unwrap()
        .into_parts();
    (rec.map(|r| r.job), trace)
}

#[test]
fn sample_profile_is_admin() {
    let record = Record::new()
        .with("prefers_indoor", true)
        .with("prefers_outdoor", false)
        .with("prefers_hybrid", false)
        .with("stable_schedule", true)
        .with("remote_ok", false)
        .with("education", "Bachelors")
        .with("skill_match", 0.3)
        .with("years_experience", 1_i64)
        .with("salary_expectation", 1800.0);

    let advice = advise_record(&record, &AdvisorConfig::default()).unwrap();
    let rec = advice.recommendation().unwrap();

    assert_eq!(rec.job, Job::Admin);
    assert_eq!(&*rec.reason, "Indoor + stable + modest salary");
    assert_eq!(advice.trace(), ["Branch: indoor", "Rule: indoor_admin"]);
}

#[test]
fn outdoor_with_everything_is_delivery() {
    let (job, trace) = run(&Profile::new()
        .prefers_outdoor(true)
        .high_physical(true)
        .has_driving_license(true)
        .willing_shifts(true));

    assert_eq!(job, Some(Job::Delivery));
    assert_eq!(trace[0], "Branch: outdoor");
    assert!(!trace.iter().any(|t| t.contains("outdoor_sales")));
}

#[test]
fn outdoor_shifts_only_is_delivery() {
    let (job, trace) = run(&Profile::new().prefers_outdoor(true).willing_shifts(true));

    assert_eq!(job, Some(Job::Delivery));
    assert_eq!(trace, ["Branch: outdoor", "Rule: outdoor_delivery_shifts"]);
}

#[test]
fn outdoor_without_shifts_is_sales() {
    let (job, trace) = run(&Profile::new().prefers_outdoor(true).high_physical(true));

    assert_eq!(job, Some(Job::Sales));
    assert_eq!(trace, ["Branch: outdoor", "Rule: outdoor_sales"]);
}

#[test]
fn hybrid_remote_is_freelance() {
    let (job, _) = run(&Profile::new()
        .prefers_hybrid(true)
        .skill_match(0.8)
        .years_experience(3)
        .remote_ok(true));
    assert_eq!(job, Some(Job::RemoteFreelance));
}

#[test]
fn hybrid_onsite_is_it() {
    let (job, _) = run(&Profile::new()
        .prefers_hybrid(true)
        .skill_match(0.8)
        .years_experience(3)
        .remote_ok(false));
    assert_eq!(job, Some(Job::It));
}

#[test]
fn hybrid_some_experience_is_it() {
    let (job, trace) = run(&Profile::new()
        .prefers_hybrid(true)
        .skill_match(0.5)
        .years_experience(1));

    assert_eq!(job, Some(Job::It));
    assert_eq!(trace, ["Branch: hybrid", "Rule: hybrid fallback -> IT"]);
}

#[test]
fn no_preferences_gives_nothing() {
    let (job, trace) = run(&Profile::new()
        .stable_schedule(true)
        .remote_ok(true)
        .skill_match(0.9)
        .salary_expectation(3000.0));

    assert_eq!(job, None);
    assert!(trace.is_empty());
}

#[test]
fn indoor_remote_low_salary_is_freelance() {
    let (job, _) = run(&Profile::new()
        .prefers_indoor(true)
        .remote_ok(true)
        .skill_match(0.7)
        .salary_expectation(1000.0));
    assert_eq!(job, Some(Job::RemoteFreelance));
}

#[test]
fn indoor_remote_high_salary_is_it() {
    let (job, trace) = run(&Profile::new()
        .prefers_indoor(true)
        .remote_ok(true)
        .skill_match(0.7)
        .salary_expectation(4000.0));

    assert_eq!(job, Some(Job::It));
    assert_eq!(trace, ["Branch: indoor", "Rule: indoor_remote_it -> IT"]);
}

#[test]
fn indoor_high_salary_low_skill_is_refined() {
    let (job, trace) = run(&Profile::new()
        .prefers_indoor(true)
        .stable_schedule(true)
        .skill_match(0.2)
        .salary_expectation(4500.0));

    // indoor_admin declines, fallback says IT, low skill downgrades to ADMIN,
    // high salary upgrades back to IT once; refraction stops the loop there
    assert_eq!(
        trace,
        [
            "Branch: indoor",
            "Rule: indoor_fallback_it",
            "Rule: it_skill_check -> ADMIN",
            "Rule: admin_salary_adjust -> IT",
        ]
    );
    assert_eq!(job, Some(Job::It));
}

#[test]
fn hybrid_dominates_other_preferences() {
    let advice = advise(
        &Profile::new()
            .prefers_indoor(true)
            .prefers_outdoor(true)
            .prefers_hybrid(true),
        &AdvisorConfig::default(),
    )
    .unwrap();

    assert_eq!(advice.branch(), Some(Branch::Hybrid));
    assert_eq!(advice.trace()[0], "Branch: hybrid");
}

#[test]
fn indoor_dominates_outdoor() {
    let advice = advise(
        &Profile::new().prefers_indoor(true).prefers_outdoor(true),
        &AdvisorConfig::default(),
    )
    .unwrap();

    assert_eq!(advice.branch(), Some(Branch::Indoor));
}

#[test]
fn integer_salary_is_accepted() {
    let record = Record::new()
        .with("prefers_indoor", true)
        .with("stable_schedule", true)
        .with("salary_expectation", Value::Int(1500));

    let advice = advise_record(&record, &AdvisorConfig::default()).unwrap();
    assert_eq!(advice.recommendation().map(|r| r.job), Some(Job::Admin));
}
