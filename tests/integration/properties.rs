//! Property tests over generated profiles

use std::collections::HashSet;

use jobadvisor::{AdvisorConfig, Job, Profile, advise};
use jobadvisor_engine::{Activation, Advice, EngineObserver, advise_with, job_rules};
use jobadvisor_storage::{Branch, FactKind};
use proptest::prelude::*;

fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        any::<[bool; 8]>(),
        prop::sample::select(vec!["None", "Highschool", "Bachelors", "Masters"]),
        0.0f64..=1.0,
        0i64..12,
        0.0f64..9000.0,
    )
        .prop_map(|(flags, education, skill, years, salary)| {
            Profile::new()
                .prefers_indoor(flags[0])
                .prefers_outdoor(flags[1])
                .prefers_hybrid(flags[2])
                .stable_schedule(flags[3])
                .remote_ok(flags[4])
                .high_physical(flags[5])
                .willing_shifts(flags[6])
                .has_driving_license(flags[7])
                .education(education)
                .skill_match(skill)
                .years_experience(years)
                .salary_expectation(salary)
        })
}

fn run(profile: &Profile) -> Advice {
    advise(profile, &AdvisorConfig::default()).unwrap()
}

/// Collects (rule, refraction key) for every firing.
#[derive(Default)]
struct Firings(Vec<(&'static str, u64)>);

impl EngineObserver for Firings {
    fn rule_firing(&mut self, activation: &Activation) {
        self.0.push((activation.rule_name, activation.refraction_key()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn advice_is_deterministic(profile in arb_profile()) {
        let first = run(&profile);
        let second = run(&profile);

        prop_assert_eq!(first.recommendation(), second.recommendation());
        prop_assert_eq!(first.trace(), second.trace());
        prop_assert_eq!(first.activations_fired(), second.activations_fired());
    }

    #[test]
    fn at_most_one_branch(profile in arb_profile()) {
        let advice = run(&profile);

        prop_assert!(advice.store().count_of_kind(FactKind::Branch) <= 1);
        let branch_lines = advice.trace().iter().filter(|t| t.starts_with("Branch: ")).count();
        prop_assert!(branch_lines <= 1);

        let expected = if profile.prefers_hybrid {
            Some(Branch::Hybrid)
        } else if profile.prefers_indoor {
            Some(Branch::Indoor)
        } else if profile.prefers_outdoor {
            Some(Branch::Outdoor)
        } else {
            None
        };
        prop_assert_eq!(advice.branch(), expected);
    }

    #[test]
    fn no_activation_fires_twice(profile in arb_profile()) {
        let mut firings = Firings::default();
        let advice = advise_with(&profile, &AdvisorConfig::default(), job_rules(), &mut firings)
            .unwrap();

        let unique: HashSet<_> = firings.0.iter().collect();
        prop_assert_eq!(unique.len(), firings.0.len());
        prop_assert_eq!(firings.0.len(), advice.activations_fired());
        // Twelve rules, each with a handful of distinct bindings at most
        prop_assert!(advice.activations_fired() <= 16);
    }

    #[test]
    fn final_answer_is_last_recommendation(profile in arb_profile()) {
        let advice = run(&profile);
        let last = advice.recommendations().last().map(|(_, rec)| rec.clone());
        prop_assert_eq!(advice.recommendation().cloned(), last);
    }

    #[test]
    fn refinement_follows_the_rule_table(profile in arb_profile()) {
        let advice = run(&profile);
        let config = AdvisorConfig::default();
        let jobs: Vec<Job> = advice.recommendations().map(|(_, rec)| rec.job).collect();

        if let Some(first_admin) = jobs.iter().position(|j| *j == Job::Admin) {
            if profile.salary_expectation > config.salary_med {
                prop_assert!(jobs[first_admin + 1..].contains(&Job::It));
            }
        }
        if let Some(first_it) = jobs.iter().position(|j| *j == Job::It) {
            if profile.skill_match < 0.4 {
                prop_assert!(jobs[first_it + 1..].contains(&Job::Admin));
            }
        }
        // Adjustments only ever trade ADMIN and IT
        for (id, _) in advice.recommendations() {
            let rule = advice.provenance().rule_for(id);
            if matches!(rule, Some("admin_salary_adjust" | "it_skill_check")) {
                let job = advice.store().get(id).and_then(|f| f.as_recommendation()).map(|r| r.job);
                prop_assert!(matches!(job, Some(Job::Admin | Job::It)));
            }
        }
    }

    #[test]
    fn every_branch_yields_a_recommendation(profile in arb_profile()) {
        let advice = run(&profile);

        match advice.branch() {
            Some(_) => prop_assert!(advice.recommendation().is_some()),
            None => {
                prop_assert!(advice.recommendation().is_none());
                prop_assert!(advice.trace().is_empty());
            }
        }
    }

    #[test]
    fn fallbacks_only_fill_a_gap(profile in arb_profile()) {
        let advice = run(&profile);
        let recs: Vec<_> = advice.recommendations().map(|(id, _)| id).collect();

        for rule in ["indoor_fallback_it", "outdoor_sales"] {
            let declared = advice.provenance().facts_by_rule(rule);
            prop_assert!(declared.len() <= 1);
            if let Some(id) = declared.first() {
                prop_assert_eq!(recs.first(), Some(id));
            }
        }
    }

    #[test]
    fn trace_lines_match_declarations(profile in arb_profile()) {
        let advice = run(&profile);
        // Every action that declares something notes exactly one line
        prop_assert_eq!(advice.trace().len(), advice.provenance().len());
    }
}
