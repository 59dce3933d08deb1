//! The command-line driver, end to end

use jobadvisor_foundation::ErrorKind;
use jobadvisor_runtime::{execute, parse_args, report};

fn config(list: &[&str]) -> jobadvisor_runtime::CliConfig {
    let args: Vec<String> = std::iter::once("jobadvisor")
        .chain(list.iter().copied())
        .map(String::from)
        .collect();
    parse_args(&args).unwrap()
}

#[test]
fn sample_run() {
    let out = execute(&config(&["--sample"])).unwrap();

    assert!(out.starts_with("Recommendation: ADMIN\n"));
    assert!(out.contains("Salary band: low (1800)\n"));
    assert!(out.contains("  1. Branch: indoor\n  2. Rule: indoor_admin\n"));
}

#[test]
fn fields_override_sample() {
    let out = execute(&config(&["--sample", "salary_expectation=5000"])).unwrap();

    // indoor_admin declines, the fallback's IT is downgraded for low skill,
    // then upgraded again for the high salary
    assert!(out.starts_with("Recommendation: IT\n"));
    assert!(out.contains("Salary band: high (5000)\n"));
}

#[test]
fn explain_appends_why_chain() {
    let out = execute(&config(&["--sample", "--explain"])).unwrap();

    assert!(out.contains("Why:\nf-2 Recommendation(ADMIN"));
    assert!(out.contains("<- indoor_admin [f-1 f-0]"));
}

#[test]
fn validation_errors_surface() {
    let err = execute(&config(&["skill_match=high"])).unwrap_err();

    assert!(err.is_validation());
    assert!(report::format_error(&err).starts_with("invalid profile: "));
}

#[test]
fn tiny_cap_stops_the_run() {
    let err = execute(&config(&["--sample", "--max-activations", "1"])).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::LimitExceeded(_)));
    assert_eq!(err.partial_trace(), ["Branch: indoor"]);
    assert!(report::format_error(&err).contains("at rule indoor_admin"));
}
