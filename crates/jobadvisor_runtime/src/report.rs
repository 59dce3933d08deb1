//! Text rendering for the command line.

use std::fmt::Write;

use jobadvisor_debug::{format_why, why};
use jobadvisor_engine::{Advice, AdvisorConfig};
use jobadvisor_foundation::{Error, ErrorKind};
use jobadvisor_storage::Fact;

/// Renders the recommendation, salary band, and numbered trace.
#[must_use]
pub fn format_advice(advice: &Advice, config: &AdvisorConfig) -> String {
    let mut out = String::new();

    match advice.recommendation() {
        Some(rec) => {
            let _ = writeln!(out, "Recommendation: {}", rec.job);
            let _ = writeln!(out, "Reason: {}", rec.reason);
        }
        None => {
            let _ = writeln!(out, "Recommendation: none");
        }
    }

    if let Some(Fact::Profile(profile)) = advice.store().get(advice.profile()) {
        let salary = profile.salary_expectation;
        let _ = writeln!(out, "Salary band: {} ({salary})", config.salary_band(salary));
    }

    format_trace(&mut out, advice.trace());
    out
}

/// Renders the derivation of the final recommendation.
#[must_use]
pub fn format_explanation(advice: &Advice, depth: usize) -> String {
    match advice.final_fact() {
        Some(fact) => format!("Why:\n{}", format_why(&why(advice, fact, depth))),
        None => "Why: no recommendation was made\n".to_string(),
    }
}

/// Renders an error, with whatever trace the run had accumulated.
#[must_use]
pub fn format_error(error: &Error) -> String {
    let mut out = match &error.kind {
        kind if error.is_validation() => format!("invalid profile: {kind}\n"),
        ErrorKind::LimitExceeded(limit) => format!("engine stopped: {limit}\n"),
        kind => format!("{kind}\n"),
    };
    if let Some(source) = error.context.as_ref().and_then(|c| c.source.as_deref()) {
        let _ = writeln!(out, "at rule {source}");
    }
    if !error.partial_trace().is_empty() {
        format_trace(&mut out, error.partial_trace());
    }
    out
}

fn format_trace(out: &mut String, trace: &[String]) {
    if trace.is_empty() {
        let _ = writeln!(out, "Trace: (empty)");
        return;
    }
    let _ = writeln!(out, "Trace:");
    for (i, line) in trace.iter().enumerate() {
        let _ = writeln!(out, "  {}. {line}", i + 1);
    }
}
