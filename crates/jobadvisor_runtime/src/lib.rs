//! Command-line driver for the job advisor.
//!
//! This crate provides:
//! - [`CliConfig`] and [`parse_args`] - Flags and `field=value` profile pairs
//! - [`execute`] - Builds the profile record, runs the advisor, renders the report
//! - [`report`] - Text rendering of advice, explanations, and failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod report;

pub use cli::{CliConfig, CliError, parse_args, parse_value, sample_record};

use jobadvisor_debug::{ObservabilityConfig, Tracer};
use jobadvisor_engine::{AdvisorConfig, advise_with, job_rules};
use jobadvisor_foundation::Result;
use jobadvisor_storage::Profile;

/// Runs the advisor as configured and returns the text to print.
///
/// # Errors
/// Returns a validation error for a malformed profile, or the engine's
/// error if the run does not settle.
pub fn execute(config: &CliConfig) -> Result<String> {
    let advisor = config.advisor_config();
    let observability = config.observability_config();

    let profile = Profile::from_record(&config.record())?;
    let mut tracer = Tracer::from_config(&observability);
    let advice = advise_with(&profile, &advisor, job_rules(), &mut tracer)?;

    let mut out = report::format_advice(&advice, &advisor);
    if config.explain {
        out.push('\n');
        out.push_str(&report::format_explanation(&advice, observability.why_depth));
    }
    Ok(out)
}

impl CliConfig {
    /// Engine configuration implied by the flags.
    #[must_use]
    pub fn advisor_config(&self) -> AdvisorConfig {
        let config = AdvisorConfig::default();
        match self.max_activations {
            Some(max) => config.with_max_activations(max),
            None => config,
        }
    }

    /// Tracing configuration implied by the flags.
    #[must_use]
    pub fn observability_config(&self) -> ObservabilityConfig {
        ObservabilityConfig::default()
            .with_enabled(self.trace)
            .with_trace_to_stderr(self.trace)
    }
}
