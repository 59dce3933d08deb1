//! Command-line parsing.

use jobadvisor_foundation::{Record, Value};
use thiserror::Error;

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// `field=value` pairs, in argument order.
    pub fields: Vec<(String, Value)>,
    /// Start from the built-in sample profile.
    pub sample: bool,
    /// Stream engine events to stderr.
    pub trace: bool,
    /// Print the derivation of the final recommendation.
    pub explain: bool,
    /// Override the kill-switch threshold.
    pub max_activations: Option<usize>,
    /// Print help and exit.
    pub show_help: bool,
    /// Print version and exit.
    pub show_version: bool,
}

impl CliConfig {
    /// The profile record: the sample (if requested) overlaid with the
    /// explicit fields, later pairs winning.
    #[must_use]
    pub fn record(&self) -> Record {
        let base = if self.sample {
            sample_record()
        } else {
            Record::new()
        };
        self.fields
            .iter()
            .fold(base, |record, (field, value)| record.with(field, value.clone()))
    }
}

/// Errors from argument parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// A flag that takes a value was last.
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    /// A numeric flag value did not parse.
    #[error("invalid {flag} value: {value}")]
    InvalidNumber {
        /// The flag.
        flag: &'static str,
        /// What was given.
        value: String,
    },

    /// An option nobody recognizes.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A positional argument that is not `field=value`.
    #[error("expected field=value, got: {0}")]
    MalformedField(String),
}

/// Parses `args`, where `args[0]` is the program name.
///
/// # Errors
/// Returns an error for unknown options, missing or malformed flag values,
/// and positional arguments without `=`.
pub fn parse_args(args: &[String]) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--sample" => config.sample = true,
            "--trace" => config.trace = true,
            "--explain" => config.explain = true,
            "--max-activations" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or(CliError::MissingValue("--max-activations"))?;
                config.max_activations =
                    Some(value.parse().map_err(|_| CliError::InvalidNumber {
                        flag: "--max-activations",
                        value: value.clone(),
                    })?);
            }
            arg if arg.starts_with('-') => {
                return Err(CliError::UnknownOption(arg.to_string()));
            }
            pair => {
                let (field, value) = pair
                    .split_once('=')
                    .filter(|(field, _)| !field.is_empty())
                    .ok_or_else(|| CliError::MalformedField(pair.to_string()))?;
                config.fields.push((field.to_string(), parse_value(value)));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Reads a command-line value: `true`/`false`, `nil`, an integer, a decimal
/// number, or else a string.
///
/// Only text containing a digit is read as a float, so words such as `inf`
/// stay strings.
#[must_use]
pub fn parse_value(text: &str) -> Value {
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "nil" => return Value::Nil,
        _ => {}
    }
    if let Ok(n) = text.parse::<i64>() {
        return Value::Int(n);
    }
    if text.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(n) = text.parse::<f64>() {
            return Value::Float(n);
        }
    }
    Value::from(text)
}

/// The built-in sample profile: indoor, stable schedule, modest salary.
#[must_use]
pub fn sample_record() -> Record {
    Record::new()
        .with("prefers_indoor", true)
        .with("prefers_outdoor", false)
        .with("prefers_hybrid", false)
        .with("stable_schedule", true)
        .with("remote_ok", false)
        .with("education", "Bachelors")
        .with("skill_match", 0.3)
        .with("years_experience", 1_i64)
        .with("salary_expectation", 1800.0)
}
