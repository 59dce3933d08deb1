//! Job advisor CLI entry point.

use jobadvisor_runtime::{execute, parse_args, report};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            eprintln!("Run with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    if config.show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if config.show_version {
        println!("jobadvisor {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if config.fields.is_empty() && !config.sample {
        eprintln!("\x1b[33mNo profile given; pass field=value pairs or --sample.\x1b[0m");
    }

    match execute(&config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprint!("\x1b[31mError: {}\x1b[0m", report::format_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!(
        "\x1b[1mjobadvisor\x1b[0m - Rule-based job category advisor

\x1b[1mUSAGE:\x1b[0m
    jobadvisor [OPTIONS] [FIELD=VALUE...]

\x1b[1mARGUMENTS:\x1b[0m
    [FIELD=VALUE...]    Profile fields; later pairs override earlier ones

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    --sample                 Start from the built-in sample profile
    --explain                Show how the final recommendation was derived

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace                  Stream engine events to stderr
    --max-activations N      Abort after N rule firings (default 500)

\x1b[1mPROFILE FIELDS:\x1b[0m
    prefers_indoor, prefers_outdoor, prefers_hybrid, stable_schedule,
    remote_ok, high_physical, willing_shifts, has_driving_license    true|false
    education                                                        text
    skill_match, salary_expectation                                  number
    years_experience                                                 integer

\x1b[1mEXAMPLES:\x1b[0m
    jobadvisor --sample
    jobadvisor --sample salary_expectation=5000 --explain
    jobadvisor prefers_hybrid=true skill_match=0.8 years_experience=3 remote_ok=true
    jobadvisor --trace prefers_outdoor=true willing_shifts=true"
    );
}
