//! Resistance - equivalent resistance of series/parallel resistor networks
//!
//! # Usage
//!
//! ```bash
//! resistance check fixtures/circuits.txt --tolerance 1e-4
//! resistance eval ParallelCircuit 2 Resistor 2 Resistor 2
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use resistance_core::{
    error::Result,
    fixture,
    runner::{run_cases, RunnerConfig},
    DEFAULT_TOLERANCE,
};
use tracing::info;

/// Series/parallel resistor network evaluator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every case in a fixture file and compare with its expected value
    Check {
        /// Path to the fixture file
        #[arg(value_name = "FIXTURE_FILE")]
        fixture_file: PathBuf,

        /// Maximum absolute difference in ohms
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE, value_parser = parse_tolerance)]
        tolerance: f64,
    },

    /// Evaluate one circuit specification, e.g. `SerialCircuit 2 Resistor 2 Resistor 3`
    Eval {
        /// Circuit specification tokens
        #[arg(value_name = "SPEC", required = true, num_args = 1.., allow_hyphen_values = true)]
        spec: Vec<String>,
    },
}

/// Accept finite, non-negative tolerances only.
fn parse_tolerance(s: &str) -> std::result::Result<f64, String> {
    let tolerance: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(format!("tolerance must be a finite, non-negative number, got {s}"));
    }
    Ok(tolerance)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether the command succeeded.
fn run(command: Command) -> Result<bool> {
    match command {
        Command::Check {
            fixture_file,
            tolerance,
        } => {
            let cases = fixture::parse_file(&fixture_file)?;
            info!(path = %fixture_file.display(), cases = cases.len(), "loaded fixtures");

            let config = RunnerConfig::new().with_tolerance(tolerance);
            let report = run_cases(&cases, &config);

            for outcome in &report.outcomes {
                let status = if outcome.passed { "ok" } else { "FAILED" };
                println!(
                    "{:<6} {} (line {}): expected {}, got {}",
                    status, outcome.name, outcome.line, outcome.expected, outcome.actual
                );
            }
            println!("{} passed, {} failed", report.passed(), report.failed());

            Ok(report.all_passed())
        }
        Command::Eval { spec } => {
            let circuit = fixture::parse_circuit(&spec.join(" "))?;
            println!("{}", circuit.resistance());
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
