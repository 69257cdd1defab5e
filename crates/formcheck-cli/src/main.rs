//! formcheck CLI
//!
//! Command-line tool for validating serialized form payloads.
//!
//! Exit status: 0 when the form is valid, 1 when any field fails its
//! rules, 2 when the payload or rule configuration is broken.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use formcheck_core::{FormPayload, RuleSet, ValidationReport};

/// Rule-tagged form validation from the command line.
#[derive(Parser)]
#[command(name = "formcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON form payload.
    Check {
        /// Payload file (stdin if not specified).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the full report as JSON instead of the summary.
        #[arg(long)]
        json: bool,
    },

    /// List the registered rules and their failure messages.
    Rules,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging. Logs go to stderr so JSON output stays clean.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Check { input, json } => check(input.as_deref(), json),
        Commands::Rules => {
            list_rules();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(input: Option<&Path>, json: bool) -> anyhow::Result<ExitCode> {
    let raw = read_input(input)?;
    debug!("read {} bytes of payload", raw.len());

    let outcome = FormPayload::from_json(&raw)
        .and_then(|payload| RuleSet::standard().validate(&payload.fields));

    let report = match outcome {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(ExitCode::from(2));
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    if report.is_valid() {
        info!("form valid");
        Ok(ExitCode::SUCCESS)
    } else {
        info!("form invalid: {} field(s) failed", report.failed_fields().len());
        Ok(ExitCode::from(1))
    }
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Renders the per-field summary, fields sorted by name.
fn render_report(report: &ValidationReport) -> String {
    let mut names: Vec<&String> = report.fields.keys().collect();
    names.sort_unstable();

    let mut lines = Vec::new();
    for name in names {
        let outcome = &report.fields[name];
        if outcome.valid {
            lines.push(format!("  ok    {name}"));
        } else {
            for failure in &outcome.failures {
                lines.push(format!("  FAIL  {name}: {}", failure.message));
            }
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

fn list_rules() {
    let set = RuleSet::standard();
    for name in set.names() {
        if let Some(rule) = set.get(name) {
            println!("{name:<10} {}", rule.message());
        }
    }
}
