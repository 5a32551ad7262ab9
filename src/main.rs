//! Genomy - Entry Point
//!
//! Reads a genome from a file or stdin, seeds the environment with the
//! proteins given on the command line and prints every step.

use genomy::core::config::{set_config, SimulationConfig};
use genomy::core::error::Result;
use genomy::core::types::Environment;
use genomy::rules::{load_genome, Genome};
use genomy::simulation::{render_snapshot, run, simulate, Snapshot};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Run a genome program over a set of starting proteins
#[derive(Parser, Debug)]
#[command(name = "genomy")]
#[command(about = "Simulate genes switching proteins on and off, one step at a time")]
struct Args {
    /// Genome source file (reads stdin when omitted)
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Number of steps to run (overrides the config file)
    #[arg(long, short = 'n')]
    steps: Option<usize>,

    /// TOML configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Print the parsed genome before running
    #[arg(long)]
    show_rules: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Proteins active at step 0
    proteins: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    genes: Option<&'a Genome>,
    snapshots: &'a [Snapshot],
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("genomy=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    }
    .with_overrides(args.steps, args.show_rules)?;

    let steps = config.steps;
    let show_rules = config.show_rules;
    if set_config(config).is_err() {
        tracing::warn!("Simulation config was already set, keeping existing values");
    }

    let genome = load_genome(args.file.as_deref())?;
    tracing::info!(genes = genome.len(), steps, "genome loaded");
    if genome.is_empty() {
        tracing::warn!("Genome has no genes; every step after the first will be empty");
    }

    let initial: Environment = args.proteins.iter().map(String::as_str).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            if show_rules {
                write!(out, "{}", genome)?;
            }
            for snapshot in run(&genome, initial, steps) {
                writeln!(out, "{}", render_snapshot(snapshot.step, &snapshot.environment))?;
            }
        }
        OutputFormat::Json => {
            let snapshots = simulate(&genome, initial, steps);
            let report = Report {
                genes: show_rules.then_some(&genome),
                snapshots: &snapshots,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    out.flush()?;

    Ok(())
}
