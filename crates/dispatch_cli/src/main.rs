use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use dispatch_core::interpreter::Interpreter;
use dispatch_core::scenario::{generate_script, ScenarioParams};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "dispatch",
    about = "Ride-dispatch engine driven by command scripts",
    long_about = "Reads whitespace-delimited dispatch commands (ADD_DRIVER, ADD_RIDER,\n\
                  MATCH, START_RIDE, STOP_RIDE, BILL) from a file or stdin and prints\n\
                  one wire line per observable result."
)]
struct Cli {
    /// Log filter (tracing env-filter syntax)
    #[arg(long, env = "DISPATCH_LOG", default_value = "warn", global = true)]
    log: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a command script against a fresh engine
    Run {
        /// Script file; reads stdin when omitted or "-"
        script: Option<PathBuf>,
        /// Emit one JSON object per command instead of wire lines
        #[arg(long)]
        json: bool,
        /// Print registry counts after the run
        #[arg(long)]
        summary: bool,
    },
    /// Generate a reproducible synthetic workload script
    Workload {
        /// Number of drivers to register
        #[arg(long, default_value_t = 100)]
        drivers: usize,
        /// Number of riders to register
        #[arg(long, default_value_t = 500)]
        riders: usize,
        /// Number of start/stop/bill ride sequences
        #[arg(long, default_value_t = 200)]
        rides: usize,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

// ── commands ───────────────────────────────────────────────────────

fn run_command(script: Option<PathBuf>, json: bool, summary: bool) -> anyhow::Result<()> {
    let text = read_script(script.as_deref())?;

    let mut interpreter = Interpreter::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut handled = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        handled += 1;
        let result = interpreter.handle(line);
        if json {
            let value = match &result {
                Ok(outcome) => json!({ "command": line, "outcome": outcome }),
                Err(error) => json!({
                    "command": line,
                    "error": error.to_string(),
                    "wire": error.wire_line(),
                }),
            };
            writeln!(out, "{value}")?;
        } else {
            let wire = match &result {
                Ok(outcome) => outcome.wire_line(),
                Err(error) => Some(error.wire_line()),
            };
            if let Some(wire) = wire {
                writeln!(out, "{wire}")?;
            }
        }
    }
    info!(commands = handled, "script executed");

    if summary {
        let counts = interpreter.engine().counts();
        writeln!(out, "---")?;
        writeln!(out, "commands handled: {handled}")?;
        writeln!(
            out,
            "drivers: {} available / {} on ride",
            counts.drivers_available, counts.drivers_on_ride
        )?;
        writeln!(out, "riders: {}", counts.riders)?;
        writeln!(
            out,
            "rides: {} in progress / {} completed",
            counts.rides_in_progress, counts.rides_completed
        )?;
    }
    Ok(())
}

fn read_script(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read script from stdin")?;
            Ok(text)
        }
    }
}

fn workload_command(
    drivers: usize,
    riders: usize,
    rides: usize,
    seed: u64,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let params = ScenarioParams {
        num_drivers: drivers,
        num_riders: riders,
        num_rides: rides,
        ..Default::default()
    }
    .with_seed(seed);
    let script = generate_script(&params);
    info!(lines = script.len(), seed, "workload generated");

    let text = script.join("\n") + "\n";
    match output {
        Some(path) => fs::write(&path, text)
            .with_context(|| format!("failed to write workload to {}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

// ── main ───────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&cli.log)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            script,
            json,
            summary,
        } => run_command(script, json, summary),
        Commands::Workload {
            drivers,
            riders,
            rides,
            seed,
            output,
        } => workload_command(drivers, riders, rides, seed, output),
    }
}
