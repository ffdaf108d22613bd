//! Console front end for the workshop registry.
//!
//! Runs the menu session on stdin, or replays a prepared script with
//! `--script`. Capacities come from flags, then `WORKSHOP_MAX_VEHICLES` /
//! `WORKSHOP_MAX_REPAIRS`, then the built-in defaults. Logs go to stderr and
//! follow `RUST_LOG` (default `warn`) so stdout stays the session transcript.
//!
//! ```bash
//! workshop
//! workshop --script session.txt --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};
use workshop::{MAX_REPAIRS, MAX_VEHICLES, Registry, WorkshopConfig, run_session};

#[derive(Parser, Debug)]
#[command(name = "workshop")]
#[command(about = "Track the vehicles and repairs of a repair shop", long_about = None)]
struct Args {
    /// Replay menu answers from a file instead of reading stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Vehicles the workshop can hold at once
    #[arg(long, env = "WORKSHOP_MAX_VEHICLES", default_value_t = MAX_VEHICLES)]
    max_vehicles: usize,

    /// Repairs recorded per vehicle
    #[arg(long, env = "WORKSHOP_MAX_REPAIRS", default_value_t = MAX_REPAIRS)]
    max_repairs: usize,

    /// Print the final registry as JSON once the session ends
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = WorkshopConfig {
        max_vehicles: args.max_vehicles,
        max_repairs: args.max_repairs,
    };
    let registry = config.build_registry()?;

    let registry = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            run_session(registry, BufReader::new(file), io::stdout().lock())?
        }
        None => run_session(registry, io::stdin().lock(), io::stdout().lock())?,
    };

    if args.json {
        print_snapshot(&registry)?;
    }
    Ok(())
}

fn print_snapshot(registry: &Registry) -> Result<()> {
    let json = serde_json::to_string_pretty(&registry.snapshot())
        .context("serializing registry snapshot")?;
    println!("{json}");
    Ok(())
}
