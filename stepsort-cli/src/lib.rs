#![warn(missing_docs)]
//! StepSort CLI Library
//!
//! Command-line front end for the sorting visualizer: parses arguments,
//! layers them over `stepsort.toml` defaults, starts a sort through the run
//! controller, and drains the event stream into the chosen renderer.

mod config;

pub use config::*;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::sync::mpsc;
use stepsort_core::{Algorithm, ChannelObserver, RunSpec, SortController, SortEvent};
use stepsort_render::{BarRenderer, DisplayMode, TraceRenderer};

/// StepSort CLI arguments
#[derive(Parser, Debug)]
#[command(name = "stepsort")]
#[command(author, version, about = "StepSort - step-by-step sorting visualizer")]
pub struct Cli {
    /// Optional subcommand (List, Run); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Algorithm name, e.g. "Quick Sort"
    #[arg(short, long, global = true)]
    pub algorithm: Option<String>,

    /// Dataset size (10 to 1000)
    #[arg(short = 'n', long, global = true)]
    pub amount: Option<usize>,

    /// Pacing delay per comparison, in milliseconds (0 to 1000)
    #[arg(short, long, global = true)]
    pub delay: Option<f64>,

    /// Display mode: bars, trace
    #[arg(short, long, global = true)]
    pub mode: Option<String>,

    /// Seed for dataset generation (reproducible runs)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the supported algorithms
    List,
    /// Run a sort (default)
    Run,
}

/// Run the StepSort CLI with arguments from the environment.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the StepSort CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("stepsort=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("stepsort=info")
            .init();
    }

    // Discover stepsort.toml configuration (CLI flags override)
    let config = StepsortConfig::discover().unwrap_or_default();

    match cli.command {
        Some(Commands::List) => {
            list_algorithms();
            Ok(())
        }
        Some(Commands::Run) | None => run_sort(&cli, &config),
    }
}

fn list_algorithms() {
    println!("Supported algorithms:");
    for algorithm in Algorithm::ALL {
        println!("  {algorithm}");
    }
}

/// Layer CLI flags over stepsort.toml and start the sort.
fn run_sort(cli: &Cli, config: &StepsortConfig) -> anyhow::Result<()> {
    let algorithm_name = cli.algorithm.as_deref().unwrap_or(&config.run.algorithm);
    let algorithm: Algorithm = algorithm_name.parse()?;

    let spec = RunSpec {
        algorithm,
        amount: cli.amount.unwrap_or(config.run.amount),
        delay_ms: cli.delay.unwrap_or(config.run.delay_ms),
        seed: cli.seed,
    };

    let mode: DisplayMode = cli
        .mode
        .as_deref()
        .unwrap_or(&config.display.mode)
        .parse()
        .map_err(anyhow::Error::msg)?;

    let controller = SortController::new();
    let (observer, events) = ChannelObserver::channel();
    let started = std::time::Instant::now();

    // The renderer is set up before the worker spawns and the stream is
    // always drained to disconnection, so no exit path leaves a live
    // worker behind
    let comparisons = match mode {
        DisplayMode::Bars => {
            let mut renderer = BarRenderer::stdout().context("failed to take over terminal")?;
            let handle = controller.start_sort(spec.clone(), observer)?;
            let outcome = drain(events, |event| renderer.handle(event));
            handle.wait()?;
            outcome?;
            renderer.comparisons()
        }
        DisplayMode::Trace => {
            let mut renderer = TraceRenderer::new(io::stdout().lock());
            let handle = controller.start_sort(spec.clone(), observer)?;
            let outcome = drain(events, |event| renderer.handle(event));
            handle.wait()?;
            outcome?;
            renderer.comparisons()
        }
    };
    println!(
        "{} sorted {} elements in {} comparisons ({:.2}s)",
        spec.algorithm,
        spec.amount,
        comparisons,
        started.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Drain the event stream until the worker drops its sender.
///
/// Rendering stops at the first I/O error but consumption continues, so the
/// caller can still join the worker instead of returning around it.
fn drain(
    events: mpsc::Receiver<SortEvent>,
    mut render: impl FnMut(&SortEvent) -> io::Result<()>,
) -> io::Result<()> {
    let mut outcome = Ok(());
    for event in events {
        if outcome.is_ok() {
            outcome = render(&event);
        }
    }
    outcome
}
