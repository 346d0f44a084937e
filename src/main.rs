//! # tour-opt CLI
//!
//! Reads a distance matrix from a file, optimizes the tour with 2-opt, and
//! reports the result plus the average wall-clock cost over repeated runs.
//! Every run restarts from the identity tour, so repeated runs are timing
//! measurements of the same deterministic search, not independent attempts.

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use log::debug;
use serde::Serialize;

use tour_opt::io::load_matrix;
use tour_opt::optimizer::{optimize, OptimizationResult, OptimizerConfig};

/// First-improvement 2-opt tour optimizer
#[derive(Parser)]
#[command(name = "tour-opt")]
#[command(about = "Optimize a TSP tour with first-improvement 2-opt local search")]
#[command(long_about = "Reads a distance matrix file (node count n on the first \
line, then n rows of n numbers), runs 2-opt from the identity tour, and prints \
the optimized tour, total improvement, iteration count, and the average time \
over the benchmark runs.")]
#[command(version)]
struct Cli {
    /// Path to the distance matrix file
    input: String,

    /// Number of timed benchmark runs to average over
    #[arg(long, default_value_t = 10)]
    runs: u32,

    /// Iteration cap for each run
    #[arg(long, default_value_t = tour_opt::optimizer::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Strict-improvement threshold for accepting an exchange
    #[arg(long, default_value_t = tour_opt::optimizer::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Benchmark report for one matrix.
#[derive(Debug, Serialize)]
struct Report {
    tour: Vec<usize>,
    total_improvement: f64,
    iterations: usize,
    runs: u32,
    average_seconds: f64,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    anyhow::ensure!(cli.runs > 0, "--runs must be at least 1");

    let distances = load_matrix(&cli.input)
        .with_context(|| format!("failed to read distance matrix from {}", cli.input))?;
    debug!(
        "matrix size {}, symmetric: {}",
        distances.size(),
        distances.is_symmetric(1e-10)
    );

    let config = OptimizerConfig {
        max_iterations: cli.max_iterations,
        epsilon: cli.epsilon,
    };

    let mut first_result: Option<OptimizationResult> = None;
    let mut total_time = Duration::ZERO;

    for run in 0..cli.runs {
        let start = Instant::now();
        let result = optimize(&distances, &config)?;
        total_time += start.elapsed();

        if run == 0 {
            first_result = Some(result);
        }
    }

    let result = first_result.context("no runs executed")?;
    let average_seconds = total_time.as_secs_f64() / f64::from(cli.runs);

    let report = Report {
        tour: result.tour.into_order(),
        total_improvement: -result.total_improvement,
        iterations: result.iterations,
        runs: cli.runs,
        average_seconds,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&report);
    }

    Ok(())
}

fn print_text_report(report: &Report) {
    let tour: Vec<String> = report.tour.iter().map(ToString::to_string).collect();
    println!("Optimized tour: {}", tour.join(" "));
    println!("Total improvement: {:.6}", report.total_improvement);
    println!("Iterations: {}", report.iterations);
    println!("Average time spent: {:.6} seconds", report.average_seconds);
}
