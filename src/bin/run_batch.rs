//! Run every scenario in a CSV file
//!
//! Usage: cargo run --bin run_batch -- scenarios.csv --output batch_results.csv
//!
//! Scenarios run in parallel; a scenario that fails validation gets a row with
//! its error message instead of aborting the batch.

use anyhow::Context;
use clap::Parser;
use housing_budget::export::{self, ResultRow};
use housing_budget::params::load_scenarios;
use housing_budget::{ComparisonReport, ScenarioRunner};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about = "Run a batch of house vs apartment scenarios")]
struct Cli {
    /// Input scenarios CSV file
    input: PathBuf,

    /// Output results CSV file
    #[arg(long, default_value = "batch_results.csv")]
    output: PathBuf,

    /// Print the text report for every scenario
    #[arg(long)]
    report: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&cli.input)
        .with_context(|| format!("loading scenarios from {}", cli.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let run_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Scenarios complete in {:?}", run_start.elapsed());

    let mut rows = Vec::with_capacity(results.len());
    let mut failures = 0;

    for (scenario, result) in scenarios.iter().zip(&results) {
        match result {
            Ok(result) => {
                if cli.report {
                    println!("\n{}", ComparisonReport::from_result(result));
                }
                rows.push(ResultRow::from_result(result));
            }
            Err(e) => {
                log::warn!("Scenario '{}' failed: {}", scenario.name, e);
                failures += 1;
                rows.push(ResultRow::failed(&scenario.name, e));
            }
        }
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    export::write_results(file, &rows)?;

    println!(
        "Written {} results ({} failed) to {}",
        rows.len(),
        failures,
        cli.output.display()
    );

    Ok(())
}
