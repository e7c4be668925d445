//! Run projections for every scenario in a parameter CSV
//!
//! Outputs a one-row-per-scenario summary CSV for side-by-side comparison.
//! Each projection is independent and side-effect-free, so the batch runs
//! in parallel.

use std::fs::File;
use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use investment_system::params::load_scenarios;
use investment_system::{ProjectionEngine, ProjectionResult};

fn money(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scenario_path = std::env::args().nth(1).unwrap_or_else(|| "scenarios.csv".to_string());
    let output_path = std::env::args().nth(2).unwrap_or_else(|| "batch_summary.csv".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", scenario_path);

    let scenarios = load_scenarios(&scenario_path)
        .with_context(|| format!("failed to load scenarios from {}", scenario_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    // Run projections in parallel
    let results: Vec<(String, ProjectionResult)> = scenarios
        .par_iter()
        .map(|scenario| {
            let engine = ProjectionEngine::new();
            engine
                .project(&scenario.params)
                .map(|result| (scenario.name.clone(), result))
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;

    writeln!(
        file,
        "Scenario,Years,AnnualRatePct,Compounding,EndBalance,TotalContributions,TotalInterest"
    )?;

    for (name, result) in &results {
        let summary = result.summary();
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            name,
            result.params.years,
            result.params.annual_rate_pct,
            result.params.compounding.as_str(),
            money(summary.end_balance),
            money(summary.total_contributions),
            money(summary.total_interest),
        )?;
    }

    println!("Output written to {}", output_path);

    println!("\nBatch Summary:");
    for (name, result) in &results {
        let summary = result.summary();
        println!(
            "  {:<20} {} months, end balance {}, interest {}",
            name,
            summary.total_months,
            money(summary.end_balance),
            money(summary.total_interest),
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
