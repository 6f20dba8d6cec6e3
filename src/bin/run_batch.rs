//! Run payoff estimates for every request in a CSV file
//!
//! Usage: cargo run --bin run_batch -- <requests.csv> [output.csv]

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::info;
use rayon::prelude::*;
use serde::Serialize;

use card_payoff::loader::load_requests_csv;
use card_payoff::ScenarioRunner;

/// One summary row per request
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    label: &'a str,
    mode: &'a str,
    balance: f64,
    apr: f64,
    first_payment: f64,
    months_to_payoff: Option<u32>,
    total_interest: f64,
    total_paid: f64,
    negative_amortization_risk: bool,
    reached_max_months: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        bail!("usage: run_batch <requests.csv> [output.csv]");
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("payoff_batch_output.csv"));

    let start = Instant::now();
    let requests = load_requests_csv(&input).with_context(|| format!("Failed to load {}", input.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let scenarios: Vec<_> = requests.iter().map(|r| r.request.base_scenario()).collect();

    let sim_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Simulations complete in {:?}", sim_start.elapsed());

    let rows: Vec<SummaryRow> = requests
        .par_iter()
        .zip(scenarios.par_iter())
        .zip(results.par_iter())
        .map(|((labelled, scenario), result)| SummaryRow {
            label: &labelled.label,
            mode: if scenario.plan.is_minimum() { "minimum" } else { "fixed" },
            balance: labelled.request.balance,
            apr: labelled.request.apr,
            first_payment: scenario.plan.first_payment(scenario.balance),
            months_to_payoff: result.months_to_payoff,
            total_interest: result.total_interest,
            total_paid: result.total_paid,
            negative_amortization_risk: result.negative_amortization_risk,
            reached_max_months: result.reached_max_months,
        })
        .collect();

    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("Unable to create {}", output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let unpaid = rows.iter().filter(|r| r.reached_max_months).count();
    info!(
        "cache: {} entries, hit rate {:.1}%",
        runner.cache().len(),
        runner.cache().hit_rate() * 100.0
    );
    println!("Output written to {}", output.display());
    println!("  {} of {} scenarios not paid off within the horizon", unpaid, rows.len());
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
