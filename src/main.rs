//! Card Payoff CLI
//!
//! Runs one payoff estimate and prints the comparison table

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;

use card_payoff::{PayoffReport, RequestMode, ScenarioRequest, ScenarioRunner};

/// Credit card payoff estimator
#[derive(Parser, Debug)]
#[command(name = "card-payoff", version, about = "Estimate credit card payoff time and interest")]
struct Cli {
    /// Load the request from a JSON file (flags below are ignored)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "fixed")]
    mode: RequestMode,

    #[arg(long, default_value_t = 1900.0)]
    balance: f64,

    /// APR as a percent, e.g. 24.99
    #[arg(long, default_value_t = 24.99)]
    apr: f64,

    /// Fixed monthly payment
    #[arg(long, default_value_t = 60.0)]
    payment: f64,

    /// Extra amount to compare against the base payment
    #[arg(long, default_value_t = 25.0)]
    extra: f64,

    /// Percent of balance due each month (minimum mode)
    #[arg(long, default_value_t = 2.0)]
    min_percent: f64,

    /// Minimum payment floor (minimum mode)
    #[arg(long, default_value_t = 25.0)]
    floor: f64,

    /// Do not add unpaid interest to the balance
    #[arg(long)]
    simple: bool,

    #[arg(long, default_value_t = 600)]
    max_months: u32,

    /// Write the base scenario's month-by-month schedule to this CSV file
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Month to count the payoff date from (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn request(&self) -> Result<ScenarioRequest> {
        if let Some(path) = &self.config {
            return ScenarioRequest::from_path(path)
                .with_context(|| format!("Failed to load request from {}", path.display()));
        }

        let request = ScenarioRequest {
            mode: self.mode,
            balance: self.balance,
            apr: self.apr,
            payment: self.payment,
            extra_payment: self.extra,
            include_compounding: !self.simple,
            min_percent: self.min_percent,
            floor_amount: self.floor,
            max_months: self.max_months,
        };
        request.validate()?;
        Ok(request)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let request = cli.request()?;
    let start = cli.start_date.unwrap_or_else(|| Local::now().date_naive());

    let runner = ScenarioRunner::new();
    let report = PayoffReport::build(&runner, &request, start);

    let mut schedule_summary = None;
    if let Some(path) = &cli.schedule {
        let projection = runner.schedule(&request.base_scenario());
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        for row in &projection.schedule {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("wrote {} schedule rows to {}", projection.schedule.len(), path.display());
        schedule_summary = Some((projection.schedule.len(), projection.peak_balance()));
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Card Payoff v{}", env!("CARGO_PKG_VERSION"));
    println!("==================\n");
    println!("  Balance:          ${:.2}", request.balance);
    println!("  APR:              {:.2}%", request.apr);
    println!("  Monthly interest: ${:.2}", report.monthly_interest);
    if request.mode == RequestMode::Minimum {
        println!("  Current minimum:  ${:.2}", report.current_minimum_payment);
    }
    println!();

    println!("{:<16} {:>10} {:>8} {:>12} {:>12} {:>6}", "Scenario", "Payment", "Months", "Interest", "Total", "Risk");
    println!("{}", "-".repeat(70));
    for scenario in &report.scenarios {
        let months = scenario
            .result
            .months_to_payoff
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!(">{}", request.max_months));
        println!(
            "{:<16} {:>10.2} {:>8} {:>12.2} {:>12.2} {:>6}",
            scenario.label,
            scenario.payment,
            months,
            scenario.result.total_interest,
            scenario.result.total_paid,
            if scenario.result.negative_amortization_risk { "yes" } else { "" },
        );
    }

    println!("\n{}", report.outlook);
    if let Some(date) = report.payoff_date {
        println!("  Paid off by: {}", date.format("%B %Y"));
    }
    if let Some((months, peak)) = schedule_summary {
        println!("  Schedule: {} months written, peak balance ${:.2}", months, peak);
    }
    if let Some(savings) = report.savings {
        match savings.months_saved {
            Some(months) => println!(
                "  Paying ${:.2} more saves ${:.2} in interest and {} months",
                request.extra_payment, savings.interest_saved, months
            ),
            None => println!(
                "  Paying ${:.2} more could lower interest by ${:.2}",
                request.extra_payment, savings.interest_saved
            ),
        }
    }
    if let Some(warning) = report.warning {
        println!("\nWarning: {}", warning);
    }

    Ok(())
}
