//! Investment System CLI
//!
//! Computes a single compound-interest projection from command-line
//! parameters, prints the summary and yearly schedule, and optionally
//! exports the schedule CSV and the text report.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rust_decimal::Decimal;

use investment_system::export::{
    export_schedule, save_report, ReportContext, ScheduleKind,
};
use investment_system::{
    CompoundingFrequency, ContributionTiming, Currency, InvestmentParameters, ProjectionEngine,
};

#[derive(Debug, Parser)]
#[command(
    name = "investment_system",
    version,
    about = "Deterministic compound-interest investment projections"
)]
struct Cli {
    /// Initial balance at month 0
    #[arg(long, default_value = "0")]
    starting_amount: Decimal,

    /// Projection length in whole years (1-100)
    #[arg(long)]
    years: u32,

    /// Annual return rate in percent (may be negative)
    #[arg(long, default_value = "0")]
    rate: Decimal,

    /// Compounding frequency: Annually, Quarterly, Monthly, Weekly or Daily.
    /// Unknown labels fall back to Monthly.
    #[arg(long, default_value = "Monthly")]
    compounding: String,

    /// Total contribution per year; negative values are withdrawals
    #[arg(long, default_value = "0")]
    contribution: Decimal,

    /// Contribution events per year (0-365; 1, 4 and 12 have exact month
    /// placement, anything else spreads evenly across the year)
    #[arg(long, default_value_t = 0)]
    contributions_per_year: u32,

    /// Contribution timing: beginning or end of period
    #[arg(long, default_value = "end")]
    timing: String,

    /// Display currency code: USD, EUR, GBP, JPY, CAD or AUD
    #[arg(long, default_value = "USD")]
    currency: String,

    /// Print the full result as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Write the schedule CSV to this path
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Schedule resolution for --csv-out: monthly or yearly
    #[arg(long, default_value = "monthly")]
    schedule: String,

    /// Write the text report to this path
    #[arg(long)]
    report_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let timing = match cli.timing.to_ascii_lowercase().as_str() {
        "beginning" | "beginning-of-period" => ContributionTiming::Beginning,
        "end" | "end-of-period" => ContributionTiming::End,
        other => bail!("unknown contribution timing '{}', expected beginning or end", other),
    };

    let Some(currency) = Currency::from_code(&cli.currency) else {
        bail!(
            "unknown currency '{}', expected one of USD, EUR, GBP, JPY, CAD, AUD",
            cli.currency
        );
    };

    let schedule_kind = match cli.schedule.to_ascii_lowercase().as_str() {
        "monthly" => ScheduleKind::Monthly,
        "yearly" => ScheduleKind::Yearly,
        other => bail!("unknown schedule resolution '{}', expected monthly or yearly", other),
    };

    let params = InvestmentParameters {
        starting_amount: cli.starting_amount,
        years: cli.years,
        annual_rate_pct: cli.rate,
        compounding: CompoundingFrequency::from_label(&cli.compounding),
        annual_contribution: cli.contribution,
        contributions_per_year: cli.contributions_per_year,
        timing,
    };

    let engine = ProjectionEngine::new();
    let result = engine.project(&params)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, currency);
    }

    if let Some(path) = &cli.csv_out {
        export_schedule(&result, schedule_kind, path)
            .with_context(|| format!("failed to write schedule to {}", path.display()))?;
        println!("\nSchedule written to: {}", path.display());
    }

    if let Some(path) = &cli.report_out {
        let ctx = ReportContext { currency };
        save_report(&result, &ctx, path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &investment_system::ProjectionResult, currency: Currency) {
    let params = &result.params;
    let summary = result.summary();

    println!("Investment System v0.1.0");
    println!("========================\n");

    println!("Parameters:");
    println!("  Starting Amount:        {}", currency.format(params.starting_amount));
    println!("  Investment Period:      {} years", params.years);
    println!("  Annual Return Rate:     {:.2}%", params.annual_rate_pct);
    println!("  Compounding Frequency:  {}", params.compounding.as_str());
    println!("  Annual Contribution:    {}", currency.format(params.annual_contribution));
    println!("  Contribution Events:    {}/year", params.contributions_per_year);
    println!("  Contribution Timing:    {}", params.timing.as_str());
    println!();

    println!("Yearly Schedule ({} months projected):", summary.total_months);
    println!(
        "{:>5} {:>16} {:>16} {:>16} {:>16}",
        "Year", "Start Balance", "Contributions", "Interest", "End Balance"
    );
    println!("{}", "-".repeat(75));
    for year in &result.yearly {
        println!(
            "{:>5} {:>16} {:>16} {:>16} {:>16}",
            year.year,
            currency.format(year.start_balance),
            currency.format(year.contributions),
            currency.format(year.interest),
            currency.format(year.end_balance),
        );
    }

    println!("\nSummary:");
    println!("  End Balance:           {}", currency.format(summary.end_balance));
    println!("  Total Contributions:   {}", currency.format(summary.total_contributions));
    println!("  Total Interest Earned: {}", currency.format(summary.total_interest));
    println!("  Total Return:          {:.2}%", summary.total_return_pct);
}
