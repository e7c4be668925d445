//! Plain-text result report
//!
//! Formats a projection summary plus its yearly table the way the desktop
//! report did: banner, generation timestamp, input parameters, final
//! results, yearly summary.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::currency::Currency;
use crate::error::Result;
use crate::projection::ProjectionResult;

/// Explicit per-request display settings for rendering and export.
/// Replaces what used to be ambient UI state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportContext {
    pub currency: Currency,
}

/// Write the formatted report to any writer
pub fn write_report<W: Write>(
    result: &ProjectionResult,
    ctx: &ReportContext,
    w: &mut W,
) -> Result<()> {
    let heavy = "=".repeat(60);
    let light = "-".repeat(40);
    let currency = ctx.currency;
    let summary = result.summary();

    writeln!(w, "{}", heavy)?;
    writeln!(w, "INVESTMENT CALCULATION RESULTS")?;
    writeln!(w, "{}", heavy)?;
    writeln!(w)?;
    writeln!(w, "Generated on: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(w)?;

    writeln!(w, "INPUT PARAMETERS:")?;
    writeln!(w, "{}", light)?;
    writeln!(w, "Starting Amount:        {}", currency.format(result.params.starting_amount))?;
    writeln!(w, "Investment Period:      {} years", result.params.years)?;
    writeln!(w, "Annual Return Rate:     {:.2}%", result.params.annual_rate_pct)?;
    writeln!(w, "Compounding Frequency:  {}", result.params.compounding.as_str())?;
    writeln!(w)?;

    writeln!(w, "FINAL RESULTS:")?;
    writeln!(w, "{}", light)?;
    writeln!(w, "End Balance:           {}", currency.format(result.end_balance))?;
    writeln!(w, "Total Contributions:   {}", currency.format(result.total_contributions))?;
    writeln!(w, "Total Interest Earned: {}", currency.format(result.total_interest))?;
    writeln!(w, "Total Return:          {:.2}%", summary.total_return_pct)?;
    writeln!(w)?;

    if !result.yearly.is_empty() {
        writeln!(w, "YEARLY SUMMARY:")?;
        writeln!(w, "{}", light)?;
        writeln!(w, "{:<6} | {:<15} | {:<15}", "Year", "Balance", "Interest")?;
        writeln!(w, "{}", light)?;
        for year in &result.yearly {
            writeln!(
                w,
                "{:<6} | {:<15} | {:<15}",
                year.year,
                currency.format(year.end_balance),
                currency.format(year.interest),
            )?;
        }
        writeln!(w)?;
    }

    writeln!(w, "{}", heavy)?;
    writeln!(w, "End of Report")?;
    writeln!(w, "{}", heavy)?;

    Ok(())
}

/// Save the report to a file. A failed write is recoverable and leaves the
/// in-memory result untouched.
pub fn save_report<P: AsRef<Path>>(
    result: &ProjectionResult,
    ctx: &ReportContext,
    path: P,
) -> Result<()> {
    let mut file = File::create(path)?;
    write_report(result, ctx, &mut file)
}
