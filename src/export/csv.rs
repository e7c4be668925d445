//! Tabular schedule export
//!
//! Writes the monthly or yearly schedule as CSV with a mandatory header row.
//! Numeric fields are fixed at 2 decimal places with `.` as the decimal
//! separator, independent of the display currency.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::Result;
use crate::projection::ProjectionResult;

/// Which schedule resolution to export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    Monthly,
    Yearly,
}

/// Fixed 2-decimal field formatting shared by the schedule exports
pub(crate) fn money_field(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Write the schedule CSV to any writer
pub fn write_schedule<W: io::Write>(
    result: &ProjectionResult,
    kind: ScheduleKind,
    writer: W,
) -> Result<()> {
    let mut w = Writer::from_writer(writer);

    match kind {
        ScheduleKind::Monthly => {
            w.write_record(["Month", "Start Balance", "Contributions", "Interest", "End Balance"])?;
            for record in &result.monthly {
                let start = money_field(record.start_balance);
                let contribution = money_field(record.contribution);
                let interest = money_field(record.interest);
                let end = money_field(record.end_balance);
                w.write_record([
                    record.label.as_str(),
                    start.as_str(),
                    contribution.as_str(),
                    interest.as_str(),
                    end.as_str(),
                ])?;
            }
        }
        ScheduleKind::Yearly => {
            w.write_record(["Year", "Start Balance", "Contributions", "Interest", "End Balance"])?;
            for record in &result.yearly {
                let year = record.year.to_string();
                let start = money_field(record.start_balance);
                let contribution = money_field(record.contributions);
                let interest = money_field(record.interest);
                let end = money_field(record.end_balance);
                w.write_record([
                    year.as_str(),
                    start.as_str(),
                    contribution.as_str(),
                    interest.as_str(),
                    end.as_str(),
                ])?;
            }
        }
    }

    w.flush()?;
    Ok(())
}

/// Write the schedule CSV to a file. Failures are recoverable; the
/// in-memory result is never touched.
pub fn export_schedule<P: AsRef<Path>>(
    result: &ProjectionResult,
    kind: ScheduleKind,
    path: P,
) -> Result<()> {
    let file = File::create(path)?;
    write_schedule(result, kind, file)
}
