//! Running state for a projection in progress

use rust_decimal::Decimal;

use crate::params::InvestmentParameters;

/// Balance and calendar position during the month-by-month simulation.
/// The balance here carries full intermediate precision; rounding happens
/// only when a record is emitted.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current simulation month (1-indexed; 0 before the first advance)
    pub month: u32,

    /// Display year (1-indexed)
    pub year: u32,

    /// Month within the display year (1-12)
    pub month_in_year: u32,

    /// Running balance at full intermediate precision
    pub balance: Decimal,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn from_params(params: &InvestmentParameters) -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            balance: params.starting_amount,
        }
    }

    /// Advance to the next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.year = (self.month - 1) / 12 + 1;
        self.month_in_year = (self.month - 1) % 12 + 1;
    }

    /// Display label for the current month
    pub fn label(&self) -> String {
        format!("Year {}, Month {}", self.year, self.month_in_year)
    }
}
