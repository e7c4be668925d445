//! Schedule output structures for projections

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::params::InvestmentParameters;

/// A single month of the projected schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Display label, e.g. "Year 1, Month 3"
    pub label: String,

    /// Balance at the start of the month
    pub start_balance: Decimal,

    /// Contribution applied this month (negative = withdrawal)
    pub contribution: Decimal,

    /// Interest accrued this month
    pub interest: Decimal,

    /// Balance at the end of the month
    pub end_balance: Decimal,
}

/// Twelve consecutive monthly records rolled up into one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyRecord {
    /// Year index (1-based)
    pub year: u32,

    /// Balance at the start of the year
    pub start_balance: Decimal,

    /// Sum of the year's monthly contributions
    pub contributions: Decimal,

    /// Sum of the year's monthly interest
    pub interest: Decimal,

    /// Balance at the end of the year
    pub end_balance: Decimal,
}

/// Complete projection result, owned by the caller that requested it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// The parameter set this result was computed from
    pub params: InvestmentParameters,

    /// Balance after the final simulated month
    pub end_balance: Decimal,

    /// Starting amount plus every monthly contribution
    pub total_contributions: Decimal,

    /// Sum of all monthly interest
    pub total_interest: Decimal,

    /// One record per simulated month
    pub monthly: Vec<MonthlyRecord>,

    /// One record per simulated year, aggregated from `monthly`
    pub yearly: Vec<YearlyRecord>,
}

impl ProjectionResult {
    /// Build a result from the generated monthly schedule.
    ///
    /// Totals and yearly rollups are summed from the stored monthly values,
    /// so a year's record always reproduces its twelve months exactly.
    pub fn from_schedule(params: InvestmentParameters, monthly: Vec<MonthlyRecord>) -> Self {
        let starting_amount = params.starting_amount;

        let mut yearly = Vec::with_capacity(monthly.len() / 12);
        let mut current_balance = starting_amount;
        let mut total_contributions = starting_amount;
        let mut total_interest = Decimal::ZERO;

        let mut year_start_balance = starting_amount;
        let mut year_contributions = Decimal::ZERO;
        let mut year_interest = Decimal::ZERO;

        for (i, record) in monthly.iter().enumerate() {
            total_contributions += record.contribution;
            total_interest += record.interest;
            current_balance = record.end_balance;

            year_contributions += record.contribution;
            year_interest += record.interest;

            if (i + 1) % 12 == 0 {
                yearly.push(YearlyRecord {
                    year: (i as u32 + 1) / 12,
                    start_balance: year_start_balance,
                    contributions: year_contributions,
                    interest: year_interest,
                    end_balance: current_balance,
                });
                year_start_balance = current_balance;
                year_contributions = Decimal::ZERO;
                year_interest = Decimal::ZERO;
            }
        }

        Self {
            params,
            end_balance: current_balance,
            total_contributions,
            total_interest,
            monthly,
            yearly,
        }
    }

    /// Contributions beyond the starting amount (negative for net withdrawals)
    pub fn additional_contributions(&self) -> Decimal {
        self.total_contributions - self.params.starting_amount
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_return_pct = if self.total_contributions.is_zero() {
            Decimal::ZERO
        } else {
            (self.total_interest / self.total_contributions * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
        };

        ProjectionSummary {
            total_months: self.monthly.len() as u32,
            end_balance: self.end_balance,
            total_contributions: self.total_contributions,
            additional_contributions: self.additional_contributions(),
            total_interest: self.total_interest,
            total_return_pct,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub end_balance: Decimal,
    pub total_contributions: Decimal,
    pub additional_contributions: Decimal,
    pub total_interest: Decimal,
    /// Interest earned over total contributions, as a percentage
    pub total_return_pct: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CompoundingFrequency, ContributionTiming};
    use rust_decimal_macros::dec;

    fn record(label: &str, start: Decimal, contribution: Decimal, interest: Decimal) -> MonthlyRecord {
        MonthlyRecord {
            label: label.to_string(),
            start_balance: start,
            contribution,
            interest,
            end_balance: start + contribution + interest,
        }
    }

    fn params() -> InvestmentParameters {
        InvestmentParameters {
            starting_amount: dec!(1200),
            years: 1,
            annual_rate_pct: dec!(0),
            compounding: CompoundingFrequency::Monthly,
            annual_contribution: dec!(120),
            contributions_per_year: 12,
            timing: ContributionTiming::End,
        }
    }

    #[test]
    fn test_yearly_rollup_matches_monthly_sums() {
        let mut monthly = Vec::new();
        let mut balance = dec!(1200);
        for m in 1..=12u32 {
            let rec = record(&format!("Year 1, Month {}", m), balance, dec!(10), dec!(2.5));
            balance = rec.end_balance;
            monthly.push(rec);
        }

        let result = ProjectionResult::from_schedule(params(), monthly);

        assert_eq!(result.yearly.len(), 1);
        let year = &result.yearly[0];
        assert_eq!(year.year, 1);
        assert_eq!(year.start_balance, dec!(1200));
        assert_eq!(year.contributions, dec!(120));
        assert_eq!(year.interest, dec!(30));
        assert_eq!(year.end_balance, result.end_balance);
    }

    #[test]
    fn test_totals_include_starting_amount() {
        let monthly = (1..=12u32)
            .map(|m| record(&format!("Year 1, Month {}", m), dec!(1200), dec!(10), Decimal::ZERO))
            .collect();
        let result = ProjectionResult::from_schedule(params(), monthly);

        assert_eq!(result.total_contributions, dec!(1320));
        assert_eq!(result.additional_contributions(), dec!(120));
        assert_eq!(result.total_interest, Decimal::ZERO);
    }

    #[test]
    fn test_summary_return_pct_guards_zero_contributions() {
        let mut p = params();
        p.starting_amount = Decimal::ZERO;
        p.annual_contribution = Decimal::ZERO;
        let result = ProjectionResult::from_schedule(p, Vec::new());

        assert_eq!(result.summary().total_return_pct, Decimal::ZERO);
    }
}
