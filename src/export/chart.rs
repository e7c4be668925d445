//! Chart-ready data derived from a projection
//!
//! The engine does not render anything; these builders shape its output for
//! the external chart consumers: a growth line chart (balance, cumulative
//! additional contributions, cumulative interest per year) and an
//! end-balance composition breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;

/// One point per year on the growth chart, plus a year-0 anchor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub balance: Decimal,
    pub cumulative_contributions: Decimal,
    pub cumulative_interest: Decimal,
}

/// Build the growth series from the yearly rollups.
///
/// Cumulative contributions track additional contributions only; the
/// starting amount is the year-0 balance.
pub fn growth_series(result: &ProjectionResult) -> Vec<GrowthPoint> {
    let mut points = Vec::with_capacity(result.yearly.len() + 1);
    points.push(GrowthPoint {
        year: 0,
        balance: result.params.starting_amount,
        cumulative_contributions: Decimal::ZERO,
        cumulative_interest: Decimal::ZERO,
    });

    let mut cumulative_contributions = Decimal::ZERO;
    let mut cumulative_interest = Decimal::ZERO;
    for year in &result.yearly {
        cumulative_contributions += year.contributions;
        cumulative_interest += year.interest;
        points.push(GrowthPoint {
            year: year.year,
            balance: year.end_balance,
            cumulative_contributions,
            cumulative_interest,
        });
    }

    points
}

/// End-balance composition: starting amount, additional contributions,
/// interest earned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieBreakdown {
    pub starting_amount: Decimal,
    pub additional_contributions: Decimal,
    pub interest_earned: Decimal,
}

/// Build the end-balance breakdown, or `None` when net additional
/// contributions are negative: the composition is not drawn for
/// withdrawals.
pub fn pie_breakdown(result: &ProjectionResult) -> Option<PieBreakdown> {
    let additional_contributions = result.additional_contributions();
    if additional_contributions < Decimal::ZERO {
        return None;
    }

    Some(PieBreakdown {
        starting_amount: result.params.starting_amount,
        additional_contributions,
        interest_earned: result.total_interest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CompoundingFrequency, ContributionTiming, InvestmentParameters};
    use crate::projection::ProjectionEngine;
    use rust_decimal_macros::dec;

    fn project(annual_contribution: Decimal) -> ProjectionResult {
        let params = InvestmentParameters {
            starting_amount: dec!(10000),
            years: 2,
            annual_rate_pct: dec!(5),
            compounding: CompoundingFrequency::Monthly,
            annual_contribution,
            contributions_per_year: 12,
            timing: ContributionTiming::End,
        };
        ProjectionEngine::new().project(&params).unwrap()
    }

    #[test]
    fn test_growth_series_anchors_at_year_zero() {
        let result = project(dec!(1200));
        let series = growth_series(&result);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].year, 0);
        assert_eq!(series[0].balance, dec!(10000));
        assert!(series[0].cumulative_contributions.is_zero());
        assert!(series[0].cumulative_interest.is_zero());

        assert_eq!(series[1].cumulative_contributions, dec!(1200));
        assert_eq!(series[2].cumulative_contributions, dec!(2400));
        assert_eq!(series[2].balance, result.end_balance);
        assert_eq!(
            series[2].cumulative_interest,
            result.total_interest
        );
    }

    #[test]
    fn test_pie_breakdown_for_contributions() {
        let result = project(dec!(1200));
        let pie = pie_breakdown(&result).unwrap();

        assert_eq!(pie.starting_amount, dec!(10000));
        assert_eq!(pie.additional_contributions, dec!(2400));
        assert_eq!(pie.interest_earned, result.total_interest);
    }

    #[test]
    fn test_pie_breakdown_omitted_for_withdrawals() {
        let result = project(dec!(-1200));
        assert!(pie_breakdown(&result).is_none());
    }
}
