//! Core projection engine for monthly compound-interest schedules

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::schedule::{MonthlyRecord, ProjectionResult};
use super::state::ProjectionState;
use crate::error::{Error, Result};
use crate::params::{ContributionTiming, InvestmentParameters};

/// Scale used for intermediate arithmetic. High enough that rounding drift
/// never reaches the 2-decimal display values.
const INTERMEDIATE_SCALE: u32 = 20;

/// Scale at which monthly records are stored. Totals and yearly rollups are
/// summed from these stored values.
const RECORD_SCALE: u32 = 10;

fn round_intermediate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(INTERMEDIATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

fn round_record(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RECORD_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Main projection engine.
///
/// A pure function of its inputs: no shared state between calls, safe to
/// invoke from any number of callers at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run a projection for the given parameter set.
    ///
    /// Fails with [`Error::InvalidParameter`] if the parameters are outside
    /// their boundary ranges; otherwise the projection always completes and
    /// no row is ever dropped. Degenerate inputs (zero rate, zero
    /// contribution) simply produce zero columns.
    pub fn project(&self, params: &InvestmentParameters) -> Result<ProjectionResult> {
        params.validate()?;

        let monthly = self.generate_monthly_schedule(params)?;
        Ok(ProjectionResult::from_schedule(params.clone(), monthly))
    }

    /// Simulate month by month using the discrete compounding math:
    /// `monthly_multiplier = (1 + periodic_rate)^(periods_per_year / 12)`.
    ///
    /// The fractional exponent preserves sub-monthly compounding (weekly,
    /// daily) at monthly output resolution. Exponentiation runs through f64
    /// `powf` and is converted back to decimal; the ~1e-15 relative error
    /// this carries is invisible at currency display scale.
    fn generate_monthly_schedule(
        &self,
        params: &InvestmentParameters,
    ) -> Result<Vec<MonthlyRecord>> {
        let periods_per_year = params.compounding.periods_per_year();
        let total_months = params.total_months();

        // Contribution per event (e.g. the monthly amount when 12 events/year)
        let contribution_per_event = if params.contributions_per_year > 0 {
            round_intermediate(
                params.annual_contribution / Decimal::from(params.contributions_per_year),
            )
        } else {
            Decimal::ZERO
        };

        // Annual percent to decimal (7% -> 0.07), then nominal periodic rate
        let annual_rate = round_intermediate(params.annual_rate_pct / Decimal::ONE_HUNDRED);
        let periodic_rate = round_intermediate(annual_rate / Decimal::from(periods_per_year));
        let period_multiplier = Decimal::ONE + periodic_rate;

        // Periods per month may be fractional (weekly: 52/12 = 4.3333...)
        let periods_per_month = f64::from(periods_per_year) / 12.0;
        let base = period_multiplier.to_f64().unwrap_or(1.0);
        let monthly_multiplier = Decimal::from_f64(base.powf(periods_per_month))
            .ok_or_else(|| {
                Error::InvalidParameter(
                    "Rate and frequency produce a non-finite growth multiplier.".to_string(),
                )
            })?;
        let monthly_interest_factor = monthly_multiplier - Decimal::ONE;

        let mut state = ProjectionState::from_params(params);
        let mut monthly = Vec::with_capacity(total_months as usize);

        for _ in 0..total_months {
            state.advance_month();

            let start_balance = state.balance;
            let contribution = self.contribution_for_month(params, &state, contribution_per_event);

            // Beginning-of-period contributions land before interest accrues
            if params.timing == ContributionTiming::Beginning && !contribution.is_zero() {
                state.balance += contribution;
            }

            // Beginning-of-period contributions earn a full month of interest;
            // end-of-period contributions earn none this month
            let interest_base = match params.timing {
                ContributionTiming::Beginning => start_balance + contribution,
                ContributionTiming::End => start_balance,
            };
            let interest = round_intermediate(interest_base * monthly_interest_factor);
            state.balance += interest;

            if params.timing == ContributionTiming::End && !contribution.is_zero() {
                state.balance += contribution;
            }

            monthly.push(MonthlyRecord {
                label: state.label(),
                start_balance: round_record(start_balance),
                contribution: round_record(contribution),
                interest: round_record(interest),
                end_balance: round_record(state.balance),
            });
        }

        Ok(monthly)
    }

    /// Contribution amount for the current month.
    ///
    /// 1 event/year lands in January, 4 land quarterly (months 1, 4, 7, 10),
    /// 12 land every month. Any other nonzero event count has no exact
    /// monthly placement and falls back to an even 1/12 split of the annual
    /// amount; 0 events with a nonzero annual amount takes the same path.
    fn contribution_for_month(
        &self,
        params: &InvestmentParameters,
        state: &ProjectionState,
        contribution_per_event: Decimal,
    ) -> Decimal {
        if params.contributions_per_year == 0 && params.annual_contribution.is_zero() {
            return Decimal::ZERO;
        }

        match params.contributions_per_year {
            1 => {
                if state.month_in_year == 1 {
                    contribution_per_event
                } else {
                    Decimal::ZERO
                }
            }
            4 => {
                if matches!(state.month_in_year, 1 | 4 | 7 | 10) {
                    contribution_per_event
                } else {
                    Decimal::ZERO
                }
            }
            12 => contribution_per_event,
            _ => round_intermediate(params.annual_contribution / Decimal::from(12u32)),
        }
    }
}
