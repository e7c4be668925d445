//! Parameter structures describing a single projection request

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How often interest is nominally capitalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annually,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Display label matching the scenario-file and report vocabulary
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Weekly => "Weekly",
            CompoundingFrequency::Daily => "Daily",
        }
    }

    /// Parse a frequency label. Unrecognized labels fall back to `Monthly`
    /// (12 periods/year) rather than failing; this is the documented
    /// behavior for frequency strings arriving from outside callers.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Annually" => CompoundingFrequency::Annually,
            "Quarterly" => CompoundingFrequency::Quarterly,
            "Monthly" => CompoundingFrequency::Monthly,
            "Weekly" => CompoundingFrequency::Weekly,
            "Daily" => CompoundingFrequency::Daily,
            other => {
                log::warn!("unknown compounding frequency '{}', defaulting to Monthly", other);
                CompoundingFrequency::Monthly
            }
        }
    }
}

/// Whether a period's contribution is added before or after interest accrual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionTiming {
    /// Contribution is added first and earns a full month of interest
    Beginning,
    /// Interest accrues on the start balance only; the contribution lands after
    End,
}

impl ContributionTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionTiming::Beginning => "Beginning of Period",
            ContributionTiming::End => "End of Period",
        }
    }
}

/// Full parameter set for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Initial balance at month 0
    pub starting_amount: Decimal,

    /// Projection length in whole years
    pub years: u32,

    /// Annual return rate as a percentage (7 means 7%); may be negative
    pub annual_rate_pct: Decimal,

    /// Compounding frequency
    pub compounding: CompoundingFrequency,

    /// Total contribution per year; negative amounts are withdrawals
    pub annual_contribution: Decimal,

    /// Contribution events per year. 1, 4 and 12 place events on specific
    /// months; any other nonzero value (and 0 with a nonzero annual amount)
    /// spreads the annual amount evenly across all 12 months.
    pub contributions_per_year: u32,

    /// Contribution timing within each month
    pub timing: ContributionTiming,
}

impl InvestmentParameters {
    /// Total number of simulated months
    pub fn total_months(&self) -> u32 {
        self.years * 12
    }

    /// Check boundary ranges before any computation is attempted.
    /// The limits match the original input form.
    pub fn validate(&self) -> Result<()> {
        if self.starting_amount < Decimal::ZERO {
            return Err(Error::InvalidParameter(
                "Starting amount cannot be negative.".to_string(),
            ));
        }
        if self.years == 0 || self.years > 100 {
            return Err(Error::InvalidParameter(
                "Years must be between 1 and 100.".to_string(),
            ));
        }
        if self.annual_rate_pct < dec!(-100) || self.annual_rate_pct > dec!(1000) {
            return Err(Error::InvalidParameter(
                "Annual return rate must be between -100% and 1000%.".to_string(),
            ));
        }
        if self.contributions_per_year > 365 {
            return Err(Error::InvalidParameter(
                "Contributions per year must be between 0 and 365.".to_string(),
            ));
        }
        Ok(())
    }
}
