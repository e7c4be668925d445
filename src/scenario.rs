//! Scenario runner for batch projections
//!
//! Wraps the engine for callers that project many parameter sets: named
//! scenarios from a CSV file, or sweeps of a single base scenario.

use rust_decimal::Decimal;

use crate::error::Result;
use crate::params::InvestmentParameters;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Batch projection runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// for rate in [dec!(3), dec!(5), dec!(7)] {
///     let result = runner.run(&params_with_rate(rate))?;
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::new(),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &InvestmentParameters) -> Result<ProjectionResult> {
        self.engine.project(params)
    }

    /// Run projections for multiple parameter sets in order
    pub fn run_batch(&self, batch: &[InvestmentParameters]) -> Result<Vec<ProjectionResult>> {
        batch.iter().map(|params| self.engine.project(params)).collect()
    }

    /// Sweep the annual rate across a base parameter set
    pub fn run_rate_sweep(
        &self,
        base: &InvestmentParameters,
        rates_pct: &[Decimal],
    ) -> Result<Vec<ProjectionResult>> {
        rates_pct
            .iter()
            .map(|&rate| {
                let mut params = base.clone();
                params.annual_rate_pct = rate;
                self.engine.project(&params)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CompoundingFrequency, ContributionTiming};
    use rust_decimal_macros::dec;

    fn base_params() -> InvestmentParameters {
        InvestmentParameters {
            starting_amount: dec!(10000),
            years: 10,
            annual_rate_pct: dec!(5),
            compounding: CompoundingFrequency::Monthly,
            annual_contribution: dec!(1200),
            contributions_per_year: 12,
            timing: ContributionTiming::End,
        }
    }

    #[test]
    fn test_rate_sweep_orders_outcomes() {
        let runner = ScenarioRunner::new();
        let results = runner
            .run_rate_sweep(&base_params(), &[dec!(3), dec!(4), dec!(5)])
            .unwrap();

        assert_eq!(results.len(), 3);
        // Higher rate should result in a higher final balance
        assert!(results[2].end_balance > results[0].end_balance);
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let mut short = base_params();
        short.years = 1;
        let long = base_params();

        let results = runner.run_batch(&[short, long]).unwrap();
        assert_eq!(results[0].monthly.len(), 12);
        assert_eq!(results[1].monthly.len(), 120);
    }
}
