//! Load named parameter scenarios from a CSV file

use std::path::Path;

use csv::Reader;
use rust_decimal::Decimal;

use super::{CompoundingFrequency, ContributionTiming, InvestmentParameters};
use crate::error::{Error, Result};

/// A parameter set tagged with the scenario name from the input file
#[derive(Debug, Clone)]
pub struct NamedScenario {
    pub name: String,
    pub params: InvestmentParameters,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "StartingAmount")]
    starting_amount: Decimal,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: Decimal,
    #[serde(rename = "Compounding")]
    compounding: String,
    #[serde(rename = "AnnualContribution")]
    annual_contribution: Decimal,
    #[serde(rename = "ContributionsPerYear")]
    contributions_per_year: u32,
    #[serde(rename = "Timing")]
    timing: String,
}

impl CsvRow {
    fn to_scenario(self) -> Result<NamedScenario> {
        // Unknown frequency labels fall back to Monthly rather than failing
        let compounding = CompoundingFrequency::from_label(&self.compounding);

        let timing = match self.timing.trim() {
            "Beginning" | "Beginning of Period" => ContributionTiming::Beginning,
            "End" | "End of Period" => ContributionTiming::End,
            other => {
                return Err(Error::InvalidParameter(format!(
                    "Unknown contribution timing: {}",
                    other
                )))
            }
        };

        let params = InvestmentParameters {
            starting_amount: self.starting_amount,
            years: self.years,
            annual_rate_pct: self.annual_rate_pct,
            compounding,
            annual_contribution: self.annual_contribution,
            contributions_per_year: self.contributions_per_year,
            timing,
        };
        params.validate()?;

        Ok(NamedScenario {
            name: self.scenario,
            params,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let mut reader = Reader::from_path(path)?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}
