//! Investment parameter structures and scenario loading

mod data;
pub mod loader;

pub use data::{CompoundingFrequency, ContributionTiming, InvestmentParameters};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedScenario};
