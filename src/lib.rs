//! Investment System - Deterministic projection engine for compound-interest schedules
//!
//! This library provides:
//! - Month-by-month balance projections with periodic contributions or withdrawals
//! - Discrete-compounding math at monthly output resolution (annual through daily)
//! - Yearly rollups, summary statistics, and chart-ready series
//! - Schedule CSV export and plain-text report output
//! - Multi-scenario batch running from CSV parameter files

pub mod currency;
pub mod error;
pub mod export;
pub mod params;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use currency::Currency;
pub use error::{Error, Result};
pub use params::{CompoundingFrequency, ContributionTiming, InvestmentParameters};
pub use projection::{MonthlyRecord, ProjectionEngine, ProjectionResult, YearlyRecord};
pub use scenario::ScenarioRunner;
