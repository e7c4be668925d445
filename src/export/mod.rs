//! Consumers of projection output: schedule CSV, text report, chart data

pub mod chart;
pub mod csv;
pub mod report;

pub use chart::{growth_series, pie_breakdown, GrowthPoint, PieBreakdown};
pub use csv::{export_schedule, write_schedule, ScheduleKind};
pub use report::{save_report, write_report, ReportContext};
