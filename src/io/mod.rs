//! Instance loading and result reporting.

mod loader;
mod report;

pub use loader::{load_instance, parse_instance};
pub use report::{AssignmentReport, SweepReport, sweep_to_json};
