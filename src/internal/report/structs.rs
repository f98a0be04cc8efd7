pub mod date_range;
pub mod report_definition;

pub use date_range::{DateRange, WIRE_DATE_FORMAT};
pub use report_definition::{ReportDefinition, catalog, find_report};
