pub mod content_disposition;
pub mod fetch_report;
