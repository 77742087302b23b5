mod report_builder;
mod status_summary;

pub use report_builder::{CrawlReport, DetailRow};
pub use status_summary::{StatusSummary, StatusSummaryRow, status_description};
