use crate::monitor::CrawlResult;
use crate::report::status_summary::StatusSummary;
use chrono::{DateTime, Local};

pub const CSV_HEADER: &str = "URL,HTTP Status Code";

#[derive(Debug, Clone)]
pub struct DetailRow {
    pub url: String,
    pub status: u16,
}

/// The finished report for one crawl: per-URL detail rows plus the grouped
/// status summary derived from them.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    detail_rows: Vec<DetailRow>,
    summary: StatusSummary,
}

impl CrawlReport {
    pub fn build(result: &CrawlResult) -> Self {
        let detail_rows: Vec<DetailRow> = result
            .records()
            .iter()
            .map(|record| DetailRow {
                url: record.url.clone(),
                status: record.status,
            })
            .collect();
        let summary = StatusSummary::from_statuses(detail_rows.iter().map(|row| row.status));
        Self {
            detail_rows,
            summary,
        }
    }

    pub fn detail_rows(&self) -> &[DetailRow] {
        &self.detail_rows
    }

    pub fn summary(&self) -> &StatusSummary {
        &self.summary
    }

    /// CSV export of the detail rows, header line first.
    pub fn to_csv(&self) -> Vec<u8> {
        let mut csv = String::from(CSV_HEADER);
        csv.push('\n');
        for row in &self.detail_rows {
            csv.push_str(&csv_field(&row.url));
            csv.push(',');
            csv.push_str(&row.status.to_string());
            csv.push('\n');
        }
        csv.into_bytes()
    }

    /// Filename embeds the timestamp so repeated runs never collide.
    pub fn csv_filename(now: DateTime<Local>) -> String {
        format!("crawl_report_{}.csv", now.format("%Y%m%d_%H%M%S"))
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::CrawlRecord;
    use chrono::TimeZone;

    fn result() -> CrawlResult {
        CrawlResult::new(vec![
            CrawlRecord::new("https://example.test/", 200),
            CrawlRecord::new("https://example.test/about", 200),
            CrawlRecord::new("https://example.test/missing", 404),
        ])
    }

    #[test]
    fn summary_matches_the_detail_rows() {
        let report = CrawlReport::build(&result());
        assert_eq!(report.detail_rows().len(), 3);
        assert_eq!(report.summary().total(), 3);

        let rows = report.summary().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].status, rows[0].count), (200, 2));
        assert_eq!(rows[0].description, "OK (Success)");
        assert_eq!((rows[1].status, rows[1].count), (404, 1));
        assert_eq!(rows[1].description, "Not Found");
    }

    #[test]
    fn csv_has_a_header_and_one_line_per_row() {
        let report = CrawlReport::build(&result());
        let csv = String::from_utf8(report.to_csv()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "URL,HTTP Status Code");
        assert_eq!(lines[1], "https://example.test/,200");
        assert_eq!(lines[3], "https://example.test/missing,404");
    }

    #[test]
    fn csv_quotes_awkward_urls() {
        let result = CrawlResult::new(vec![CrawlRecord::new(
            "https://example.test/search?q=a,b",
            200,
        )]);
        let csv = String::from_utf8(CrawlReport::build(&result).to_csv()).unwrap();
        assert!(csv.contains("\"https://example.test/search?q=a,b\",200"));
    }

    #[test]
    fn filename_embeds_the_timestamp() {
        let now = Local.with_ymd_and_hms(2025, 6, 1, 12, 30, 5).unwrap();
        assert_eq!(
            CrawlReport::csv_filename(now),
            "crawl_report_20250601_123005.csv"
        );
    }
}
