use crate::crawler::crawl_record::CrawlRecord;

/// Receives one record per crawled page, in discovery order, as the crawl
/// runs.
pub trait RecordSink {
    fn emit(&mut self, record: &CrawlRecord) -> std::io::Result<()>;
}
