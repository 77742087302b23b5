use crate::crawler::CrawlRecord;

/// The finalized record set for one crawl invocation.
#[derive(Debug, Clone)]
pub struct CrawlResult {
    records: Vec<CrawlRecord>,
}

impl CrawlResult {
    pub fn new(records: Vec<CrawlRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CrawlRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
