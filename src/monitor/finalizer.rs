use crate::monitor::crawl_result::CrawlResult;
use crate::monitor::shared_output::SharedOutput;
use std::io;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum FinalizeError {
    /// The worker exited without writing any usable output. Distinct from a
    /// crawl that ran and legitimately found nothing.
    #[error("crawler produced no output")]
    NoOutput,

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub enum CrawlOutcome {
    /// The crawl ran but recorded no successful fetch: zero records, or
    /// every record's status is 0.
    NoInternalUrls,
    Completed(CrawlResult),
}

/// One final full parse of the shared output after the worker has
/// terminated. The file is removed whatever the classification, including
/// the error paths.
pub struct ResultFinalizer {
    output: SharedOutput,
}

impl ResultFinalizer {
    pub fn new(output: SharedOutput) -> Self {
        Self { output }
    }

    pub fn finalize(self) -> Result<CrawlOutcome, FinalizeError> {
        let outcome = self.classify();
        if let Err(e) = self.output.delete() {
            warn!(
                path = %self.output.path().display(),
                error = %e,
                "failed to remove shared output"
            );
        }
        outcome
    }

    fn classify(&self) -> Result<CrawlOutcome, FinalizeError> {
        match std::fs::metadata(self.output.path()) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(FinalizeError::NoOutput),
            Err(e) => return Err(e.into()),
            Ok(metadata) if metadata.len() == 0 => return Err(FinalizeError::NoOutput),
            Ok(_) => {}
        }

        let records = self.output.read_records()?;
        if records.is_empty() || records.iter().all(|record| record.status == 0) {
            return Ok(CrawlOutcome::NoInternalUrls);
        }
        Ok(CrawlOutcome::Completed(CrawlResult::new(records)))
    }
}
