use crate::crawler::CrawlRecord;
use crate::monitor::shared_output::SharedOutput;
use tracing::{debug, warn};

const WARN_EVERY: u32 = 10;

/// Best-effort read policy for monitor ticks: a failed read answers `None`
/// and is retried on the next tick. Failures are logged, warning at most
/// once per `WARN_EVERY` consecutive misses.
pub struct BestEffortReader {
    consecutive_failures: u32,
}

impl BestEffortReader {
    pub fn new() -> Self {
        Self {
            consecutive_failures: 0,
        }
    }

    pub fn read(&mut self, output: &SharedOutput) -> Option<Vec<CrawlRecord>> {
        match output.read_records() {
            Ok(records) => {
                self.consecutive_failures = 0;
                Some(records)
            }
            Err(e) => {
                if self.consecutive_failures % WARN_EVERY == 0 {
                    warn!(
                        path = %output.path().display(),
                        error = %e,
                        "best-effort read of shared output failed"
                    );
                } else {
                    debug!(
                        path = %output.path().display(),
                        error = %e,
                        "best-effort read of shared output failed"
                    );
                }
                self.consecutive_failures += 1;
                None
            }
        }
    }
}

impl Default for BestEffortReader {
    fn default() -> Self {
        Self::new()
    }
}
