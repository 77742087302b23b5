use crate::crawler::{CrawlerConfig, SeedCrawler};
use crate::launcher::CrawlLauncher;
use crate::monitor::{SharedOutput, SharedOutputSink};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Crawl worker body: crawls from the seed, appending one record per page to
/// the shared output. Failures are logged here and never surface to the
/// launching process, which reads success or failure off the output file
/// alone.
pub async fn run_worker(
    seed: &str,
    output_path: &Path,
    config: CrawlerConfig,
    shutdown_notify: Arc<tokio::sync::Notify>,
) {
    let seed_url = match CrawlLauncher::validate_seed(seed) {
        Ok(seed_url) => seed_url,
        Err(e) => {
            error!(error = %e, "crawl worker rejected its seed");
            return;
        }
    };

    let output = SharedOutput::attach(output_path);
    let mut sink = match SharedOutputSink::open(&output) {
        Ok(sink) => sink,
        Err(e) => {
            error!(
                path = %output.path().display(),
                error = %e,
                "crawl worker could not open its shared output"
            );
            return;
        }
    };

    let crawler = match SeedCrawler::new(shutdown_notify, seed_url, config) {
        Ok(crawler) => crawler,
        Err(e) => {
            error!(error = %e, "crawl worker could not be constructed");
            return;
        }
    };

    info!(
        seed = %crawler.seed(),
        output = %output.path().display(),
        "crawl worker starting"
    );
    match crawler.crawl(&mut sink).await {
        Ok(pages_crawled) => info!(pages_crawled, "crawl worker finished"),
        Err(e) => error!(error = %e, "crawl worker failed"),
    }
}
