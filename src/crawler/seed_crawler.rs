use crate::crawler::crawl_context::CrawlContext;
use crate::crawler::crawl_error::CrawlError;
use crate::crawler::crawl_record::CrawlRecord;
use crate::crawler::crawler_config::CrawlerConfig;
use crate::crawler::page_crawler::PageCrawler;
use crate::crawler::record_sink::RecordSink;
use crate::crawler::robots::RobotsTxtSource;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};
use url::Url;

/// Crawls outward from a single seed URL, emitting one record per fetched
/// page into the sink as it goes.
pub struct SeedCrawler {
    shutdown_notify: Arc<tokio::sync::Notify>,
    seed: Url,
    config: CrawlerConfig,
    client: reqwest::Client,
}

impl SeedCrawler {
    pub fn new(
        shutdown_notify: Arc<tokio::sync::Notify>,
        seed: Url,
        config: CrawlerConfig,
    ) -> Result<Self, CrawlError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .build()?;
        Ok(Self {
            shutdown_notify,
            seed,
            config,
            client,
        })
    }

    pub fn seed(&self) -> &Url {
        &self.seed
    }

    pub async fn crawl<TS>(&self, sink: &mut TS) -> Result<usize, CrawlError>
    where
        TS: RecordSink,
    {
        let shutdown_requested = Arc::new(AtomicBool::new(false));
        {
            let shutdown_notify = Arc::clone(&self.shutdown_notify);
            let shutdown_requested = Arc::clone(&shutdown_requested);
            tokio::task::spawn(async move {
                shutdown_notify.notified().await;
                shutdown_requested.store(true, Ordering::Relaxed);
            });
        }

        let robots_source = if self.config.respect_robots_txt() {
            Some(
                RobotsTxtSource::load_from_url(&self.client, &self.seed, self.config.user_agent())
                    .await?,
            )
        } else {
            None
        };
        let robots_view = robots_source.as_ref().map(|source| source.view());
        let robots_matcher = robots_view.as_ref().map(|view| view.matcher());

        let crawl_delay = self.config.requests_per_second().map(|requests_per_second| {
            let crawl_delay_in_ms = (1000.0 / requests_per_second) as u64;
            tokio::time::Duration::from_millis(crawl_delay_in_ms)
        });

        let page_crawler = PageCrawler::new(self.client.clone());
        let mut crawl_context = CrawlContext::new();
        crawl_context.enqueue(&self.seed);

        let mut pages_crawled = 0usize;
        while !shutdown_requested.load(Ordering::Relaxed) && !crawl_context.is_exhausted() {
            if let Some(max_pages) = self.config.max_pages() {
                if pages_crawled >= max_pages {
                    info!(max_pages, "reached page limit, stopping crawl");
                    break;
                }
            }

            let Some(url) = crawl_context.next_url() else {
                break;
            };
            crawl_context.mark_crawled(&url);

            if let Some(matcher) = &robots_matcher {
                if !matcher.check_path(url.path()) {
                    debug!(%url, "skipping URL disallowed by robots.txt");
                    continue;
                }
            }

            debug!(%url, pending = crawl_context.pending_count(), "crawling");
            let record = match page_crawler.crawl(&url).await {
                Ok(response) => {
                    let (internal, outgoing) = self.classify_links(&response.links);
                    if self.config.same_host_only() {
                        crawl_context.enqueue_all(&internal);
                    } else {
                        crawl_context.enqueue_all(&response.links);
                    }
                    CrawlRecord::with_page_details(
                        url.as_str(),
                        response.status_code,
                        &response.title,
                        &response.content_type,
                        outgoing.len(),
                    )
                }
                Err(e) => {
                    warn!(%url, error = %e, "fetch failed");
                    CrawlRecord::new(url.as_str(), 0)
                }
            };
            sink.emit(&record)?;
            pages_crawled += 1;

            if let Some(crawl_delay) = crawl_delay {
                if !crawl_context.is_exhausted() {
                    if shutdown_requested.load(Ordering::Relaxed) {
                        break;
                    }
                    tokio::time::sleep(crawl_delay).await;
                }
            }
        }

        info!(pages_crawled, "crawl finished");
        Ok(pages_crawled)
    }

    /// Splits discovered links into internal (same host as the seed) and
    /// outgoing.
    fn classify_links(&self, links: &[Url]) -> (Vec<Url>, Vec<Url>) {
        let seed_host = self.seed.host_str();
        let mut internal = Vec::new();
        let mut outgoing = Vec::new();
        for link in links {
            if link.host_str().is_some() && link.host_str() == seed_host {
                internal.push(link.clone());
            } else {
                outgoing.push(link.clone());
            }
        }
        (internal, outgoing)
    }
}
