mod crawl_context;
mod crawl_error;
mod crawl_record;
mod crawl_response;
mod crawler_config;
mod page_crawler;
mod record_sink;
mod robots;
mod seed_crawler;

pub use crawl_error::CrawlError;
pub use crawl_record::CrawlRecord;
pub use crawl_response::CrawlResponse;
pub use crawler_config::{CrawlerConfig, DEFAULT_USER_AGENT};
pub use page_crawler::PageCrawler;
pub use record_sink::RecordSink;
pub use robots::{RobotsTxtMatcher, RobotsTxtSource, RobotsTxtView};
pub use seed_crawler::SeedCrawler;
