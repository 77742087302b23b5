pub const DEFAULT_USER_AGENT: &str = "status-spider";

/// Crawl policy knobs. Robots compliance and the same-hostname restriction
/// are explicit options here, never an implicit library default.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    user_agent: String,
    respect_robots_txt: bool,
    same_host_only: bool,
    requests_per_second: Option<f64>,
    max_pages: Option<usize>,
}

impl CrawlerConfig {
    pub fn new(
        user_agent: String,
        respect_robots_txt: bool,
        same_host_only: bool,
        requests_per_second: Option<f64>,
        max_pages: Option<usize>,
    ) -> Self {
        Self {
            user_agent,
            respect_robots_txt,
            same_host_only,
            requests_per_second,
            max_pages,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn respect_robots_txt(&self) -> bool {
        self.respect_robots_txt
    }

    pub fn same_host_only(&self) -> bool {
        self.same_host_only
    }

    pub fn requests_per_second(&self) -> Option<f64> {
        self.requests_per_second
    }

    pub fn max_pages(&self) -> Option<usize> {
        self.max_pages
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT.to_owned(), true, true, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robots_and_hostname_restriction_default_on() {
        let config = CrawlerConfig::default();
        assert!(config.respect_robots_txt());
        assert!(config.same_host_only());
        assert_eq!(config.max_pages(), None);
        assert_eq!(config.requests_per_second(), None);
    }

    #[test]
    fn both_restrictions_can_be_switched_off_explicitly() {
        let config = CrawlerConfig::new("test-agent".to_owned(), false, false, Some(2.0), Some(10));
        assert!(!config.respect_robots_txt());
        assert!(!config.same_host_only());
        assert_eq!(config.user_agent(), "test-agent");
        assert_eq!(config.max_pages(), Some(10));
    }
}
