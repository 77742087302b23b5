use std::collections::HashSet;
use url::Url;

/// Frontier bookkeeping for one crawl: URLs waiting to be fetched and URLs
/// already fetched.
#[derive(Clone, Default)]
pub struct CrawlContext {
    pending: HashSet<Url>,
    visited: HashSet<Url>,
}

impl CrawlContext {
    pub fn new() -> Self {
        Self {
            pending: HashSet::new(),
            visited: HashSet::new(),
        }
    }

    pub fn enqueue(&mut self, url: &Url) {
        let stripped = strip_url(url);
        if !self.visited.contains(&stripped) {
            self.pending.insert(stripped);
        }
    }

    pub fn enqueue_all(&mut self, urls: &[Url]) {
        for url in urls {
            self.enqueue(url);
        }
    }

    pub fn next_url(&mut self) -> Option<Url> {
        self.pending
            .iter()
            .next()
            .cloned()
            .and_then(|url| self.pending.take(&url))
    }

    pub fn mark_crawled(&mut self, url: &Url) {
        let stripped = strip_url(url);
        self.pending.remove(&stripped);
        self.visited.insert(stripped);
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// URLs are deduplicated without their fragment and query components.
fn strip_url(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_fragment(None);
    stripped.set_query(None);
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn visited_urls_are_not_requeued() {
        let mut context = CrawlContext::new();
        context.enqueue(&url("https://example.test/a"));
        let next = context.next_url().unwrap();
        context.mark_crawled(&next);
        context.enqueue(&url("https://example.test/a"));
        assert!(context.is_exhausted());
        assert_eq!(context.visited_count(), 1);
    }

    #[test]
    fn fragment_and_query_variants_collapse() {
        let mut context = CrawlContext::new();
        context.enqueue(&url("https://example.test/page#top"));
        context.enqueue(&url("https://example.test/page?ref=nav"));
        context.enqueue(&url("https://example.test/page"));
        assert_eq!(context.pending_count(), 1);
    }

    #[test]
    fn next_url_drains_the_frontier() {
        let mut context = CrawlContext::new();
        context.enqueue_all(&[url("https://example.test/a"), url("https://example.test/b")]);
        let mut seen = Vec::new();
        while let Some(next) = context.next_url() {
            context.mark_crawled(&next);
            seen.push(next);
        }
        assert_eq!(seen.len(), 2);
        assert!(context.is_exhausted());
    }
}
