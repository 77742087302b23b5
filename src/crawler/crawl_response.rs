use url::Url;

/// Everything the page crawler learned from fetching one URL. `links` is
/// empty unless the response was a successful HTML document.
#[derive(Debug, Clone)]
pub struct CrawlResponse {
    pub url: Url,
    pub status_code: u16,
    pub content_type: String,
    pub title: String,
    pub links: Vec<Url>,
}
