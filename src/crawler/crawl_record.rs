use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One crawled page. `status` is the HTTP status code the crawler observed,
/// or 0 when the fetch itself failed. Fields beyond `url` and `status` pass
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlRecord {
    pub url: String,
    pub status: u16,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CrawlRecord {
    pub fn new(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            status,
            extra: Map::new(),
        }
    }

    pub fn with_page_details(
        url: impl Into<String>,
        status: u16,
        title: &str,
        content_type: &str,
        num_outgoing_links: usize,
    ) -> Self {
        let mut extra = Map::new();
        extra.insert("title".to_owned(), Value::from(title));
        extra.insert("content_type".to_owned(), Value::from(content_type));
        extra.insert(
            "num_outgoing_links".to_owned(),
            Value::from(num_outgoing_links as u64),
        );
        Self {
            url: url.into(),
            status,
            extra,
        }
    }
}
