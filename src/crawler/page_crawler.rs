use crate::crawler::crawl_error::CrawlError;
use crate::crawler::crawl_response::CrawlResponse;
use std::collections::HashSet;
use url::Url;

/// Fetches a single page. Any response the server sends back becomes an
/// `Ok(CrawlResponse)`; only transport-level failures are errors.
pub struct PageCrawler {
    client: reqwest::Client,
}

impl PageCrawler {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn crawl(&self, url: &Url) -> Result<CrawlResponse, CrawlError> {
        let response = self.client.get(url.clone()).send().await?;
        let status_code = response.status().as_u16();

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        let is_html = content_type
            .parse::<mime::Mime>()
            .map(|m| m.type_() == mime::TEXT && m.subtype() == mime::HTML)
            .unwrap_or(false);

        // Non-HTML and non-success responses still get a record; there is
        // just nothing to extract links from.
        if !response.status().is_success() || !is_html {
            return Ok(CrawlResponse {
                url: url.clone(),
                status_code,
                content_type,
                title: String::new(),
                links: Vec::new(),
            });
        }

        let html_text = response.text().await?;
        let (title, links) = parse_html_page(&html_text, url);

        Ok(CrawlResponse {
            url: url.clone(),
            status_code,
            content_type,
            title: title.unwrap_or_else(|| "No title".to_string()),
            links,
        })
    }
}

/// Pulls the document title and all followable `<a href>` targets out of an
/// HTML document, resolved against the page URL.
pub(crate) fn parse_html_page(html: &str, base: &Url) -> (Option<String>, Vec<Url>) {
    let document = scraper::Html::parse_document(html);

    let title = {
        let title_selector = scraper::Selector::parse("title").unwrap();
        document
            .select(&title_selector)
            .next()
            .map(|element| element.inner_html())
    };

    let mut discovered: HashSet<Url> = HashSet::new();
    let link_selector = scraper::Selector::parse("a[href]").unwrap();
    for element in document.select(&link_selector) {
        if let Some(link) = element.value().attr("href") {
            if link.starts_with('#') {
                continue; // Ignore fragment links
            }
            if link.starts_with("mailto:") || link.starts_with("javascript:") || link.starts_with("tel:") {
                continue;
            }
            if let Ok(mut resolved) = base.join(link) {
                resolved.set_fragment(None);
                discovered.insert(resolved);
            }
        }
    }

    (title, discovered.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
        <html>
          <head><title>Example</title></head>
          <body>
            <a href="/about">About</a>
            <a href="contact.html">Contact</a>
            <a href="https://other.test/elsewhere">Elsewhere</a>
            <a href="#section">Jump</a>
            <a href="mailto:hi@example.test">Mail</a>
            <a href="javascript:void(0)">Nope</a>
            <a href="tel:+1234567890">Call</a>
            <a href="/about#team">Team</a>
          </body>
        </html>
    "##;

    #[test]
    fn extracts_title_and_resolves_links() {
        let base = Url::parse("https://example.test/dir/index.html").unwrap();
        let (title, links) = parse_html_page(PAGE, &base);
        assert_eq!(title.as_deref(), Some("Example"));

        let links: std::collections::HashSet<String> =
            links.into_iter().map(|u| u.to_string()).collect();
        assert!(links.contains("https://example.test/about"));
        assert!(links.contains("https://example.test/dir/contact.html"));
        assert!(links.contains("https://other.test/elsewhere"));
        // Fragment variants collapse; non-followable schemes are dropped.
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn missing_title_is_none() {
        let base = Url::parse("https://example.test/").unwrap();
        let (title, links) = parse_html_page("<html><body>bare</body></html>", &base);
        assert!(title.is_none());
        assert!(links.is_empty());
    }
}
