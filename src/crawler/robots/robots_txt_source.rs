use crate::crawler::robots::robots_txt_view::RobotsTxtView;
use robots_txt::Robots;
use tracing::debug;
use url::Url;

/// The raw robots.txt of one host, fetched once per crawl. An absent or
/// unreadable robots.txt allows every path.
#[derive(Clone)]
pub struct RobotsTxtSource {
    content: String,
    agent: String,
}

impl RobotsTxtSource {
    pub async fn load_from_url(
        client: &reqwest::Client,
        url: &Url,
        agent: &str,
    ) -> anyhow::Result<Self> {
        let mut robots_txt_url = url.clone();
        robots_txt_url.set_path("/robots.txt");
        robots_txt_url.set_query(None);

        let response = client.get(robots_txt_url.clone()).send().await?;
        if !response.status().is_success() {
            debug!(
                url = %robots_txt_url,
                status = response.status().as_u16(),
                "no usable robots.txt, allowing all paths"
            );
            return Ok(Self::from_content(String::new(), agent));
        }

        let content = response.text().await?;
        Ok(Self::from_content(content, agent))
    }

    pub fn from_content(content: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            agent: agent.into(),
        }
    }

    pub fn view(&self) -> RobotsTxtView<'_> {
        let content = self.content.as_str();
        let robot = Robots::from_str_lossy(content);
        RobotsTxtView::new(robot, self.agent.clone())
    }
}
