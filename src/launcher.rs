use crate::crawler::CrawlerConfig;
use crate::monitor::SharedOutput;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::{Child, Command};
use tracing::info;
use url::Url;

const ACCEPTED_SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("invalid URL `{0}`: please include 'http://' or 'https://'")]
    InvalidSeed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A spawned crawl: the worker process plus the shared output path it was
/// bound to.
pub struct LaunchedCrawl {
    pub output: SharedOutput,
    pub worker: Child,
}

/// Validates the seed URL and starts the crawl worker against a fresh
/// shared output path.
pub struct CrawlLauncher {
    config: CrawlerConfig,
    scratch_dir: PathBuf,
}

impl CrawlLauncher {
    pub fn new(config: CrawlerConfig, scratch_dir: PathBuf) -> Self {
        Self {
            config,
            scratch_dir,
        }
    }

    /// Accepts only seeds carrying an http(s) scheme prefix. Nothing is
    /// spawned and no shared output exists until a seed passes this.
    pub fn validate_seed(seed: &str) -> Result<Url, LaunchError> {
        if !ACCEPTED_SCHEME_PREFIXES
            .iter()
            .any(|prefix| seed.starts_with(prefix))
        {
            return Err(LaunchError::InvalidSeed(seed.to_owned()));
        }
        Url::parse(seed).map_err(|_| LaunchError::InvalidSeed(seed.to_owned()))
    }

    /// Spawns the worker process and returns without waiting on it.
    pub fn launch(&self, seed: &Url) -> Result<LaunchedCrawl, LaunchError> {
        let output = SharedOutput::create_in(&self.scratch_dir)?;
        let worker = self.spawn_worker(seed, &output)?;
        info!(
            %seed,
            output = %output.path().display(),
            "crawl worker started"
        );
        Ok(LaunchedCrawl { output, worker })
    }

    /// Synchronous variant: runs the crawl in-process and blocks until it
    /// returns, handing the same scratch file to the finalizer.
    pub async fn run_blocking(
        &self,
        seed: &Url,
        shutdown_notify: Arc<tokio::sync::Notify>,
    ) -> Result<SharedOutput, LaunchError> {
        let output = SharedOutput::create_in(&self.scratch_dir)?;
        crate::worker::run_worker(
            seed.as_str(),
            output.path(),
            self.config.clone(),
            shutdown_notify,
        )
        .await;
        Ok(output)
    }

    fn spawn_worker(&self, seed: &Url, output: &SharedOutput) -> Result<Child, LaunchError> {
        let exe = std::env::current_exe()?;
        let mut command = Command::new(exe);
        command
            .arg("--worker-output")
            .arg(output.path())
            .arg("--seed")
            .arg(seed.as_str())
            .arg("--user-agent")
            .arg(self.config.user_agent());
        if !self.config.respect_robots_txt() {
            command.arg("--no-robots");
        }
        if !self.config.same_host_only() {
            command.arg("--all-hosts");
        }
        if let Some(rate) = self.config.requests_per_second() {
            command.arg("--rate").arg(rate.to_string());
        }
        if let Some(max_pages) = self.config.max_pages() {
            command.arg("--max-pages").arg(max_pages.to_string());
        }
        command.stdin(Stdio::null());
        command.kill_on_drop(true);
        Ok(command.spawn()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_without_an_accepted_scheme_are_rejected() {
        for seed in [
            "example.test",
            "www.example.test/start",
            "ftp://example.test/",
            "httpx://example.test/",
            "",
        ] {
            let err = CrawlLauncher::validate_seed(seed).unwrap_err();
            assert!(matches!(err, LaunchError::InvalidSeed(_)), "seed: {seed}");
        }
    }

    #[test]
    fn unparseable_http_seeds_are_rejected_too() {
        let err = CrawlLauncher::validate_seed("http://").unwrap_err();
        assert!(matches!(err, LaunchError::InvalidSeed(_)));
    }

    #[test]
    fn valid_seeds_parse() {
        let url = CrawlLauncher::validate_seed("https://example.test/start").unwrap();
        assert_eq!(url.host_str(), Some("example.test"));
        CrawlLauncher::validate_seed("http://example.test").unwrap();
    }
}
