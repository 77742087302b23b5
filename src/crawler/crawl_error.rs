#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    #[error(transparent)]
    AnyError(#[from] anyhow::Error),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
