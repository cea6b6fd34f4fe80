//! Errors raised at the content API boundary

/// Failure to obtain the post collection
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}
