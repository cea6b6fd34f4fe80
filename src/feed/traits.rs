//! Trait abstraction for the post source to enable mocking in tests

use super::error::FeedError;
use super::post::Post;
use async_trait::async_trait;

/// Anything that can produce the post collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the latest posts with embedded media
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError>;
}
