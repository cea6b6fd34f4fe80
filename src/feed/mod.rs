//! Post feed: WordPress REST client and the loading state machine

mod client;
mod error;
mod loader;
mod post;
mod traits;

pub use client::{WpClient, DEFAULT_API_BASE};
pub use error::FeedError;
pub use loader::{FeedLoader, FeedState};
pub use post::{Post, PLACEHOLDER_IMAGE};
pub use traits::PostSource;

#[cfg(test)]
pub use traits::MockPostSource;
