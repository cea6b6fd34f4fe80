//! Post feed loading state machine
//!
//! The loader starts in `Loading`, spawns a single fetch, and settles into
//! `Success` or `Error`. It never goes back to `Loading` and never retries.
//! The fetch is bound to a cancellation token owned by the loader, so
//! dropping the loader aborts the request and any late result is discarded.

use super::error::FeedError;
use super::post::Post;
use super::traits::PostSource;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;

type FetchResult = Result<Vec<Post>, FeedError>;

/// Observable state of the feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Success(Vec<Post>),
    Error(String),
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// Posts when loaded, empty otherwise
    pub fn posts(&self) -> &[Post] {
        match self {
            FeedState::Success(posts) => posts,
            _ => &[],
        }
    }
}

/// Owns one in-flight fetch and the state derived from it
pub struct FeedLoader {
    state: FeedState,
    receiver: Option<oneshot::Receiver<FetchResult>>,
    cancel: CancellationToken,
}

impl FeedLoader {
    /// Start fetching from `source`. Must be called inside a tokio runtime.
    pub fn spawn(source: Arc<dyn PostSource>) -> Self {
        let (tx, rx) = oneshot::channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("Feed fetch cancelled");
                }
                result = source.fetch_posts() => {
                    // receiver gone means nobody is interested any more
                    let _ = tx.send(result);
                }
            }
        });

        Self {
            state: FeedState::Loading,
            receiver: Some(rx),
            cancel,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Abort the fetch. The state stays `Loading`.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.receiver = None;
    }

    /// Pick up a finished fetch without blocking.
    /// Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = self.receiver.as_mut() else {
            return false;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                self.apply(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.receiver = None;
                self.state = FeedState::Error("feed task ended without a result".to_string());
                true
            }
        }
    }

    /// Wait for the fetch to finish and return the settled state
    pub async fn settle(&mut self) -> &FeedState {
        if let Some(receiver) = self.receiver.take() {
            match receiver.await {
                Ok(result) => self.apply(result),
                Err(_) => {
                    self.state =
                        FeedState::Error("feed task ended without a result".to_string());
                }
            }
        }
        &self.state
    }

    fn apply(&mut self, result: FetchResult) {
        self.state = match result {
            Ok(posts) => FeedState::Success(posts),
            Err(e) => {
                tracing::warn!("Error fetching posts: {e}");
                FeedState::Error(e.to_string())
            }
        };
    }
}

impl Drop for FeedLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::client::WpClient;
    use crate::feed::traits::MockPostSource;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_post(id: u64) -> Post {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": { "rendered": format!("Post {id}") },
            "excerpt": { "rendered": "<p>excerpt</p>" },
            "link": format!("https://example.com/?p={id}"),
        }))
        .unwrap()
    }

    /// Source that never finishes unless cancelled, recording completion
    struct HangingSource {
        finished: Arc<AtomicBool>,
    }

    #[async_trait]
    impl PostSource for HangingSource {
        async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            self.finished.store(true, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let loader = FeedLoader::spawn(Arc::new(HangingSource {
            finished: Arc::new(AtomicBool::new(false)),
        }));
        assert!(loader.state().is_loading());
        assert!(loader.state().posts().is_empty());
    }

    #[tokio::test]
    async fn test_success_transition() {
        let mut source = MockPostSource::new();
        source
            .expect_fetch_posts()
            .times(1)
            .returning(|| Ok(vec![sample_post(1), sample_post(2)]));

        let mut loader = FeedLoader::spawn(Arc::new(source));
        let state = loader.settle().await.clone();

        assert_eq!(state, FeedState::Success(vec![sample_post(1), sample_post(2)]));
        // settled loaders do not change again
        assert!(!loader.poll());
    }

    #[tokio::test]
    async fn test_error_transition_keeps_message() {
        let mut source = MockPostSource::new();
        source
            .expect_fetch_posts()
            .returning(|| Err(FeedError::Status(503)));

        let mut loader = FeedLoader::spawn(Arc::new(source));
        assert_eq!(
            loader.settle().await,
            &FeedState::Error("HTTP error! Status: 503".to_string())
        );
    }

    #[test]
    fn test_settles_on_current_thread_runtime() {
        let mut source = MockPostSource::new();
        source.expect_fetch_posts().returning(|| Ok(Vec::new()));

        tokio_test::block_on(async {
            let mut loader = FeedLoader::spawn(Arc::new(source));
            assert_eq!(loader.settle().await, &FeedState::Success(Vec::new()));
        });
    }

    #[tokio::test]
    async fn test_poll_eventually_observes_result() {
        let mut source = MockPostSource::new();
        source.expect_fetch_posts().returning(|| Ok(Vec::new()));

        let mut loader = FeedLoader::spawn(Arc::new(source));
        let mut changed = false;
        for _ in 0..100 {
            if loader.poll() {
                changed = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert!(changed);
        assert_eq!(loader.state(), &FeedState::Success(Vec::new()));
    }

    #[tokio::test]
    async fn test_cancel_discards_result() {
        let mut source = MockPostSource::new();
        source
            .expect_fetch_posts()
            .returning(|| Ok(vec![sample_post(1)]));

        let mut loader = FeedLoader::spawn(Arc::new(source));
        loader.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(loader.is_cancelled());
        assert!(!loader.poll());
        assert!(loader.state().is_loading());
    }

    #[tokio::test]
    async fn test_drop_aborts_pending_fetch() {
        let finished = Arc::new(AtomicBool::new(false));
        let source = Arc::new(HangingSource {
            finished: finished.clone(),
        });
        let loader = FeedLoader::spawn(source.clone());

        // let the task start and park inside the fetch
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(Arc::strong_count(&source), 2);

        drop(loader);
        tokio::time::sleep(Duration::from_millis(20)).await;

        // the task ended and released its handle on the source
        assert_eq!(Arc::strong_count(&source), 1);
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_stops_pending_fetch() {
        let source = Arc::new(HangingSource {
            finished: Arc::new(AtomicBool::new(false)),
        });
        let mut loader = FeedLoader::spawn(source.clone());
        tokio::time::sleep(Duration::from_millis(10)).await;

        loader.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(Arc::strong_count(&source), 1);
        assert!(loader.state().is_loading());
    }

    #[tokio::test]
    async fn test_http_500_ends_in_error_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = WpClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let mut loader = FeedLoader::spawn(Arc::new(client));

        match loader.settle().await {
            FeedState::Error(message) => assert!(message.contains("500")),
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_items_with_and_without_media() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "title": { "rendered": "Plain" },
                    "excerpt": { "rendered": "" },
                    "link": "https://example.com/1"
                },
                {
                    "id": 2,
                    "title": { "rendered": "Pictured" },
                    "excerpt": { "rendered": "" },
                    "link": "https://example.com/2",
                    "_embedded": {
                        "wp:featuredmedia": [
                            { "source_url": "https://example.com/2.jpg", "alt_text": "two" }
                        ]
                    }
                }
            ])))
            .mount(&server)
            .await;

        let client = WpClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let mut loader = FeedLoader::spawn(Arc::new(client));
        let posts = loader.settle().await.posts().to_vec();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].image_url("/ph"), "/ph");
        assert_eq!(posts[1].image_url("/ph"), "https://example.com/2.jpg");
    }
}
