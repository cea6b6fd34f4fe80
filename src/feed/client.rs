//! HTTP client for the WordPress REST API
//!
//! Fetches the post collection with embedded media in a single request.

use super::error::FeedError;
use super::post::{parse_posts, Post};
use super::traits::PostSource;
use async_trait::async_trait;
use std::time::Duration;

/// Default content host
pub const DEFAULT_API_BASE: &str = "https://shivjha.online";

const POSTS_PATH: &str = "/wp-json/wp/v2/posts?_embed";
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Build the posts endpoint for a site base URL
pub fn posts_url(api_base: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), POSTS_PATH)
}

/// Client for the posts endpoint of one WordPress site
pub struct WpClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WpClient {
    /// Create a new client for `api_base`
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| FeedError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: posts_url(api_base),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PostSource for WpClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        tracing::info!("Fetching posts from {}", self.endpoint);

        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let posts = parse_posts(&body)?;

        tracing::info!("Fetched {} posts", posts.len());
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WpClient {
        WpClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_posts_url_trims_trailing_slash() {
        assert_eq!(
            posts_url("https://example.com/"),
            "https://example.com/wp-json/wp/v2/posts?_embed"
        );
        assert_eq!(
            posts_url(DEFAULT_API_BASE),
            "https://shivjha.online/wp-json/wp/v2/posts?_embed"
        );
    }

    #[tokio::test]
    async fn test_fetch_posts_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 10,
                    "title": { "rendered": "Ten" },
                    "excerpt": { "rendered": "<p>ten</p>" },
                    "link": "https://example.com/ten"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client_for(&server).fetch_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 10);
        assert_eq!(posts[0].link, "https://example.com/ten");
    }

    #[tokio::test]
    async fn test_fetch_posts_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_posts().await.unwrap_err();
        assert!(matches!(err, FeedError::Status(404)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_posts_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_posts().await.unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_posts_connection_refused() {
        // nothing listens on port 9 locally
        let client = WpClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.fetch_posts().await.unwrap_err();
        assert!(matches!(err, FeedError::Request(_)));
    }
}
