//! WordPress post wire types and their display derivations

use super::error::FeedError;
use scraper::Html;
use serde::Deserialize;

/// Image path used when a post carries no featured media
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/400/225";

/// A `{ "rendered": "<html>" }` object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderedText {
    pub rendered: String,
}

impl RenderedText {
    /// Markup-free rendition of the remote HTML
    pub fn plain(&self) -> String {
        html_to_text(&self.rendered)
    }
}

/// One `wp:featuredmedia` entry. WordPress substitutes an error object when
/// the media is private, so both fields may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<FeaturedMedia>,
}

/// A post as returned by `/wp-json/wp/v2/posts?_embed`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: RenderedText,
    pub excerpt: RenderedText,
    pub link: String,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

impl Post {
    fn first_media(&self) -> Option<&FeaturedMedia> {
        self.embedded
            .as_ref()
            .and_then(|e| e.featured_media.first())
    }

    /// Featured image source, or `placeholder` when there is none
    pub fn image_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.first_media()
            .and_then(|m| m.source_url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
    }

    /// Alt text of the featured image, falling back to the title
    pub fn image_alt(&self) -> String {
        match self
            .first_media()
            .and_then(|m| m.alt_text.as_deref())
            .filter(|alt| !alt.is_empty())
        {
            Some(alt) => alt.to_string(),
            None => self.title_text(),
        }
    }

    pub fn title_text(&self) -> String {
        self.title.plain()
    }

    pub fn excerpt_text(&self) -> String {
        self.excerpt.plain()
    }
}

/// Strip markup from a rich-text fragment, decode entities and collapse
/// whitespace. Remote HTML is never shown as-is.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode a posts collection. A body that is not a JSON array is an error;
/// individual items that do not have the post shape are skipped.
pub fn parse_posts(body: &str) -> Result<Vec<Post>, FeedError> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let total = items.len();

    let posts: Vec<Post> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Post>(item) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!("Skipping malformed post at index {idx}: {e}");
                None
            }
        })
        .collect();

    if posts.len() < total {
        tracing::warn!("Skipped {} of {total} posts", total - posts.len());
    }

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn post_json(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "title": { "rendered": "Hello &amp; <em>welcome</em>" },
            "excerpt": { "rendered": "<p>First post [&hellip;]</p>\n" },
            "link": format!("https://example.com/?p={id}"),
        })
    }

    fn parse_one(value: serde_json::Value) -> Post {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_post_without_embedded_uses_placeholder() {
        let post = parse_one(post_json(1));
        assert!(post.embedded.is_none());
        assert_eq!(post.image_url(PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_post_with_featured_media_uses_source_url() {
        let mut value = post_json(2);
        value["_embedded"] = json!({
            "wp:featuredmedia": [
                { "source_url": "https://example.com/a.jpg", "alt_text": "A cat" }
            ]
        });
        let post = parse_one(value);
        assert_eq!(post.image_url(PLACEHOLDER_IMAGE), "https://example.com/a.jpg");
        assert_eq!(post.image_alt(), "A cat");
    }

    #[test]
    fn test_empty_media_list_and_error_entry_use_placeholder() {
        let mut empty = post_json(3);
        empty["_embedded"] = json!({ "wp:featuredmedia": [] });
        assert_eq!(parse_one(empty).image_url("/ph"), "/ph");

        let mut errored = post_json(4);
        errored["_embedded"] = json!({
            "wp:featuredmedia": [ { "code": "rest_forbidden", "message": "Forbidden" } ]
        });
        assert_eq!(parse_one(errored).image_url("/ph"), "/ph");

        let mut blank = post_json(5);
        blank["_embedded"] = json!({ "wp:featuredmedia": [ { "source_url": "" } ] });
        assert_eq!(parse_one(blank).image_url("/ph"), "/ph");
    }

    #[test]
    fn test_embedded_without_media_key() {
        let mut value = post_json(6);
        value["_embedded"] = json!({ "author": [ { "name": "admin" } ] });
        let post = parse_one(value);
        assert_eq!(post.image_url("/ph"), "/ph");
    }

    #[test]
    fn test_image_alt_falls_back_to_title() {
        let mut value = post_json(7);
        value["_embedded"] = json!({
            "wp:featuredmedia": [ { "source_url": "https://example.com/b.png", "alt_text": "" } ]
        });
        assert_eq!(parse_one(value).image_alt(), "Hello & welcome");
    }

    #[test]
    fn test_rich_text_is_rendered_as_plain_text() {
        let post = parse_one(post_json(8));
        assert_eq!(post.title_text(), "Hello & welcome");
        assert_eq!(post.excerpt_text(), "First post […]");
    }

    #[test]
    fn test_html_to_text_drops_scripts_markup() {
        let text = html_to_text("<b>Bold</b> <img src=x onerror=alert(1)>text");
        assert_eq!(text, "Bold text");
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_parse_posts_skips_malformed_items() {
        let body = json!([
            post_json(1),
            { "id": 2, "link": "https://example.com/?p=2" },
            post_json(3),
        ])
        .to_string();
        let posts = parse_posts(&body).unwrap();
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_parse_posts_rejects_non_array_body() {
        let err = parse_posts(r#"{"code":"rest_no_route"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[test]
    fn test_parse_posts_empty_array() {
        assert!(parse_posts("[]").unwrap().is_empty());
    }
}
