// SPDX-License-Identifier: MPL-2.0
//! Recent photo posts from the Instagram Graph API.

use super::{fetch_text, is_placeholder};
use crate::error::FeedError;
use crate::site::format::{plain_text, truncate, CAPTION_LIMIT};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const MEDIA_ENDPOINT: &str = "https://graph.instagram.com/me/media";
const MEDIA_FIELDS: &str = "id,caption,media_type,media_url,thumbnail_url,permalink,timestamp";

/// Number of posts requested.
pub const POST_LIMIT: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstagramSettings {
    pub access_token: String,
}

impl InstagramSettings {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !is_placeholder(&self.access_token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Album,
    Video,
}

impl MediaKind {
    fn from_api(media_type: &str) -> Option<Self> {
        match media_type {
            "IMAGE" => Some(MediaKind::Image),
            "CAROUSEL_ALBUM" => Some(MediaKind::Album),
            "VIDEO" => Some(MediaKind::Video),
            _ => None,
        }
    }

    /// Corner badge for non-photo posts.
    #[must_use]
    pub fn badge(self) -> Option<&'static str> {
        match self {
            MediaKind::Image => None,
            MediaKind::Album => Some("❑❑"),
            MediaKind::Video => Some("▶"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub kind: MediaKind,
    /// Still image: the thumbnail for videos, the media itself otherwise.
    pub image_url: Option<String>,
    pub permalink: String,
    pub caption: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Post {
    /// Caption cut to [`CAPTION_LIMIT`] characters, control characters
    /// removed.
    #[must_use]
    pub fn short_caption(&self) -> Option<String> {
        self.caption
            .as_deref()
            .map(plain_text)
            .filter(|c| !c.trim().is_empty())
            .map(|c| truncate(&c, CAPTION_LIMIT))
    }
}

#[derive(Deserialize)]
struct MediaPage {
    #[serde(default)]
    data: Vec<RawMedia>,
}

#[derive(Deserialize)]
struct RawMedia {
    id: String,
    caption: Option<String>,
    media_type: String,
    media_url: Option<String>,
    thumbnail_url: Option<String>,
    #[serde(default)]
    permalink: String,
    timestamp: Option<String>,
}

impl RawMedia {
    fn into_post(self) -> Option<Post> {
        let kind = MediaKind::from_api(&self.media_type)?;
        let image_url = match kind {
            MediaKind::Video => self.thumbnail_url,
            MediaKind::Image | MediaKind::Album => self.media_url,
        };
        // The API sends offsets without a colon, e.g. `+0000`.
        let timestamp = self.timestamp.as_deref().and_then(|raw| {
            DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
                .ok()
                .map(|t| t.with_timezone(&Utc))
        });
        Some(Post {
            id: self.id,
            kind,
            image_url,
            permalink: self.permalink,
            caption: self.caption,
            timestamp,
        })
    }
}

/// Decodes a media page, keeping photos, albums and videos.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] when the body is not a media page.
pub fn parse(body: &str) -> Result<Vec<Post>, FeedError> {
    let page: MediaPage =
        serde_json::from_str(body).map_err(|e| FeedError::Parse(e.to_string()))?;
    Ok(page
        .data
        .into_iter()
        .filter_map(RawMedia::into_post)
        .collect())
}

/// Fetches the latest [`POST_LIMIT`] posts.
///
/// # Errors
///
/// [`FeedError::NotConfigured`] without a token, otherwise any request,
/// status or parse failure.
pub async fn fetch(
    client: reqwest::Client,
    settings: InstagramSettings,
) -> Result<Vec<Post>, FeedError> {
    if !settings.is_configured() {
        return Err(FeedError::NotConfigured);
    }
    let limit = POST_LIMIT.to_string();
    let request = client.get(MEDIA_ENDPOINT).query(&[
        ("fields", MEDIA_FIELDS),
        ("limit", limit.as_str()),
        ("access_token", settings.access_token.trim()),
    ]);

    let body = fetch_text(request).await?;
    parse(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "data": [
            {
                "id": "1",
                "caption": "Free screening camp this Sunday",
                "media_type": "IMAGE",
                "media_url": "https://cdn.example/1.jpg",
                "permalink": "https://instagram.example/p/1",
                "timestamp": "2026-01-05T10:00:00+0000"
            },
            {
                "id": "2",
                "media_type": "VIDEO",
                "media_url": "https://cdn.example/2.mp4",
                "thumbnail_url": "https://cdn.example/2.jpg",
                "permalink": "https://instagram.example/p/2"
            },
            { "id": "3", "media_type": "AUDIO", "permalink": "x" },
            {
                "id": "4",
                "media_type": "CAROUSEL_ALBUM",
                "media_url": "https://cdn.example/4.jpg",
                "permalink": "https://instagram.example/p/4"
            }
        ],
        "paging": {}
    }"#;

    #[test]
    fn keeps_supported_media_types() {
        let posts = parse(BODY).expect("parse");
        let kinds: Vec<_> = posts.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![MediaKind::Image, MediaKind::Video, MediaKind::Album]);
    }

    #[test]
    fn videos_use_thumbnail() {
        let posts = parse(BODY).expect("parse");
        assert_eq!(posts[1].image_url.as_deref(), Some("https://cdn.example/2.jpg"));
        assert_eq!(posts[1].kind.badge(), Some("▶"));
        assert_eq!(posts[0].kind.badge(), None);
    }

    #[test]
    fn timestamp_is_parsed() {
        let posts = parse(BODY).expect("parse");
        let expected = DateTime::parse_from_rfc3339("2026-01-05T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(posts[0].timestamp, Some(expected));
        assert_eq!(posts[1].timestamp, None);
    }

    #[test]
    fn long_captions_are_truncated() {
        let post = Post {
            id: "x".to_string(),
            kind: MediaKind::Image,
            image_url: None,
            permalink: String::new(),
            caption: Some("a".repeat(150)),
            timestamp: None,
        };
        let caption = post.short_caption().expect("caption");
        assert_eq!(caption.chars().count(), CAPTION_LIMIT + 1);
        assert!(caption.ends_with('…'));
    }

    #[test]
    fn blank_caption_is_omitted() {
        let post = Post {
            id: "x".to_string(),
            kind: MediaKind::Image,
            image_url: None,
            permalink: String::new(),
            caption: Some("  ".to_string()),
            timestamp: None,
        };
        assert_eq!(post.short_caption(), None);
    }

    #[test]
    fn missing_data_is_empty() {
        assert!(parse("{}").expect("parse").is_empty());
    }
}
