// SPDX-License-Identifier: MPL-2.0
//! Latest uploads from a channel's public Atom feed.

use super::{fetch_text, is_placeholder};
use crate::error::FeedError;
use quick_xml::events::Event;
use quick_xml::Reader;

const FEED_ENDPOINT: &str = "https://www.youtube.com/feeds/videos.xml";

/// Maximum number of videos shown.
pub const VIDEO_LIMIT: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YoutubeSettings {
    pub channel_id: String,
}

impl YoutubeSettings {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !is_placeholder(&self.channel_id)
    }

    /// Public channel page, used as the fallback link.
    #[must_use]
    pub fn channel_url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.channel_id.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
}

impl Video {
    #[must_use]
    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/mqdefault.jpg", self.id)
    }

    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    VideoId,
    Title,
}

/// Extracts up to `limit` videos, in feed order.
///
/// Inside an entry only the first `title` counts; the media group repeats
/// it. Entries without a video id are skipped.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] for malformed XML.
pub fn parse(xml: &str, limit: usize) -> Result<Vec<Video>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut videos = Vec::new();
    let mut entry: Option<(String, String)> = None;
    let mut field: Option<Field> = None;

    while videos.len() < limit {
        let event = reader
            .read_event()
            .map_err(|e| FeedError::Parse(e.to_string()))?;
        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"entry" => entry = Some((String::new(), String::new())),
                b"videoId" if entry.is_some() => field = Some(Field::VideoId),
                b"title" if entry.is_some() => field = Some(Field::Title),
                _ => {}
            },
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| FeedError::Parse(e.to_string()))?;
                append(&mut entry, field, &text);
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                append(&mut entry, field, &String::from_utf8_lossy(&raw));
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"entry" => {
                    if let Some((id, title)) = entry.take() {
                        if !id.is_empty() {
                            videos.push(Video { id, title });
                        }
                    }
                    field = None;
                }
                _ => field = None,
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(videos)
}

fn append(entry: &mut Option<(String, String)>, field: Option<Field>, text: &str) {
    let (Some((id, title)), Some(field)) = (entry.as_mut(), field) else {
        return;
    };
    let target = match field {
        Field::VideoId => id,
        Field::Title => title,
    };
    if target.is_empty() {
        target.push_str(text.trim());
    }
}

/// Fetches the channel feed.
///
/// # Errors
///
/// [`FeedError::NotConfigured`] without a channel id, otherwise any
/// request, status or parse failure.
pub async fn fetch(
    client: reqwest::Client,
    settings: YoutubeSettings,
) -> Result<Vec<Video>, FeedError> {
    if !settings.is_configured() {
        return Err(FeedError::NotConfigured);
    }
    let request = client
        .get(FEED_ENDPOINT)
        .query(&[("channel_id", settings.channel_id.trim())]);

    let body = fetch_text(request).await?;
    parse(&body, VIDEO_LIMIT)
}
