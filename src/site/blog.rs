// SPDX-License-Identifier: MPL-2.0
//! Blog posts: the bundled articles plus those imported into the store.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

#[derive(RustEmbed)]
#[folder = "assets/blog/"]
struct BundledPosts;

const SAMPLES_FILE: &str = "samples.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    /// Kebab-case topic, e.g. `patient-guide`.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub date: DateTime<Utc>,
}

impl BlogPost {
    /// Content split on blank lines, each paragraph trimmed.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&str> {
        paragraphs(&self.content)
    }

    /// Category shown on the card: `patient-guide` reads `Patient Guide`.
    #[must_use]
    pub fn category_label(&self) -> String {
        self.category
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Deserialize)]
struct PostFile {
    #[serde(default)]
    posts: Vec<PostEntry>,
}

#[derive(Deserialize)]
struct PostEntry {
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    content: String,
    date: Option<DateTime<Utc>>,
}

/// Parses a TOML list of `[[posts]]`.
///
/// Posts get consecutive ids starting at `now` in milliseconds; a post
/// without a date is stamped with `now`.
///
/// # Errors
///
/// Returns [`Error::Config`] when `source` is not a valid post list.
pub fn parse_posts(source: &str, now: DateTime<Utc>) -> Result<Vec<BlogPost>> {
    let file: PostFile =
        toml::from_str(source).map_err(|e| Error::Config(format!("invalid blog posts: {e}")))?;
    let first_id = now.timestamp_millis();

    Ok(file
        .posts
        .into_iter()
        .zip(first_id..)
        .map(|(entry, id)| BlogPost {
            id,
            title: entry.title,
            category: entry.category,
            excerpt: entry.excerpt,
            content: entry.content,
            date: entry.date.unwrap_or(now),
        })
        .collect())
}

/// Articles shipped with the application.
#[must_use]
pub fn bundled_posts() -> Vec<BlogPost> {
    let Some(file) = BundledPosts::get(SAMPLES_FILE) else {
        return Vec::new();
    };
    let source = String::from_utf8_lossy(file.data.as_ref());
    parse_posts(&source, Utc::now()).unwrap_or_else(|error| {
        tracing::warn!(%error, "bundled blog posts skipped");
        Vec::new()
    })
}

/// Posts in display order: imported ones newest first, then the bundled
/// articles.
#[must_use]
pub fn listing(mut stored: Vec<BlogPost>) -> Vec<BlogPost> {
    stored.reverse();
    stored.extend(bundled_posts());
    stored
}

/// Splits `text` into paragraphs separated by one or more blank lines.
#[must_use]
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(begin) = start.take() {
                out.push(text[begin..end].trim());
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(begin) = start {
        out.push(text[begin..end].trim());
    }
    out
}
