// SPDX-License-Identifier: MPL-2.0
//! Text helpers for cards, badges and dates.

use chrono::{DateTime, Utc};

/// Maximum caption length on a photo slide, in characters.
pub const CAPTION_LIMIT: usize = 120;

const STAR_COUNT: u8 = 5;

/// Long-form date, e.g. `January 5, 2026`.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Star string for an integer rating: `★` per point, `☆` for the rest.
///
/// Ratings above five are clamped.
#[must_use]
pub fn stars(rating: u8) -> String {
    let lit = rating.min(STAR_COUNT);
    let mut out = "★".repeat(usize::from(lit));
    out.push_str(&"☆".repeat(usize::from(STAR_COUNT - lit)));
    out
}

/// Star string for an aggregate rating such as `4.3`.
///
/// Any fractional part lights a whole star, so `4.3` shows five.
#[must_use]
pub fn badge_stars(rating: f32) -> String {
    (0..STAR_COUNT)
        .map(|i| if f32::from(i) < rating { '★' } else { '☆' })
        .collect()
}

/// Aggregate rating with one decimal, e.g. `4.8`.
#[must_use]
pub fn format_rating(rating: f32) -> String {
    format!("{rating:.1}")
}

/// Shortens `text` to `limit` characters, appending `…` when cut.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte, _)) => format!("{}…", &text[..byte]),
        None => text.to_string(),
    }
}

/// Drops control characters from third-party or visitor text.
///
/// Line breaks survive so multi-paragraph messages keep their shape.
#[must_use]
pub fn plain_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}

/// Loose `local@domain.tld` shape check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
