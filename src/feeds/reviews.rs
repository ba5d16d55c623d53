// SPDX-License-Identifier: MPL-2.0
//! Place reviews from the Places API (v1).

use super::{fetch_text, is_placeholder};
use crate::error::FeedError;
use serde::Deserialize;

const PLACES_ENDPOINT: &str = "https://places.googleapis.com/v1/places/";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";
const FIELD_MASK: &str = "reviews,rating,userRatingCount,googleMapsUri";

/// Author name used when the review carries none.
pub const DEFAULT_AUTHOR: &str = "Google User";
/// Rating assumed when the review carries none.
pub const DEFAULT_RATING: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceSettings {
    pub place_id: String,
    pub api_key: String,
}

impl PlaceSettings {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !is_placeholder(&self.place_id) && !is_placeholder(&self.api_key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: String,
    pub photo_uri: Option<String>,
    /// Human phrase such as "2 weeks ago", as sent by the API.
    pub relative_time: String,
    pub rating: u32,
    pub text: String,
}

impl Review {
    /// Letter shown in place of a missing author photo.
    #[must_use]
    pub fn avatar_letter(&self) -> String {
        self.author.chars().take(1).collect()
    }
}

/// Aggregate rating shown in the section badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub rating: f32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Place {
    pub reviews: Vec<Review>,
    /// Present when the place reports a non-zero rating.
    pub summary: Option<RatingSummary>,
    pub maps_uri: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlace {
    #[serde(default)]
    reviews: Vec<RawReview>,
    rating: Option<f32>,
    user_rating_count: Option<u32>,
    google_maps_uri: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReview {
    rating: Option<u32>,
    text: Option<LocalizedText>,
    author_attribution: Option<AuthorAttribution>,
    relative_publish_time_description: Option<String>,
}

#[derive(Deserialize)]
struct LocalizedText {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorAttribution {
    display_name: Option<String>,
    photo_uri: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<RawReview> for Review {
    fn from(raw: RawReview) -> Self {
        let (author, photo_uri) = match raw.author_attribution {
            Some(attribution) => (
                non_empty(attribution.display_name),
                non_empty(attribution.photo_uri),
            ),
            None => (None, None),
        };
        Self {
            author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            photo_uri,
            relative_time: raw.relative_publish_time_description.unwrap_or_default(),
            rating: raw.rating.filter(|r| *r > 0).unwrap_or(DEFAULT_RATING),
            text: raw.text.and_then(|t| t.text).unwrap_or_default(),
        }
    }
}

/// Decodes a place details body.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] when the body is not a place object.
pub fn parse(body: &str) -> Result<Place, FeedError> {
    let raw: RawPlace = serde_json::from_str(body).map_err(|e| FeedError::Parse(e.to_string()))?;

    let summary = raw.rating.filter(|r| *r > 0.0).map(|rating| RatingSummary {
        rating,
        count: raw.user_rating_count.unwrap_or(0),
    });

    Ok(Place {
        reviews: raw.reviews.into_iter().map(Review::from).collect(),
        summary,
        maps_uri: non_empty(raw.google_maps_uri),
    })
}

/// Fetches the reviews of the configured place.
///
/// # Errors
///
/// [`FeedError::NotConfigured`] without credentials, otherwise any request,
/// status or parse failure.
pub async fn fetch(client: reqwest::Client, settings: PlaceSettings) -> Result<Place, FeedError> {
    if !settings.is_configured() {
        return Err(FeedError::NotConfigured);
    }
    let url = format!("{PLACES_ENDPOINT}{}", settings.place_id.trim());
    let request = client
        .get(url)
        .query(&[("key", settings.api_key.trim())])
        .header(FIELD_MASK_HEADER, FIELD_MASK);

    let body = fetch_text(request).await?;
    parse(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "rating": 4.6,
        "userRatingCount": 212,
        "googleMapsUri": "https://maps.google.com/?cid=1",
        "reviews": [
            {
                "rating": 5,
                "relativePublishTimeDescription": "a week ago",
                "text": { "text": "Very caring staff.", "languageCode": "en" },
                "authorAttribution": {
                    "displayName": "Priya R",
                    "photoUri": "https://lh3.example/photo.png"
                }
            },
            { "rating": 0 },
            { "rating": 3, "authorAttribution": { "displayName": "" } }
        ]
    }"#;

    #[test]
    fn parses_reviews_and_summary() {
        let place = parse(BODY).expect("parse");

        assert_eq!(
            place.summary,
            Some(RatingSummary {
                rating: 4.6,
                count: 212
            })
        );
        assert_eq!(place.maps_uri.as_deref(), Some("https://maps.google.com/?cid=1"));
        assert_eq!(place.reviews.len(), 3);

        let first = &place.reviews[0];
        assert_eq!(first.author, "Priya R");
        assert_eq!(first.text, "Very caring staff.");
        assert_eq!(first.relative_time, "a week ago");
        assert_eq!(first.avatar_letter(), "P");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let place = parse(BODY).expect("parse");

        let bare = &place.reviews[1];
        assert_eq!(bare.author, DEFAULT_AUTHOR);
        assert_eq!(bare.rating, DEFAULT_RATING);
        assert!(bare.text.is_empty());
        assert!(bare.photo_uri.is_none());

        assert_eq!(place.reviews[2].author, DEFAULT_AUTHOR);
        assert_eq!(place.reviews[2].rating, 3);
    }

    #[test]
    fn place_without_reviews_is_empty_not_error() {
        let place = parse(r#"{ "rating": 0 }"#).expect("parse");
        assert!(place.reviews.is_empty());
        assert!(place.summary.is_none());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(parse("<html>"), Err(FeedError::Parse(_))));
    }

    #[test]
    fn placeholder_credentials_are_not_configured() {
        let settings = PlaceSettings {
            place_id: "YOUR_PLACE_ID".to_string(),
            api_key: "key".to_string(),
        };
        assert!(!settings.is_configured());
    }

    #[tokio::test]
    async fn fetch_without_credentials_skips_network() {
        let client = crate::feeds::client().expect("client");
        let result = fetch(client, PlaceSettings::default()).await;
        assert_eq!(result, Err(FeedError::NotConfigured));
    }
}
