// SPDX-License-Identifier: MPL-2.0
//! Third-party content sources for the carousels.
//!
//! Each feed exposes a pure `parse` function and an async `fetch` that runs
//! as an iced task. Failures never propagate past [`FeedOutcome`]: a feed
//! either yields items, nothing, or a reason to show its fallback.

pub mod instagram;
pub mod reviews;
pub mod youtube;

use crate::error::FeedError;
use std::time::Duration;

const USER_AGENT: &str = concat!("ClinicShowcase/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Prefix of the placeholder credentials shipped in the sample settings.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Result of one feed load, as the view needs it.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome<T> {
    Loaded(Vec<T>),
    Empty,
    NotConfigured,
    Unavailable,
}

impl<T> FeedOutcome<T> {
    /// Folds a fetch result, logging failures under `feed`.
    pub fn from_result(result: Result<Vec<T>, FeedError>, feed: &str) -> Self {
        match result {
            Ok(items) if items.is_empty() => FeedOutcome::Empty,
            Ok(items) => FeedOutcome::Loaded(items),
            Err(FeedError::NotConfigured) => {
                tracing::info!(feed, "feed not configured");
                FeedOutcome::NotConfigured
            }
            Err(error) => {
                tracing::warn!(feed, %error, "feed unavailable");
                FeedOutcome::Unavailable
            }
        }
    }
}

/// Whether a credential is missing or still the shipped placeholder.
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.starts_with(PLACEHOLDER_PREFIX)
}

/// Builds the HTTP client shared by the feeds.
///
/// # Errors
///
/// Returns [`FeedError::Request`] if the TLS backend cannot be set up.
pub fn client() -> Result<reqwest::Client, FeedError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| FeedError::Request(e.to_string()))
}

/// Sends `request` and returns the body of a successful response.
async fn fetch_text(request: reqwest::RequestBuilder) -> Result<String, FeedError> {
    let response = request
        .send()
        .await
        .map_err(|e| FeedError::Request(e.without_url().to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| FeedError::Request(e.without_url().to_string()))
}
