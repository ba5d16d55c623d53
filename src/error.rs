// SPDX-License-Identifier: MPL-2.0
//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Store Error: {0}")]
    Store(String),

    #[error("Feed Error: {0}")]
    Feed(#[from] FeedError),

    #[error("Logger Error: {0}")]
    Logger(String),
}

/// Failures while fetching or decoding a third-party feed.
///
/// None of these reach the user as a dialog: every variant is mapped to the
/// feed's fallback state by [`crate::feeds::FeedOutcome::from_result`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// Credentials are missing or still hold the placeholder values.
    #[error("feed is not configured")]
    NotConfigured,

    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The remote answered with a non-success status.
    #[error("HTTP status: {0}")]
    Status(u16),

    /// The body was not in the expected format.
    #[error("parse failed: {0}")]
    Parse(String),
}

impl FeedError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FeedError::NotConfigured => "feed-not-configured",
            FeedError::Request(_) | FeedError::Status(_) | FeedError::Parse(_) => {
                "feed-unavailable"
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_converts_into_error_io_variant() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        match err {
            Error::Io(message) => assert!(message.contains("denied")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn display_prefixes_variant_name() {
        let err = Error::Config("bad".into());
        assert_eq!(format!("{}", err), "Config Error: bad");
    }

    #[test]
    fn feed_error_converts_and_displays() {
        let err: Error = FeedError::Status(503).into();
        assert_eq!(err.to_string(), "Feed Error: HTTP status: 503");
    }

    #[test]
    fn feed_error_keys_distinguish_configuration_from_failure() {
        assert_eq!(FeedError::NotConfigured.i18n_key(), "feed-not-configured");
        assert_eq!(
            FeedError::Parse("eof".into()).i18n_key(),
            "feed-unavailable"
        );
        assert_eq!(
            FeedError::Request("timeout".into()).i18n_key(),
            "feed-unavailable"
        );
    }
}
