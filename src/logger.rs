// SPDX-License-Identifier: MPL-2.0
//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after the configured level is known.
//! `RUST_LOG` takes precedence over the configured level when it is set.

use crate::error::{Error, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Default level when neither the config nor the CLI provides one.
pub const DEFAULT_LEVEL: &str = "info";

/// Initialises the global tracing subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`Error::Logger`] if the level cannot be parsed or a global
/// subscriber is already installed.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| Error::Logger(format!("invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

/// Parses a log level string, rejecting empty or unknown values.
///
/// # Errors
///
/// Returns [`Error::Logger`] for unrecognised levels.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    if level.is_empty() {
        return Err(Error::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| Error::Logger(format!("unrecognised log level: '{level}'")))
}

/// Picks the CLI level, then the configured one, then [`DEFAULT_LEVEL`].
///
/// A chosen level that fails [`parse_level`] is replaced by
/// [`DEFAULT_LEVEL`] and the parse error is returned alongside so the caller
/// can report it before the subscriber exists.
#[must_use]
pub fn resolve_level(cli: Option<String>, configured: Option<String>) -> (String, Option<Error>) {
    let Some(level) = cli.or(configured) else {
        return (DEFAULT_LEVEL.to_string(), None);
    };
    match parse_level(&level) {
        Ok(_) => (level, None),
        Err(error) => (DEFAULT_LEVEL.to_string(), Some(error)),
    }
}
