// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and log level
//! - `[carousel]` - Auto-advance intervals and resize settling
//! - `[feeds]` - Credentials and profile links for the third-party feeds
//! - `[contact]` - Messaging number used for appointment hand-off
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `CLINIC_SHOWCASE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use clinic_showcase::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::feeds::instagram::InstagramSettings;
use crate::feeds::reviews::PlaceSettings;
use crate::feeds::youtube::YoutubeSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Log filter level (e.g., "info", "debug"). `RUST_LOG` takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Carousel timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    #[serde(
        default = "default_review_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub review_interval_ms: Option<u64>,

    #[serde(
        default = "default_slideshow_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub slideshow_interval_ms: Option<u64>,

    #[serde(
        default = "default_resize_settle_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resize_settle_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            review_interval_ms: default_review_interval_ms(),
            slideshow_interval_ms: default_slideshow_interval_ms(),
            resize_settle_ms: default_resize_settle_ms(),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn review_interval(&self) -> Duration {
        clamp_interval(self.review_interval_ms.unwrap_or(DEFAULT_REVIEW_INTERVAL_MS))
    }

    #[must_use]
    pub fn slideshow_interval(&self) -> Duration {
        clamp_interval(
            self.slideshow_interval_ms
                .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn resize_settle(&self) -> Duration {
        clamp_resize_settle(self.resize_settle_ms.unwrap_or(DEFAULT_RESIZE_SETTLE_MS))
    }
}

/// Third-party feed credentials and links.
///
/// Empty values and the shipped `YOUR_...` placeholders both mean
/// "not configured".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeedsConfig {
    #[serde(default)]
    pub google_place_id: String,

    #[serde(default)]
    pub google_api_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_fallback_url: Option<String>,

    #[serde(default)]
    pub instagram_access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_profile_url: Option<String>,

    #[serde(default)]
    pub youtube_channel_id: String,
}

impl FeedsConfig {
    #[must_use]
    pub fn place(&self) -> PlaceSettings {
        PlaceSettings {
            place_id: self.google_place_id.clone(),
            api_key: self.google_api_key.clone(),
        }
    }

    #[must_use]
    pub fn instagram(&self) -> InstagramSettings {
        InstagramSettings {
            access_token: self.instagram_access_token.clone(),
        }
    }

    #[must_use]
    pub fn youtube(&self) -> YoutubeSettings {
        YoutubeSettings {
            channel_id: self.youtube_channel_id.clone(),
        }
    }

    #[must_use]
    pub fn reviews_fallback_url(&self) -> &str {
        self.reviews_fallback_url
            .as_deref()
            .unwrap_or(DEFAULT_REVIEWS_FALLBACK_URL)
    }

    #[must_use]
    pub fn instagram_profile_url(&self) -> &str {
        self.instagram_profile_url
            .as_deref()
            .unwrap_or(DEFAULT_INSTAGRAM_PROFILE_URL)
    }
}

/// Appointment hand-off settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// International number without `+`, e.g. "919876543210".
    #[serde(default)]
    pub whatsapp_number: String,

    /// Services offered in the appointment form.
    #[serde(default = "default_services")]
    pub services: Vec<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: String::new(),
            services: default_services(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub feeds: FeedsConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_review_interval_ms() -> Option<u64> {
    Some(DEFAULT_REVIEW_INTERVAL_MS)
}

fn default_slideshow_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_MS)
}

fn default_resize_settle_ms() -> Option<u64> {
    Some(DEFAULT_RESIZE_SETTLE_MS)
}

fn default_services() -> Vec<String> {
    ["Consultation", "Surgery", "Follow-up"]
        .into_iter()
        .map(String::from)
        .collect()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "settings ignored");
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
