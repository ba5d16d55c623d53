// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Carousel**: auto-advance intervals and resize settling
//! - **Window**: initial window size
//! - **Feeds**: outbound fallback links

use std::time::Duration;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Review slider auto-advance interval (in milliseconds).
pub const DEFAULT_REVIEW_INTERVAL_MS: u64 = 6000;

/// Photo slideshow auto-advance interval (in milliseconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u64 = 5000;

/// Minimum auto-advance interval (in milliseconds).
pub const MIN_INTERVAL_MS: u64 = 1000;

/// Maximum auto-advance interval (in milliseconds).
pub const MAX_INTERVAL_MS: u64 = 60_000;

/// Quiet period after the last resize before re-pagination (in milliseconds).
pub const DEFAULT_RESIZE_SETTLE_MS: u64 = 250;

/// Minimum resize settle period (in milliseconds).
pub const MIN_RESIZE_SETTLE_MS: u64 = 50;

/// Maximum resize settle period (in milliseconds).
pub const MAX_RESIZE_SETTLE_MS: u64 = 2000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Shown when reviews cannot be loaded and the place has no maps link.
pub const DEFAULT_REVIEWS_FALLBACK_URL: &str = "https://www.google.com/maps";

/// Shown when photo posts cannot be loaded.
pub const DEFAULT_INSTAGRAM_PROFILE_URL: &str = "https://www.instagram.com";

/// Clamps a configured interval into the accepted range.
#[must_use]
pub fn clamp_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS))
}

/// Clamps a configured resize settle period into the accepted range.
#[must_use]
pub fn clamp_resize_settle(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_RESIZE_SETTLE_MS, MAX_RESIZE_SETTLE_MS))
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_INTERVAL_MS > 0);
    assert!(MAX_INTERVAL_MS >= MIN_INTERVAL_MS);
    assert!(DEFAULT_REVIEW_INTERVAL_MS >= MIN_INTERVAL_MS);
    assert!(DEFAULT_REVIEW_INTERVAL_MS <= MAX_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS >= MIN_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS <= MAX_INTERVAL_MS);

    assert!(MIN_RESIZE_SETTLE_MS > 0);
    assert!(DEFAULT_RESIZE_SETTLE_MS >= MIN_RESIZE_SETTLE_MS);
    assert!(DEFAULT_RESIZE_SETTLE_MS <= MAX_RESIZE_SETTLE_MS);

    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
