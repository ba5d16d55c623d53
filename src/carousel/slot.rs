// SPDX-License-Identifier: MPL-2.0
//! Mount point for one carousel use site.
//!
//! A [`Slot`] is what a page section holds: a loading placeholder until the
//! data source answers, then either a mounted [`Carousel`] or a
//! [`Fallback`] message. Replacing the content always tears the previous
//! carousel down first.

use super::controller::{Carousel, CarouselError, CarouselOptions, Message};
use iced::Subscription;
use std::time::Instant;

/// Static content shown instead of a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// i18n key of the message.
    pub message_key: &'static str,
    /// Outbound link to the third-party profile, if any.
    pub link: Option<String>,
}

impl Fallback {
    #[must_use]
    pub fn message(message_key: &'static str) -> Self {
        Self {
            message_key,
            link: None,
        }
    }

    #[must_use]
    pub fn with_link(message_key: &'static str, link: impl Into<String>) -> Self {
        Self {
            message_key,
            link: Some(link.into()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum Slot<T> {
    #[default]
    Loading,
    Ready(Carousel<T>),
    Fallback(Fallback),
}

impl<T> Slot<T> {
    /// Mounts `items`, or stores `empty` when there is nothing to show.
    ///
    /// Any previously mounted carousel is torn down first. Configuration
    /// errors are logged and shown as `empty` too: the slot never panics.
    pub fn mount(
        &mut self,
        items: Vec<T>,
        options: CarouselOptions,
        viewport_width: f32,
        now: Instant,
        empty: Fallback,
    ) {
        self.teardown();
        self.install(Carousel::mount(items, options, viewport_width, now), empty);
    }

    /// Mounts items produced by a fallible `prepare` step.
    ///
    /// A failing item leaves the slot on `failed`, with no timer running.
    #[allow(clippy::too_many_arguments)]
    pub fn mount_prepared<R, E, F>(
        &mut self,
        raw: &[R],
        prepare: F,
        options: CarouselOptions,
        viewport_width: f32,
        now: Instant,
        empty: Fallback,
        failed: Fallback,
    ) where
        F: Fn(&R) -> Result<T, E>,
        E: std::fmt::Display,
    {
        self.teardown();
        match Carousel::mount_prepared(raw, prepare, options, viewport_width, now) {
            Err(error @ CarouselError::Render { .. }) => {
                tracing::warn!(%error, "carousel item failed to render");
                *self = Slot::Fallback(failed);
            }
            result => self.install(result, empty),
        }
    }

    fn install(&mut self, result: Result<Carousel<T>, CarouselError>, empty: Fallback) {
        *self = match result {
            Ok(carousel) => Slot::Ready(carousel),
            Err(CarouselError::Empty) => Slot::Fallback(empty),
            Err(error) => {
                tracing::warn!(%error, "carousel not mounted");
                Slot::Fallback(empty)
            }
        };
    }

    /// Replaces the content with a fallback state.
    pub fn show_fallback(&mut self, fallback: Fallback) {
        self.teardown();
        *self = Slot::Fallback(fallback);
    }

    pub fn update(&mut self, message: Message, now: Instant) {
        if let Slot::Ready(carousel) = self {
            carousel.update(message, now);
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self {
            Slot::Ready(carousel) => carousel.subscription(),
            Slot::Loading | Slot::Fallback(_) => Subscription::none(),
        }
    }

    /// Stops every timer of a mounted carousel.
    pub fn teardown(&mut self) {
        if let Slot::Ready(carousel) = self {
            carousel.teardown();
        }
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel<T>> {
        match self {
            Slot::Ready(carousel) => Some(carousel),
            Slot::Loading | Slot::Fallback(_) => None,
        }
    }

    #[must_use]
    pub fn fallback(&self) -> Option<&Fallback> {
        match self {
            Slot::Fallback(fallback) => Some(fallback),
            Slot::Loading | Slot::Ready(_) => None,
        }
    }

    /// Live auto-advance timers across the slot.
    #[must_use]
    pub fn live_timers(&self) -> usize {
        self.carousel().map_or(0, Carousel::live_timers)
    }

    /// Whether navigation controls are shown.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.carousel().is_some_and(Carousel::has_controls)
    }

    /// Whether the pointer currently hovers the mounted carousel.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.carousel().is_some_and(Carousel::is_paused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::ItemsPerPage;
    use std::time::Duration;

    fn options() -> CarouselOptions {
        CarouselOptions::new(ItemsPerPage::Fixed(1), Duration::from_millis(6000))
    }

    #[test]
    fn empty_items_render_fallback_without_timer_or_controls() {
        let mut slot: Slot<u32> = Slot::default();
        slot.mount(
            Vec::new(),
            options(),
            800.0,
            Instant::now(),
            Fallback::message("reviews-empty"),
        );

        assert_eq!(slot.fallback(), Some(&Fallback::message("reviews-empty")));
        assert!(slot.carousel().is_none());
        assert_eq!(slot.live_timers(), 0);
        assert!(!slot.has_controls());
    }

    #[test]
    fn remount_replaces_carousel_with_fresh_timer() {
        let now = Instant::now();
        let mut slot = Slot::default();
        slot.mount(vec![1, 2, 3], options(), 800.0, now, Fallback::message("x"));
        let first = slot.carousel().and_then(Carousel::timer_handle);

        slot.mount(vec![4, 5], options(), 800.0, now, Fallback::message("x"));
        let second = slot.carousel().and_then(Carousel::timer_handle);

        assert!(first.is_some());
        assert!(second.is_some());
        assert_ne!(first, second);
        assert_eq!(slot.live_timers(), 1);
    }

    #[test]
    fn fallback_replaces_mounted_carousel() {
        let mut slot = Slot::default();
        slot.mount(vec![1, 2], options(), 800.0, Instant::now(), Fallback::message("x"));
        slot.show_fallback(Fallback::with_link("reviews-unavailable", "https://maps.example"));

        assert_eq!(slot.live_timers(), 0);
        assert_eq!(
            slot.fallback().and_then(|f| f.link.as_deref()),
            Some("https://maps.example")
        );
    }

    #[test]
    fn loading_slot_ignores_events() {
        let mut slot: Slot<u8> = Slot::Loading;
        slot.update(Message::Next, Instant::now());
        assert!(slot.carousel().is_none());
        assert!(!slot.is_hovered());
    }

    #[test]
    fn render_failure_shows_failure_fallback() {
        let mut slot: Slot<u8> = Slot::default();
        slot.mount_prepared(
            &[1_u8, 0, 3],
            |n| if *n == 0 { Err("zero") } else { Ok(*n) },
            options(),
            800.0,
            Instant::now(),
            Fallback::message("empty"),
            Fallback::with_link("failed", "https://example.org"),
        );

        assert_eq!(slot.fallback().map(|f| f.message_key), Some("failed"));
        assert_eq!(slot.live_timers(), 0);
    }

    #[test]
    fn prepared_items_mount_normally() {
        let mut slot: Slot<String> = Slot::default();
        slot.mount_prepared(
            &[1_u8, 2],
            |n| Ok::<_, String>(n.to_string()),
            options(),
            800.0,
            Instant::now(),
            Fallback::message("empty"),
            Fallback::message("failed"),
        );

        let carousel = slot.carousel().expect("mounted");
        assert_eq!(carousel.items(), ["1".to_string(), "2".to_string()]);
        assert_eq!(slot.live_timers(), 1);
    }
}
