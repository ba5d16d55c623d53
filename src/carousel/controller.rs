// SPDX-License-Identifier: MPL-2.0
//! The paginated, auto-advancing carousel controller.
//!
//! A [`Carousel`] owns its items and every piece of navigation state. All
//! transitions go through [`Carousel::update`], which the application calls
//! from its single update loop, so one controller never sees interleaved
//! callbacks.

use super::paging::{normalize, ItemsPerPage, PageLayout};
use super::timer::{AutoAdvance, Debounce, TimerHandle};
use iced::{time, Subscription};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Settle period applied to viewport resize events by default.
pub const DEFAULT_RESIZE_SETTLE: Duration = Duration::from_millis(250);

/// How often a pending resize is checked for having settled.
const RESIZE_POLL: Duration = Duration::from_millis(50);

/// Reasons a carousel refuses to mount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel has no items")]
    Empty,

    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,

    #[error("item {index} could not be rendered: {reason}")]
    Render { index: usize, reason: String },
}

/// Per-use-site configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselOptions {
    pub items_per_page: ItemsPerPage,
    pub interval: Duration,
    pub resize_settle: Duration,
}

impl CarouselOptions {
    #[must_use]
    pub fn new(items_per_page: ItemsPerPage, interval: Duration) -> Self {
        Self {
            items_per_page,
            interval,
            resize_settle: DEFAULT_RESIZE_SETTLE,
        }
    }

    #[must_use]
    pub fn with_resize_settle(mut self, settle: Duration) -> Self {
        self.resize_settle = settle;
        self
    }
}

/// Events a carousel reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    SelectPage(usize),
    PointerEntered,
    PointerLeft,
    /// Auto-advance tick delivered by the subscription for `handle`.
    Tick { handle: TimerHandle, at: Instant },
    /// Raw viewport width from a window resize event.
    ViewportResized(f32),
    /// Periodic check for a settled resize.
    ResizePoll(Instant),
    /// The outbound link of a fallback state was pressed.
    FallbackLinkPressed,
}

/// One page indicator as shown in the dot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub page: usize,
    pub active: bool,
}

/// Navigation state of one mounted carousel.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    items_per_page: ItemsPerPage,
    layout: PageLayout,
    current_page: usize,
    auto_advance: AutoAdvance,
    resize: Debounce<f32>,
    paused: bool,
    torn_down: bool,
}

impl<T> Carousel<T> {
    /// Lays out `items` for `viewport_width` and starts auto-advance.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Empty`] for an empty item list and
    /// [`CarouselError::ZeroInterval`] for a zero auto-advance interval.
    pub fn mount(
        items: Vec<T>,
        options: CarouselOptions,
        viewport_width: f32,
        now: Instant,
    ) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        if options.interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }

        let layout = PageLayout::new(items.len(), options.items_per_page.resolve(viewport_width));
        let mut carousel = Self {
            items,
            items_per_page: options.items_per_page,
            layout,
            current_page: 0,
            auto_advance: AutoAdvance::new(options.interval),
            resize: Debounce::new(options.resize_settle),
            paused: false,
            torn_down: false,
        };
        carousel.reset_auto_advance(now);
        Ok(carousel)
    }

    /// Prepares every raw item through a fallible renderer, then mounts.
    ///
    /// A renderer failure is fatal: nothing is mounted and the failing index
    /// is reported.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Render`] for the first item that fails, or
    /// any error [`Carousel::mount`] returns.
    pub fn mount_prepared<R, E, F>(
        raw: &[R],
        prepare: F,
        options: CarouselOptions,
        viewport_width: f32,
        now: Instant,
    ) -> Result<Self, CarouselError>
    where
        F: Fn(&R) -> Result<T, E>,
        E: std::fmt::Display,
    {
        let items = raw
            .iter()
            .enumerate()
            .map(|(index, item)| {
                prepare(item).map_err(|e| CarouselError::Render {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<T>, CarouselError>>()?;
        Self::mount(items, options, viewport_width, now)
    }

    /// Moves to `page`, wrapping out-of-range requests.
    ///
    /// Calling this with the current page leaves the visible state as is.
    pub fn go_to(&mut self, page: isize) {
        self.current_page = normalize(page, self.layout.page_count());
    }

    /// Applies one event.
    pub fn update(&mut self, message: Message, now: Instant) {
        if self.torn_down {
            return;
        }

        match message {
            Message::Previous => {
                self.step(-1);
                self.reset_auto_advance(now);
            }
            Message::Next => {
                self.step(1);
                self.reset_auto_advance(now);
            }
            Message::SelectPage(page) => {
                self.go_to(isize::try_from(page).unwrap_or(isize::MAX));
                self.reset_auto_advance(now);
            }
            Message::PointerEntered => {
                self.paused = true;
                self.auto_advance.cancel();
            }
            Message::PointerLeft => {
                self.paused = false;
                self.reset_auto_advance(now);
            }
            Message::Tick { handle, at } => {
                if self.auto_advance.fire(handle, at) {
                    self.step(1);
                }
            }
            Message::ViewportResized(width) => self.resize.push(width, now),
            Message::ResizePoll(at) => {
                if let Some(width) = self.resize.poll(at) {
                    self.apply_viewport(width, at);
                }
            }
            Message::FallbackLinkPressed => {}
        }
    }

    /// Cancels the auto-advance timer and any pending resize. Every later
    /// event is ignored.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.auto_advance.cancel() {
            tracing::debug!(?handle, "carousel torn down with live timer");
        }
        self.resize.cancel();
        self.torn_down = true;
    }

    /// Runtime timers this carousel currently needs.
    ///
    /// The auto-advance subscription is keyed by the live [`TimerHandle`],
    /// so replacing the handle replaces the subscription.
    pub fn subscription(&self) -> Subscription<Message> {
        let auto_advance = match self.auto_advance.handle() {
            Some(handle) => time::every(self.auto_advance.interval())
                .with(handle)
                .map(|(handle, at)| Message::Tick { handle, at }),
            None => Subscription::none(),
        };

        let resize = if self.resize.is_pending() {
            time::every(RESIZE_POLL).map(Message::ResizePoll)
        } else {
            Subscription::none()
        };

        Subscription::batch([auto_advance, resize])
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items shown on the current page, in track order.
    #[must_use]
    pub fn visible_items(&self) -> &[T] {
        &self.items[self.layout.page_range(self.current_page)]
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    #[must_use]
    pub fn items_per_page(&self) -> usize {
        self.layout.items_per_page()
    }

    /// Current track translation as a fraction of the track width.
    #[must_use]
    pub fn track_offset(&self) -> f32 {
        self.layout.track_offset(self.current_page)
    }

    /// One indicator per page; exactly one is active.
    #[must_use]
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.layout.page_count())
            .map(|page| Indicator {
                page,
                active: page == self.current_page,
            })
            .collect()
    }

    /// Whether previous/next buttons and indicators are rendered.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.layout.page_count() > 1
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Live auto-advance timers: zero or one.
    #[must_use]
    pub fn live_timers(&self) -> usize {
        self.auto_advance.live_count()
    }

    #[must_use]
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.auto_advance.handle()
    }

    #[must_use]
    pub fn is_resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    fn step(&mut self, delta: isize) {
        let current = isize::try_from(self.current_page).unwrap_or(0);
        self.go_to(current + delta);
    }

    /// Cancels and reschedules auto-advance. Nothing is scheduled while the
    /// pointer hovers, or when there is only one page.
    ///
    /// Arrow and indicator presses happen under the pointer, so manual
    /// navigation from the controls leaves no live timer; the single timer
    /// is re-armed on `PointerLeft`.
    fn reset_auto_advance(&mut self, now: Instant) {
        self.auto_advance.cancel();
        if !self.paused && self.has_controls() {
            self.auto_advance.schedule(now);
        }
    }

    /// Re-paginates a width-dependent carousel and returns to the first
    /// page, even when the breakpoint did not change.
    fn apply_viewport(&mut self, width: f32, now: Instant) {
        if let ItemsPerPage::Fixed(_) = self.items_per_page {
            return;
        }
        let items_per_page = self.items_per_page.resolve(width);

        self.layout = PageLayout::new(self.items.len(), items_per_page);
        tracing::debug!(
            items_per_page,
            page_count = self.layout.page_count(),
            "carousel re-paginated"
        );
        self.go_to(0);
        if !self.has_controls() {
            self.auto_advance.cancel();
        } else if self.auto_advance.handle().is_none() {
            self.reset_auto_advance(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn options(items_per_page: ItemsPerPage) -> CarouselOptions {
        CarouselOptions::new(items_per_page, INTERVAL)
    }

    fn mounted(count: usize, per_page: usize, now: Instant) -> Carousel<usize> {
        Carousel::mount(
            (0..count).collect(),
            options(ItemsPerPage::Fixed(per_page)),
            1280.0,
            now,
        )
        .expect("carousel should mount")
    }

    fn active_count(carousel: &Carousel<usize>) -> usize {
        carousel.indicators().iter().filter(|i| i.active).count()
    }

    #[test]
    fn five_items_one_per_page_wraps_after_last() {
        let start = Instant::now();
        let mut carousel = mounted(5, 1, start);
        assert_eq!(carousel.page_count(), 5);

        carousel.go_to(0);
        for _ in 0..4 {
            carousel.update(Message::Next, start);
        }
        assert_eq!(carousel.current_page(), 4);

        carousel.update(Message::Next, start);
        assert_eq!(carousel.current_page(), 0);
    }

    #[test]
    fn previous_from_first_page_lands_on_last() {
        let start = Instant::now();
        let mut carousel = mounted(7, 2, start);
        carousel.update(Message::Previous, start);
        assert_eq!(carousel.current_page(), 3);
    }

    #[test]
    fn empty_items_do_not_mount() {
        let result = Carousel::<usize>::mount(
            Vec::new(),
            options(ItemsPerPage::Fixed(1)),
            800.0,
            Instant::now(),
        );
        assert_eq!(result.err(), Some(CarouselError::Empty));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let result = Carousel::mount(
            vec![1, 2],
            CarouselOptions::new(ItemsPerPage::Fixed(1), Duration::ZERO),
            800.0,
            Instant::now(),
        );
        assert_eq!(result.err(), Some(CarouselError::ZeroInterval));
    }

    #[test]
    fn failing_renderer_aborts_mount() {
        let raw = vec!["a", "", "c"];
        let result = Carousel::mount_prepared(
            &raw,
            |s: &&str| {
                if s.is_empty() {
                    Err("blank item")
                } else {
                    Ok(s.to_uppercase())
                }
            },
            options(ItemsPerPage::Fixed(1)),
            800.0,
            Instant::now(),
        );
        assert_eq!(
            result.err(),
            Some(CarouselError::Render {
                index: 1,
                reason: "blank item".into()
            })
        );
    }

    #[test]
    fn go_to_is_idempotent() {
        let start = Instant::now();
        let mut carousel = mounted(9, 3, start);

        carousel.go_to(2);
        let once = (carousel.current_page(), carousel.track_offset(), carousel.indicators());
        carousel.go_to(2);
        let twice = (carousel.current_page(), carousel.track_offset(), carousel.indicators());

        assert_eq!(once, twice);
    }

    #[test]
    fn exactly_one_indicator_is_active_after_any_go_to() {
        for page_count in 1..=6 {
            let mut carousel = mounted(page_count, 1, Instant::now());
            for target in -2..=(page_count as isize + 2) {
                carousel.go_to(target);
                assert_eq!(active_count(&carousel), 1, "pages={page_count} target={target}");
                assert!(carousel.indicators()[carousel.current_page()].active);
            }
        }
    }

    #[test]
    fn track_offset_follows_current_page() {
        let start = Instant::now();
        let mut carousel = mounted(8, 2, start);
        carousel.go_to(3);
        assert!((carousel.track_offset() - 0.75).abs() < f32::EPSILON);
        assert_eq!(carousel.visible_items(), &[6, 7]);
    }

    #[test]
    fn manual_navigation_never_leaves_two_timers() {
        let start = Instant::now();
        let mut carousel = mounted(6, 1, start);
        let actions = [
            Message::Next,
            Message::Next,
            Message::Previous,
            Message::SelectPage(4),
            Message::Next,
            Message::SelectPage(0),
        ];

        let mut previous_handle = carousel.timer_handle();
        for (step, action) in actions.into_iter().enumerate() {
            let now = start + Duration::from_millis(100 * step as u64);
            carousel.update(action, now);
            assert_eq!(carousel.live_timers(), 1);
            assert_ne!(carousel.timer_handle(), previous_handle);
            previous_handle = carousel.timer_handle();
        }
    }

    #[test]
    fn manual_navigation_postpones_next_tick() {
        let start = Instant::now();
        let mut carousel = mounted(4, 1, start);
        let stale = carousel.timer_handle().expect("timer scheduled");

        let clicked_at = start + Duration::from_millis(4000);
        carousel.update(Message::Next, clicked_at);
        carousel.update(
            Message::Tick {
                handle: stale,
                at: start + INTERVAL,
            },
            start + INTERVAL,
        );
        assert_eq!(carousel.current_page(), 1, "stale tick must not advance");

        let fresh = carousel.timer_handle().expect("timer rescheduled");
        carousel.update(
            Message::Tick {
                handle: fresh,
                at: clicked_at + INTERVAL,
            },
            clicked_at + INTERVAL,
        );
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn hover_pauses_then_resumes_from_same_page() {
        let start = Instant::now();
        let mut carousel = mounted(5, 1, start);
        carousel.update(Message::Next, start);
        let before_pause = carousel.timer_handle().expect("timer scheduled");

        carousel.update(Message::PointerEntered, start);
        assert!(carousel.is_paused());
        assert_eq!(carousel.live_timers(), 0);

        for n in 1..=3u32 {
            let at = start + INTERVAL * n;
            carousel.update(
                Message::Tick {
                    handle: before_pause,
                    at,
                },
                at,
            );
        }
        assert_eq!(carousel.current_page(), 1, "no advance while paused");

        let left_at = start + INTERVAL * 3;
        carousel.update(Message::PointerLeft, left_at);
        assert_eq!(carousel.live_timers(), 1);
        let resumed = carousel.timer_handle().expect("timer rescheduled");

        let mut advances = 0;
        for ms in (0..=5000).step_by(500) {
            let at = left_at + Duration::from_millis(ms);
            let page = carousel.current_page();
            carousel.update(Message::Tick { handle: resumed, at }, at);
            if carousel.current_page() != page {
                advances += 1;
            }
        }
        assert_eq!(advances, 1);
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn manual_navigation_while_hovered_stays_paused() {
        let start = Instant::now();
        let mut carousel = mounted(3, 1, start);
        carousel.update(Message::PointerEntered, start);
        carousel.update(Message::Next, start);
        assert_eq!(carousel.current_page(), 1);
        assert_eq!(carousel.live_timers(), 0);
    }

    #[test]
    fn hovered_navigation_rearms_one_timer_on_leave() {
        let start = Instant::now();
        let mut carousel = mounted(4, 1, start);
        let mounted_handle = carousel.timer_handle().expect("timer scheduled");

        carousel.update(Message::PointerEntered, start);
        for page in [1, 2] {
            carousel.update(Message::Next, start);
            assert_eq!(carousel.current_page(), page);
            assert_eq!(carousel.live_timers(), 0);
        }
        carousel.update(Message::SelectPage(3), start);
        assert_eq!(carousel.live_timers(), 0);

        let left = start + Duration::from_secs(2);
        carousel.update(Message::PointerLeft, left);
        assert_eq!(carousel.live_timers(), 1);
        let handle = carousel.timer_handle().expect("timer re-armed");
        assert_ne!(handle, mounted_handle);

        carousel.update(
            Message::Tick {
                handle: mounted_handle,
                at: left + INTERVAL,
            },
            left + INTERVAL,
        );
        assert_eq!(carousel.current_page(), 3);
    }

    #[test]
    fn resize_repaginates_after_settle_and_returns_to_first_page() {
        let start = Instant::now();
        let mut carousel = Carousel::mount(
            (0..12).collect::<Vec<_>>(),
            options(ItemsPerPage::slideshow()),
            1280.0,
            start,
        )
        .expect("carousel should mount");
        assert_eq!(carousel.items_per_page(), 4);
        carousel.go_to(2);

        carousel.update(Message::ViewportResized(700.0), start);
        carousel.update(
            Message::ViewportResized(400.0),
            start + Duration::from_millis(100),
        );
        let early = start + Duration::from_millis(300);
        carousel.update(Message::ResizePoll(early), early);
        assert_eq!(carousel.current_page(), 2, "still settling");
        assert_eq!(carousel.items_per_page(), 4);

        let settled = start + Duration::from_millis(400);
        carousel.update(Message::ResizePoll(settled), settled);
        assert_eq!(carousel.items_per_page(), 1);
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.indicators().len(), carousel.page_count());
        assert_eq!(carousel.page_count(), 12);
        assert!(!carousel.is_resize_pending());
    }

    #[test]
    fn resize_within_same_breakpoint_returns_to_first_page() {
        let start = Instant::now();
        let mut carousel = Carousel::mount(
            (0..12).collect::<Vec<_>>(),
            options(ItemsPerPage::slideshow()),
            1280.0,
            start,
        )
        .expect("carousel should mount");
        carousel.go_to(2);

        carousel.update(Message::ViewportResized(1400.0), start);
        let settled = start + Duration::from_secs(1);
        carousel.update(Message::ResizePoll(settled), settled);
        assert_eq!(carousel.items_per_page(), 4);
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.indicators().len(), 3);
        assert_eq!(carousel.live_timers(), 1);
    }

    #[test]
    fn fixed_layout_ignores_settled_resize() {
        let start = Instant::now();
        let mut carousel = mounted(5, 1, start);
        carousel.go_to(3);

        carousel.update(Message::ViewportResized(400.0), start);
        let settled = start + Duration::from_secs(1);
        carousel.update(Message::ResizePoll(settled), settled);
        assert_eq!(carousel.current_page(), 3);
        assert!(!carousel.is_resize_pending());
    }

    #[test]
    fn single_page_has_no_controls_and_no_timer() {
        let carousel = mounted(3, 4, Instant::now());
        assert_eq!(carousel.page_count(), 1);
        assert!(!carousel.has_controls());
        assert_eq!(carousel.live_timers(), 0);
        assert_eq!(carousel.indicators().len(), 1);
    }

    #[test]
    fn shrinking_to_one_page_cancels_timer_and_growing_restarts_it() {
        let start = Instant::now();
        let mut carousel = Carousel::mount(
            (0..4).collect::<Vec<_>>(),
            options(ItemsPerPage::slideshow()),
            400.0,
            start,
        )
        .expect("carousel should mount");
        assert_eq!(carousel.live_timers(), 1);

        carousel.update(Message::ViewportResized(1500.0), start);
        let settled = start + Duration::from_secs(1);
        carousel.update(Message::ResizePoll(settled), settled);
        assert_eq!(carousel.page_count(), 1);
        assert_eq!(carousel.live_timers(), 0);

        carousel.update(Message::ViewportResized(400.0), settled);
        let again = settled + Duration::from_secs(1);
        carousel.update(Message::ResizePoll(again), again);
        assert_eq!(carousel.page_count(), 4);
        assert_eq!(carousel.live_timers(), 1);
    }

    #[test]
    fn teardown_clears_timers_and_ignores_later_events() {
        let start = Instant::now();
        let mut carousel = mounted(4, 1, start);
        let handle = carousel.timer_handle().expect("timer scheduled");
        carousel.update(Message::ViewportResized(300.0), start);

        carousel.teardown();
        assert_eq!(carousel.live_timers(), 0);
        assert!(!carousel.is_resize_pending());

        carousel.update(
            Message::Tick {
                handle,
                at: start + INTERVAL,
            },
            start + INTERVAL,
        );
        carousel.update(Message::Next, start + INTERVAL);
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.live_timers(), 0);

        carousel.teardown();
        assert!(carousel.is_torn_down());
    }
}
