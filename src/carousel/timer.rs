// SPDX-License-Identifier: MPL-2.0
//! Deferred-callback bookkeeping for the carousel.
//!
//! [`AutoAdvance`] tracks the single repeating tick of one controller. Each
//! scheduling produces a fresh [`TimerHandle`]; the runtime subscription is
//! keyed by that handle, so rescheduling replaces the subscription and any
//! tick still in flight for an older handle is ignored.
//!
//! [`Debounce`] holds the latest value of a rapidly repeating event until it
//! has stopped changing for a settle period.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Ticks delivered this early are still accepted; subscription timers and
/// the controller clock are read at slightly different moments.
const TICK_TOLERANCE: Duration = Duration::from_millis(20);

/// Identity of one scheduled auto-advance timer.
///
/// Handles are unique across every controller in the process, so two
/// carousels with the same interval never share a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    handle: TimerHandle,
    due: Instant,
}

/// The repeating auto-advance timer of one controller.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    active: Option<Scheduled>,
}

impl AutoAdvance {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancels any live timer, then schedules a new one due one interval
    /// after `now`.
    pub fn schedule(&mut self, now: Instant) -> TimerHandle {
        self.cancel();
        let handle = TimerHandle::next();
        self.active = Some(Scheduled {
            handle,
            due: now + self.interval,
        });
        handle
    }

    /// Cancels the live timer. Cancelling with nothing scheduled is a no-op.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.active.take().map(|scheduled| scheduled.handle)
    }

    /// Handle of the live timer, if any.
    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.active.map(|scheduled| scheduled.handle)
    }

    /// Number of live timers: zero or one.
    #[must_use]
    pub fn live_count(&self) -> usize {
        usize::from(self.active.is_some())
    }

    /// Consumes a tick delivered for `handle` at `now`.
    ///
    /// Returns `true` when the tick belongs to the live timer and the timer
    /// was due; the next due instant then moves one interval on. Stale
    /// handles and early deliveries return `false`.
    pub fn fire(&mut self, handle: TimerHandle, now: Instant) -> bool {
        let Some(scheduled) = self.active.as_mut() else {
            return false;
        };
        if scheduled.handle != handle || now + TICK_TOLERANCE < scheduled.due {
            return false;
        }
        let next = scheduled.due + self.interval;
        // A long stall (suspended process) must not turn into a burst of ticks.
        scheduled.due = if next + TICK_TOLERANCE < now {
            now + self.interval
        } else {
            next
        };
        true
    }
}

/// Holds the most recent value until input settles.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    settle: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    #[must_use]
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            pending: None,
        }
    }

    /// Records `value`, replacing any pending one and restarting the settle
    /// period from `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.settle));
    }

    /// Releases the pending value once its settle deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let settled = matches!(&self.pending, Some((_, deadline)) if *deadline <= now);
        if settled {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
