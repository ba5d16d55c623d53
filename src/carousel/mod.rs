// SPDX-License-Identifier: MPL-2.0
//! Paginated, auto-advancing carousel.
//!
//! One parameterised controller serves every carousel use site. A site
//! supplies its items, an [`ItemsPerPage`] policy and an auto-advance
//! interval; the controller owns the page index, the single auto-advance
//! timer, hover pausing and debounced re-pagination on resize.
//!
//! ```
//! use clinic_showcase::carousel::{Carousel, CarouselOptions, ItemsPerPage, Message};
//! use std::time::{Duration, Instant};
//!
//! let now = Instant::now();
//! let options = CarouselOptions::new(ItemsPerPage::Fixed(1), Duration::from_secs(6));
//! let mut carousel = Carousel::mount(vec!["a", "b", "c"], options, 800.0, now).unwrap();
//!
//! carousel.update(Message::Previous, now);
//! assert_eq!(carousel.current_page(), 2);
//! assert_eq!(carousel.live_timers(), 1);
//! ```

mod controller;
mod paging;
mod slot;
mod timer;
pub mod view;

pub use controller::{
    Carousel, CarouselError, CarouselOptions, Indicator, Message, DEFAULT_RESIZE_SETTLE,
};
pub use paging::{normalize, Breakpoint, ItemsPerPage, PageLayout};
pub use slot::{Fallback, Slot};
pub use timer::{AutoAdvance, Debounce, TimerHandle};
