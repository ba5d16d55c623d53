// SPDX-License-Identifier: MPL-2.0
//! Page arithmetic for the carousel track.
//!
//! Everything here is derived from the item count and the viewport width;
//! nothing is stored beyond what [`PageLayout`] caches for the current
//! breakpoint.

use std::ops::Range;

/// Normalizes a requested page index by wraparound.
///
/// Stepping before the first page lands on the last one, stepping past the
/// last page lands on the first one. Indices already in range are returned
/// unchanged. A `page_count` of zero is treated as a single page.
///
/// ```
/// use clinic_showcase::carousel::normalize;
///
/// assert_eq!(normalize(-1, 5), 4);
/// assert_eq!(normalize(5, 5), 0);
/// assert_eq!(normalize(3, 5), 3);
/// ```
#[must_use]
pub fn normalize(page: isize, page_count: usize) -> usize {
    let last = page_count.max(1) - 1;
    if page < 0 {
        last
    } else if page.unsigned_abs() > last {
        0
    } else {
        page.unsigned_abs()
    }
}

/// Upper width bound (inclusive) paired with the items shown at or below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub max_width: f32,
    pub items: usize,
}

/// Items-per-page policy: a step function of the viewport width.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsPerPage {
    /// Same count at every width.
    Fixed(usize),
    /// First breakpoint whose `max_width` is not exceeded wins; `otherwise`
    /// applies above the widest one.
    Stepped {
        breakpoints: Vec<Breakpoint>,
        otherwise: usize,
    },
}

impl ItemsPerPage {
    /// Builds a stepped policy from `(max_width, items)` pairs.
    ///
    /// Pairs are sorted by width so callers can list them in any order.
    #[must_use]
    pub fn stepped(steps: &[(f32, usize)], otherwise: usize) -> Self {
        let mut breakpoints: Vec<Breakpoint> = steps
            .iter()
            .map(|&(max_width, items)| Breakpoint { max_width, items })
            .collect();
        breakpoints.sort_by(|a, b| a.max_width.total_cmp(&b.max_width));
        Self::Stepped {
            breakpoints,
            otherwise,
        }
    }

    /// Policy of the photo slideshow: 1, 2, 3 or 4 slides per page.
    #[must_use]
    pub fn slideshow() -> Self {
        Self::stepped(&[(480.0, 1), (768.0, 2), (1024.0, 3)], 4)
    }

    /// Number of items shown together at `viewport_width`, never below one.
    #[must_use]
    pub fn resolve(&self, viewport_width: f32) -> usize {
        let items = match self {
            Self::Fixed(items) => *items,
            Self::Stepped {
                breakpoints,
                otherwise,
            } => breakpoints
                .iter()
                .find(|bp| viewport_width <= bp.max_width)
                .map_or(*otherwise, |bp| bp.items),
        };
        items.max(1)
    }
}

/// Derived pagination for a fixed item count at one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    item_count: usize,
    items_per_page: usize,
    page_count: usize,
}

impl PageLayout {
    #[must_use]
    pub fn new(item_count: usize, items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        Self {
            item_count,
            items_per_page,
            page_count: item_count.div_ceil(items_per_page).max(1),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Item indices shown on `page`. The last page may be partial.
    #[must_use]
    pub fn page_range(&self, page: usize) -> Range<usize> {
        let start = (page * self.items_per_page).min(self.item_count);
        let end = (start + self.items_per_page).min(self.item_count);
        start..end
    }

    /// Horizontal track translation for `page`, as a fraction of the
    /// track's full width (`page * items_per_page / item_count`).
    #[must_use]
    pub fn track_offset(&self, page: usize) -> f32 {
        if self.item_count == 0 {
            return 0.0;
        }
        (page * self.items_per_page) as f32 / self.item_count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_stays_in_range_for_every_page_count() {
        for page_count in 1..=12usize {
            for page in -3isize..=(page_count as isize + 3) {
                let normalized = normalize(page, page_count);
                assert!(
                    normalized < page_count,
                    "normalize({page}, {page_count}) = {normalized}"
                );
            }
        }
    }

    #[test]
    fn normalize_wraps_both_ends() {
        assert_eq!(normalize(-1, 7), 6);
        assert_eq!(normalize(7, 7), 0);
        assert_eq!(normalize(-1, 1), 0);
        assert_eq!(normalize(1, 1), 0);
    }

    #[test]
    fn normalize_treats_zero_pages_as_one() {
        assert_eq!(normalize(3, 0), 0);
        assert_eq!(normalize(-2, 0), 0);
    }

    #[test]
    fn slideshow_policy_steps_at_breakpoints() {
        let policy = ItemsPerPage::slideshow();
        assert_eq!(policy.resolve(320.0), 1);
        assert_eq!(policy.resolve(480.0), 1);
        assert_eq!(policy.resolve(481.0), 2);
        assert_eq!(policy.resolve(768.0), 2);
        assert_eq!(policy.resolve(1000.0), 3);
        assert_eq!(policy.resolve(1024.0), 3);
        assert_eq!(policy.resolve(1920.0), 4);
    }

    #[test]
    fn stepped_policy_sorts_unordered_steps() {
        let policy = ItemsPerPage::stepped(&[(900.0, 3), (300.0, 1)], 5);
        assert_eq!(policy.resolve(200.0), 1);
        assert_eq!(policy.resolve(600.0), 3);
        assert_eq!(policy.resolve(901.0), 5);
    }

    #[test]
    fn fixed_zero_is_raised_to_one() {
        assert_eq!(ItemsPerPage::Fixed(0).resolve(800.0), 1);
    }

    #[test]
    fn layout_rounds_page_count_up() {
        let layout = PageLayout::new(10, 4);
        assert_eq!(layout.page_count(), 3);
        assert_eq!(layout.page_range(2), 8..10);
    }

    #[test]
    fn layout_offset_moves_one_page_width_per_page() {
        let layout = PageLayout::new(8, 2);
        assert!((layout.track_offset(0) - 0.0).abs() < f32::EPSILON);
        assert!((layout.track_offset(1) - 0.25).abs() < f32::EPSILON);
        assert!((layout.track_offset(3) - 0.75).abs() < f32::EPSILON);
    }
}
