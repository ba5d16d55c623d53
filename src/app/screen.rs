// SPDX-License-Identifier: MPL-2.0
//! Page sections reachable from the navbar.

/// Sections of the showcase, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Reviews,
    Gallery,
    Videos,
    Testimonials,
    Contact,
    Blog,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Reviews,
        Section::Gallery,
        Section::Videos,
        Section::Testimonials,
        Section::Contact,
        Section::Blog,
    ];

    /// i18n key of the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Reviews => "section-reviews",
            Section::Gallery => "section-gallery",
            Section::Videos => "section-videos",
            Section::Testimonials => "section-testimonials",
            Section::Contact => "section-contact",
            Section::Blog => "section-blog",
        }
    }
}
