// SPDX-License-Identifier: MPL-2.0
//! One view module per page section.

pub mod blog;
pub mod contact;
pub mod gallery;
pub mod reviews;
pub mod testimonials;
pub mod videos;

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

/// Section heading with optional lead text.
fn heading<'a, M: 'a>(title: String, lead: Option<String>) -> Column<'a, M> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_LG));
    match lead {
        Some(lead) => column.push(Text::new(lead).size(typography::BODY_LG)),
        None => column,
    }
}

/// Wraps section content with its heading and page padding.
fn page<'a, M: 'a>(header: Column<'a, M>, body: Element<'a, M>) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(body)
        .into()
}
