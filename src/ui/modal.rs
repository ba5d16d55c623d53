// SPDX-License-Identifier: MPL-2.0
//! Confirmation and reading dialog drawn over the page.
//!
//! The dialog closes from its button, a click on the dimmed backdrop, or
//! Escape (routed by the app subscription).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, scrollable, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Content of an open dialog; strings are already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub body: String,
}

impl Modal {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Body lines, one paragraph each; blank lines are dropped.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&str> {
        self.body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Layers `modal` over `base`.
pub fn view<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    modal: &'a Modal,
    i18n: &'a I18n,
    on_close: M,
) -> Element<'a, M> {
    let body = modal.paragraphs().into_iter().fold(
        Column::new().spacing(spacing::SM),
        |column, paragraph| column.push(Text::new(paragraph).size(typography::BODY)),
    );

    let dialog = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(modal.title.as_str()).size(typography::TITLE_MD))
        .push(scrollable(body).height(Length::Shrink))
        .push(
            Container::new(
                button(Text::new(i18n.tr("modal-close")).size(typography::BODY))
                    .on_press(on_close.clone())
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
        );

    let dialog = Container::new(dialog)
        .max_width(sizing::MODAL_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::dialog);

    let backdrop = Container::new(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop);

    Stack::new()
        .push(base)
        .push(opaque(mouse_area(backdrop).on_press(on_close)))
        .into()
}
