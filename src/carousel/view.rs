// SPDX-License-Identifier: MPL-2.0
//! Rendering of a carousel slot.
//!
//! Items are drawn by a caller-supplied renderer; this module only lays out
//! the track, the previous/next arrows and the indicator row, and wraps the
//! whole thing in a hover area that pauses auto-advance.

use super::controller::{Carousel, Message};
use super::slot::{Fallback, Slot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, text, tooltip, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

/// Renders `slot`, lifting carousel events into the caller's message type.
pub fn view<'a, T, M, R, L>(
    slot: &'a Slot<T>,
    i18n: &'a I18n,
    render: R,
    lift: L,
) -> Element<'a, M>
where
    M: Clone + 'a,
    R: Fn(&'a T) -> Element<'a, M>,
    L: Fn(Message) -> M + Copy + 'a,
{
    match slot {
        Slot::Loading => text(i18n.tr("feed-loading"))
            .size(typography::BODY)
            .into(),
        Slot::Fallback(fallback) => view_fallback(fallback, i18n, lift),
        Slot::Ready(carousel) => view_carousel(carousel, i18n, render, lift),
    }
}

fn view_fallback<'a, M, L>(fallback: &'a Fallback, i18n: &'a I18n, lift: L) -> Element<'a, M>
where
    M: Clone + 'a,
    L: Fn(Message) -> M + Copy + 'a,
{
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr(fallback.message_key)).size(typography::BODY));

    if fallback.link.is_some() {
        column = column.push(
            button(text(i18n.tr("feed-visit-profile")).size(typography::BODY))
                .on_press(lift(Message::FallbackLinkPressed))
                .style(styles::button::link(false)),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn view_carousel<'a, T, M, R, L>(
    carousel: &'a Carousel<T>,
    i18n: &'a I18n,
    render: R,
    lift: L,
) -> Element<'a, M>
where
    M: Clone + 'a,
    R: Fn(&'a T) -> Element<'a, M>,
    L: Fn(Message) -> M + Copy + 'a,
{
    let visible = carousel.visible_items();
    let mut track = Row::new().spacing(spacing::MD).width(Length::Fill);
    for item in visible {
        track = track.push(Container::new(render(item)).width(Length::FillPortion(1)));
    }
    // Keep slide widths stable on a partial last page.
    for _ in visible.len()..carousel.items_per_page() {
        track = track.push(Space::new().width(Length::FillPortion(1)));
    }

    let content: Element<'a, M> = if carousel.has_controls() {
        let arrows = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(nav_button("‹", lift(Message::Previous)))
            .push(track)
            .push(nav_button("›", lift(Message::Next)));

        let indicators = carousel.indicators().into_iter().fold(
            Row::new().spacing(spacing::XS),
            |row, indicator| {
                let page = (indicator.page + 1).to_string();
                let dot = button(Space::new().width(sizing::INDICATOR).height(sizing::INDICATOR))
                    .padding(0.0)
                    .on_press(lift(Message::SelectPage(indicator.page)))
                    .style(styles::button::indicator(indicator.active));
                row.push(tooltip(
                    dot,
                    text(i18n.tr_with_args("carousel-go-to-page", &[("page", page.as_str())]))
                        .size(typography::CAPTION),
                    tooltip::Position::Bottom,
                ))
            },
        );

        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(arrows)
            .push(indicators)
            .into()
    } else {
        track.into()
    };

    mouse_area(content)
        .on_enter(lift(Message::PointerEntered))
        .on_exit(lift(Message::PointerLeft))
        .into()
}

fn nav_button<'a, M: Clone + 'a>(glyph: &'a str, on_press: M) -> Element<'a, M> {
    button(text(glyph).size(typography::TITLE_MD))
        .padding([0.0, spacing::SM])
        .height(sizing::NAV_BUTTON)
        .on_press(on_press)
        .style(styles::button::carousel_nav)
        .into()
}
