// SPDX-License-Identifier: MPL-2.0
//! Photo slideshow: several posts per page depending on window width.

use crate::carousel::{self, Slot};
use crate::feeds::instagram::Post;
use crate::i18n::fluent::I18n;
use crate::site::format::format_date;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, M, L, O>(
    slot: &'a Slot<Post>,
    i18n: &'a I18n,
    lift: L,
    on_open: O,
) -> Element<'a, M>
where
    M: Clone + 'a,
    L: Fn(carousel::Message) -> M + Copy + 'a,
    O: Fn(String) -> M + Copy + 'a,
{
    let header = super::heading(i18n.tr("gallery-title"), Some(i18n.tr("gallery-subtitle")));
    let slideshow = carousel::view::view(slot, i18n, move |post| slide(post, i18n, on_open), lift);
    super::page(header, slideshow)
}

fn slide<'a, M, O>(post: &'a Post, i18n: &'a I18n, on_open: O) -> Element<'a, M>
where
    M: Clone + 'a,
    O: Fn(String) -> M,
{
    let mut top = Row::new().align_y(alignment::Vertical::Center);
    if let Some(date) = post.timestamp.as_ref() {
        top = top.push(Text::new(format_date(date)).size(typography::CAPTION));
    }
    top = top.push(Space::new().width(Length::Fill));
    if let Some(badge) = post.kind.badge() {
        top = top.push(
            Container::new(Text::new(badge).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge),
        );
    }

    let mut content = Column::new().spacing(spacing::SM).push(top);
    if let Some(caption) = post.short_caption() {
        content = content.push(Text::new(caption).size(typography::BODY));
    }
    content = content.push(Space::new().height(Length::Fill)).push(
        button(Text::new(i18n.tr("gallery-open-post")).size(typography::BODY_SM))
            .on_press(on_open(post.permalink.clone()))
            .style(styles::button::link(false)),
    );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(220.0))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
