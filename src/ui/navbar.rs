// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for section navigation.
//!
//! Wide windows show every section inline. Below
//! [`sizing::NAVBAR_COLLAPSE_WIDTH`] the links fold into a menu that closes
//! again as soon as a section is chosen.

use crate::app::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    pub menu_open: bool,
    pub viewport_width: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Select(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Selected(Section),
}

/// Whether the links fold into the menu at `viewport_width`.
#[must_use]
pub fn is_collapsed(viewport_width: f32) -> bool {
    viewport_width <= sizing::NAVBAR_COLLAPSE_WIDTH
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Select(section) => {
            *menu_open = false;
            Event::Selected(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);
    let mut top = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    let collapsed = is_collapsed(ctx.viewport_width);
    if collapsed {
        top = top.push(
            button(Text::new("☰").size(typography::TITLE_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::navbar_link(ctx.menu_open)),
        );
    } else {
        top = Section::ALL
            .into_iter()
            .fold(top, |row, section| row.push(link(&ctx, section)));
    }

    let mut content = Column::new().width(Length::Fill).push(top);
    if collapsed && ctx.menu_open {
        let menu = Section::ALL
            .into_iter()
            .fold(Column::new().spacing(spacing::XXS), |column, section| {
                column.push(link(&ctx, section))
            });
        content = content.push(Container::new(menu).padding([0.0, spacing::SM]));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn link<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
        .on_press(Message::Select(section))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::navbar_link(section == ctx.active))
        .into()
}
