// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top, the active section scrolls below it and the
//! open dialog, if any, is stacked over both.

use super::{App, Message, Section};
use crate::ui::modal;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections::{blog, contact, gallery, reviews, testimonials, videos};
use iced::widget::{scrollable, Column, Container};
use iced::{Element, Length};

/// Renders the whole window.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        active: app.section,
        menu_open: app.menu_open,
        viewport_width: app.viewport_width,
    })
    .map(Message::Navbar);

    let content = Column::new()
        .push(navbar)
        .push(
            scrollable(
                Container::new(view_section(app))
                    .width(Length::Fill)
                    .center_x(Length::Fill),
            )
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let base: Element<'_, Message> = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    match &app.modal {
        Some(dialog) => modal::view(base, dialog, &app.i18n, Message::CloseModal),
        None => base,
    }
}

fn view_section(app: &App) -> Element<'_, Message> {
    match app.section {
        Section::Reviews => reviews::view(
            &app.reviews,
            app.rating_summary.as_ref(),
            &app.i18n,
            Message::Reviews,
        ),
        Section::Gallery => gallery::view(&app.gallery, &app.i18n, Message::Gallery, Message::CopyLink),
        Section::Videos => videos::view(&app.videos, &app.i18n, Message::CopyLink),
        Section::Testimonials => testimonials::view(
            &app.feedback,
            app.feedback_error,
            &app.testimonials,
            &app.i18n,
        )
        .map(Message::Testimonials),
        Section::Contact => contact::view(
            &app.contact,
            app.contact_error,
            &app.config.contact.services,
            &app.i18n,
        )
        .map(Message::Contact),
        Section::Blog => blog::view(&app.blogs, &app.i18n, Message::OpenBlogPost),
    }
}
