// SPDX-License-Identifier: MPL-2.0
//! Visitor testimonials: the submission form and the public list.

use crate::i18n::fluent::I18n;
use crate::site::feedback::{FeedbackForm, Testimonial, MAX_RATING};
use crate::site::format::{format_date, stars};
use crate::site::FormError;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::Utc;
use iced::widget::{button, mouse_area, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    ConsentToggled,
    StarHovered(u8),
    StarsLeft,
    StarSelected(u8),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submitted(Testimonial),
}

/// Applies `message` to the form; a valid submission resets it.
pub fn update(form: &mut FeedbackForm, error: &mut Option<FormError>, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => form.name = value,
        Message::EmailChanged(value) => form.email = value,
        Message::MessageChanged(value) => form.message = value,
        Message::ConsentToggled => form.consent = !form.consent,
        Message::StarHovered(star) => form.rating.hover(star),
        Message::StarsLeft => form.rating.leave(),
        Message::StarSelected(star) => {
            form.rating.select(star);
            if *error == Some(FormError::MissingRating) {
                *error = None;
            }
        }
        Message::Submit => {
            return match form.submit(Utc::now()) {
                Ok(testimonial) => {
                    form.reset();
                    *error = None;
                    Event::Submitted(testimonial)
                }
                Err(rejected) => {
                    *error = Some(rejected);
                    Event::None
                }
            };
        }
    }
    Event::None
}

pub fn view<'a>(
    form: &'a FeedbackForm,
    error: Option<FormError>,
    testimonials: &'a [Testimonial],
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let header = super::heading(
        i18n.tr("testimonials-title"),
        Some(i18n.tr("testimonials-subtitle")),
    );

    let list: Element<'a, Message> = if testimonials.is_empty() {
        Text::new(i18n.tr("testimonials-empty"))
            .size(typography::BODY)
            .into()
    } else {
        testimonials
            .iter()
            .fold(Column::new().spacing(spacing::MD), |column, t| {
                column.push(testimonial_card(t))
            })
            .into()
    };

    let body = Column::new()
        .spacing(spacing::XL)
        .push(form_view(form, error, i18n))
        .push(list)
        .into();
    super::page(header, body)
}

fn form_view<'a>(
    form: &'a FeedbackForm,
    error: Option<FormError>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let stars = (1..=MAX_RATING).fold(Row::new().spacing(spacing::XXS), |row, star| {
        let star_button = button(Text::new("★").size(typography::TITLE_MD))
            .padding(0.0)
            .on_press(Message::StarSelected(star))
            .style(styles::button::rating_star(form.rating.is_lit(star)));
        row.push(mouse_area(star_button).on_enter(Message::StarHovered(star)))
    });

    let consent_mark = if form.consent { "☑" } else { "☐" };
    let consent = button(
        Row::new()
            .spacing(spacing::XS)
            .push(Text::new(consent_mark))
            .push(Text::new(i18n.tr("feedback-consent")).size(typography::BODY_SM)),
    )
    .on_press(Message::ConsentToggled)
    .style(styles::button::link(false));

    let mut column = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(i18n.tr("feedback-form-title")).size(typography::TITLE_SM))
        .push(
            text_input(&i18n.tr("form-name"), &form.name)
                .on_input(Message::NameChanged)
                .on_submit(Message::Submit),
        )
        .push(text_input(&i18n.tr("form-email"), &form.email).on_input(Message::EmailChanged))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(Text::new(i18n.tr("feedback-rating")).size(typography::BODY))
                .push(mouse_area(stars).on_exit(Message::StarsLeft)),
        )
        .push(
            text_input(&i18n.tr("feedback-message"), &form.message)
                .on_input(Message::MessageChanged),
        )
        .push(consent);

    if let Some(error) = error {
        column = column.push(
            Container::new(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY_SM))
                .style(styles::container::form_error),
        );
    }

    column
        .push(
            button(Text::new(i18n.tr("feedback-submit")))
                .on_press(Message::Submit)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into()
}

fn testimonial_card<'a>(testimonial: &'a Testimonial) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(testimonial.display_name()).size(typography::BODY_LG))
        .push(Text::new(stars(testimonial.rating)).color(palette::STAR))
        .push(Text::new(format_date(&testimonial.date)).size(typography::CAPTION));

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(Text::new(testimonial.message.as_str()).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}
