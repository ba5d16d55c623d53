// SPDX-License-Identifier: MPL-2.0
//! Appointment request form.

use crate::i18n::fluent::I18n;
use crate::site::contact::{ContactForm, ContactRequest};
use crate::site::FormError;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::Utc;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::Element;

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    PhoneChanged(String),
    EmailChanged(String),
    ServiceSelected(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submitted(ContactRequest),
}

/// Applies `message` to the form; a valid submission resets it.
pub fn update(form: &mut ContactForm, error: &mut Option<FormError>, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => form.name = value,
        Message::PhoneChanged(value) => form.phone = value,
        Message::EmailChanged(value) => form.email = value,
        Message::ServiceSelected(service) => {
            form.service = if form.service == service {
                String::new()
            } else {
                service
            };
        }
        Message::MessageChanged(value) => form.message = value,
        Message::Submit => {
            return match form.submit(Utc::now()) {
                Ok(request) => {
                    form.reset();
                    *error = None;
                    Event::Submitted(request)
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
    form: &'a ContactForm,
    error: Option<FormError>,
    services: &'a [String],
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let header = super::heading(i18n.tr("contact-title"), Some(i18n.tr("contact-subtitle")));

    let service_row = services
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, service| {
            row.push(
                button(Text::new(service.as_str()).size(typography::BODY_SM))
                    .on_press(Message::ServiceSelected(service.clone()))
                    .style(styles::button::link(*service == form.service)),
            )
        });

    let mut column = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::FORM_WIDTH)
        .push(text_input(&i18n.tr("form-name"), &form.name).on_input(Message::NameChanged))
        .push(text_input(&i18n.tr("contact-phone"), &form.phone).on_input(Message::PhoneChanged))
        .push(text_input(&i18n.tr("form-email"), &form.email).on_input(Message::EmailChanged))
        .push(Text::new(i18n.tr("contact-service")).size(typography::BODY))
        .push(service_row)
        .push(
            text_input(&i18n.tr("contact-message"), &form.message)
                .on_input(Message::MessageChanged)
                .on_submit(Message::Submit),
        );

    if let Some(error) = error {
        column = column.push(
            Container::new(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY_SM))
                .style(styles::container::form_error),
        );
    }

    let body = column
        .push(
            button(Text::new(i18n.tr("contact-submit")))
                .on_press(Message::Submit)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into();
    super::page(header, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_selection_toggles() {
        let mut form = ContactForm::default();
        let mut error = None;
        update(&mut form, &mut error, Message::ServiceSelected("Surgery".into()));
        assert_eq!(form.service, "Surgery");
        update(&mut form, &mut error, Message::ServiceSelected("Surgery".into()));
        assert!(form.service.is_empty());
    }

    #[test]
    fn submit_without_name_keeps_input() {
        let mut form = ContactForm::default();
        let mut error = None;
        update(&mut form, &mut error, Message::PhoneChanged("555".into()));
        let event = update(&mut form, &mut error, Message::Submit);

        assert_eq!(event, Event::None);
        assert_eq!(error, Some(FormError::MissingName));
        assert_eq!(form.phone, "555");
    }

    #[test]
    fn valid_submission_emits_request() {
        let mut form = ContactForm::default();
        let mut error = Some(FormError::MissingName);
        update(&mut form, &mut error, Message::NameChanged("Jane".into()));
        let event = update(&mut form, &mut error, Message::Submit);

        assert!(matches!(event, Event::Submitted(ref r) if r.name == "Jane"));
        assert!(error.is_none());
        assert!(form.name.is_empty());
    }
}
