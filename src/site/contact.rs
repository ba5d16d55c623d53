// SPDX-License-Identifier: MPL-2.0
//! Appointment requests and their hand-off to a messaging app.

use super::format::{is_valid_email, plain_text};
use super::FormError;
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};

const HANDOFF_BASE: &str = "https://wa.me/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
    pub date: DateTime<Utc>,
}

impl ContactRequest {
    /// Formats the request as a chat message, empty fields left out.
    #[must_use]
    pub fn to_chat_text(&self) -> String {
        let mut lines = vec![
            "*New Appointment Request*".to_string(),
            String::new(),
            format!("*Name:* {}", self.name),
        ];
        for (label, value) in [
            ("Phone", &self.phone),
            ("Email", &self.email),
            ("Service", &self.service),
        ] {
            if !value.is_empty() {
                lines.push(format!("*{label}:* {value}"));
            }
        }
        if !self.message.is_empty() {
            lines.push(String::new());
            lines.push("*Message:*".to_string());
            lines.push(self.message.clone());
        }
        lines.join("\n")
    }

    /// Builds the `wa.me` link that opens a chat with `number` prefilled.
    ///
    /// Non-digit characters of `number` are ignored. Returns `None` when
    /// no digits remain. The text is percent-encoded, spaces as `%20`.
    #[must_use]
    pub fn handoff_url(&self, number: &str) -> Option<Url> {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let text = urlencoding::encode(&self.to_chat_text()).into_owned();
        Url::parse(&format!("{HANDOFF_BASE}{digits}?text={text}")).ok()
    }
}

/// Editable state of the appointment form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// Validates the form into a [`ContactRequest`] stamped with `now`.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingName`] for a blank name and
    /// [`FormError::InvalidEmail`] for a malformed address.
    pub fn submit(&self, now: DateTime<Utc>) -> Result<ContactRequest, FormError> {
        let name = plain_text(self.name.trim());
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim().to_string();
        if !email.is_empty() && !is_valid_email(&email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(ContactRequest {
            name,
            phone: plain_text(self.phone.trim()),
            email,
            service: plain_text(self.service.trim()),
            message: plain_text(self.message.trim()),
            date: now,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".to_string(),
            phone: "+1 555 0100".to_string(),
            email: String::new(),
            service: "Physiotherapy".to_string(),
            message: "Mornings work best.".to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn chat_text_skips_empty_fields() {
        assert_eq!(
            request().to_chat_text(),
            "*New Appointment Request*\n\n*Name:* Jane Doe\n*Phone:* +1 555 0100\n\
             *Service:* Physiotherapy\n\n*Message:*\nMornings work best."
        );
    }

    #[test]
    fn chat_text_without_message_has_no_trailer() {
        let mut request = request();
        request.message.clear();
        assert!(request.to_chat_text().ends_with("*Service:* Physiotherapy"));
    }

    #[test]
    fn handoff_url_targets_digits_and_encodes_text() {
        let url = request().handoff_url("+1 (555) 010-0199").expect("url");

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/15550100199");
        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned());
        assert_eq!(text, Some(request().to_chat_text()));
    }

    #[test]
    fn handoff_url_encodes_spaces_as_percent_twenty() {
        let url = request().handoff_url("5550100").expect("url");
        let query = url.query().expect("query");

        assert!(query.starts_with("text=%2ANew%20Appointment%20Request%2A%0A"));
        assert!(!query.contains('+'));
        assert!(query.contains("Jane%20Doe"));
    }

    #[test]
    fn handoff_url_needs_a_number() {
        assert!(request().handoff_url("n/a").is_none());
    }

    #[test]
    fn form_requires_name_and_valid_email() {
        let mut form = ContactForm {
            email: "jane@clinic.example".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(form.submit(Utc::now()).unwrap_err(), FormError::MissingName);

        form.name = "Jane".to_string();
        form.email = "jane@".to_string();
        assert_eq!(form.submit(Utc::now()).unwrap_err(), FormError::InvalidEmail);

        form.email.clear();
        let request = form.submit(Utc::now()).expect("valid");
        assert_eq!(request.name, "Jane");
        assert!(request.phone.is_empty());
    }
}
