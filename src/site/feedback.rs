// SPDX-License-Identifier: MPL-2.0
//! Visitor testimonials and the star rating input.

use super::format::{is_valid_email, plain_text};
use super::FormError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest selectable rating.
pub const MAX_RATING: u8 = 5;

/// A submitted testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Milliseconds since the Unix epoch at submission.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub message: String,
    /// Only consented testimonials are shown publicly.
    pub consent: bool,
    pub date: DateTime<Utc>,
}

impl Testimonial {
    /// Public display name: initials such as `J.D.`.
    #[must_use]
    pub fn display_name(&self) -> String {
        initials(&self.name)
    }
}

/// First letter of every word, upper-cased, each followed by a dot.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: Vec<String> = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_uppercase().collect())
        .collect();
    if letters.is_empty() {
        return String::new();
    }
    format!("{}.", letters.join("."))
}

/// Star rating picker with hover preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingInput {
    committed: Option<u8>,
    hovered: Option<u8>,
}

impl RatingInput {
    /// Previews `star` while the pointer is over it.
    pub fn hover(&mut self, star: u8) {
        self.hovered = Some(star.clamp(1, MAX_RATING));
    }

    /// Drops the preview, showing the committed value again.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn select(&mut self, star: u8) {
        self.committed = Some(star.clamp(1, MAX_RATING));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn value(&self) -> Option<u8> {
        self.committed
    }

    /// Whether `star` (1-based) is drawn lit.
    #[must_use]
    pub fn is_lit(&self, star: u8) -> bool {
        self.hovered
            .or(self.committed)
            .is_some_and(|shown| star <= shown)
    }
}

/// Editable state of the testimonial form.
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub consent: bool,
    pub rating: RatingInput,
}

impl FeedbackForm {
    /// Validates the form into a [`Testimonial`] stamped with `now`.
    ///
    /// # Errors
    ///
    /// The rating is checked first; then the name, the message and the
    /// email shape when one is given.
    pub fn submit(&self, now: DateTime<Utc>) -> Result<Testimonial, FormError> {
        let rating = self.rating.value().ok_or(FormError::MissingRating)?;
        let name = plain_text(self.name.trim());
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let message = plain_text(self.message.trim());
        if message.is_empty() {
            return Err(FormError::MissingMessage);
        }
        let email = self.email.trim().to_string();
        if !email.is_empty() && !is_valid_email(&email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(Testimonial {
            id: now.timestamp_millis(),
            name,
            email,
            rating,
            message,
            consent: self.consent,
            date: now,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Consented testimonials, in stored order.
pub fn public(testimonials: &[Testimonial]) -> Vec<Testimonial> {
    testimonials.iter().filter(|t| t.consent).cloned().collect()
}
