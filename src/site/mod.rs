// SPDX-License-Identifier: MPL-2.0
//! Records the visitor creates or reads: testimonials, contact requests and
//! blog posts, plus the text formatting shared by their views.

pub mod blog;
pub mod contact;
pub mod feedback;
pub mod format;

pub use blog::BlogPost;
pub use contact::{ContactForm, ContactRequest};
pub use feedback::{FeedbackForm, RatingInput, Testimonial};

use thiserror::Error;

/// Why a form submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a rating is required")]
    MissingRating,
    #[error("a name is required")]
    MissingName,
    #[error("a message is required")]
    MissingMessage,
    #[error("the email address is not valid")]
    InvalidEmail,
}

impl FormError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FormError::MissingRating => "form-error-rating",
            FormError::MissingName => "form-error-name",
            FormError::MissingMessage => "form-error-message",
            FormError::InvalidEmail => "form-error-email",
        }
    }
}
