// SPDX-License-Identifier: MPL-2.0
//! Review slider: one review per page with the aggregate rating badge.

use crate::carousel::{self, Slot};
use crate::feeds::reviews::{RatingSummary, Review};
use crate::i18n::fluent::I18n;
use crate::site::format::{badge_stars, format_rating, plain_text, stars};
use crate::site::feedback::MAX_RATING;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use thiserror::Error;

/// A review ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub author: String,
    pub avatar_letter: String,
    pub relative_time: String,
    pub stars: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u32),
}

impl ReviewCard {
    /// Builds the card for `review`.
    ///
    /// # Errors
    ///
    /// Fails on a rating the star row cannot show.
    pub fn prepare(review: &Review) -> Result<Self, CardError> {
        let rating = u8::try_from(review.rating)
            .ok()
            .filter(|r| (1..=MAX_RATING).contains(r))
            .ok_or(CardError::RatingOutOfRange(review.rating))?;

        Ok(Self {
            author: plain_text(&review.author),
            avatar_letter: review.avatar_letter().to_uppercase(),
            relative_time: plain_text(&review.relative_time),
            stars: stars(rating),
            text: plain_text(&review.text),
        })
    }
}

pub fn view<'a, M, L>(
    slot: &'a Slot<ReviewCard>,
    summary: Option<&'a RatingSummary>,
    i18n: &'a I18n,
    lift: L,
) -> Element<'a, M>
where
    M: Clone + 'a,
    L: Fn(carousel::Message) -> M + Copy + 'a,
{
    let mut header = super::heading(
        i18n.tr("reviews-title"),
        Some(i18n.tr("reviews-subtitle")),
    );
    if let Some(summary) = summary {
        header = header.push(badge(summary, i18n));
    }

    let slider = carousel::view::view(slot, i18n, card, lift);
    super::page(header, slider)
}

fn badge<'a, M: 'a>(summary: &RatingSummary, i18n: &I18n) -> Element<'a, M> {
    let count = summary.count.to_string();
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(format_rating(summary.rating)).size(typography::BODY_LG))
        .push(
            Text::new(badge_stars(summary.rating))
                .size(typography::BODY_LG)
                .color(palette::STAR),
        )
        .push(
            Text::new(i18n.tr_with_args("reviews-count", &[("count", count.as_str())]))
                .size(typography::BODY_SM),
        );

    Container::new(row)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge)
        .into()
}

fn card<'a, M: 'a>(review: &'a ReviewCard) -> Element<'a, M> {
    let avatar = Container::new(Text::new(review.avatar_letter.as_str()).size(typography::TITLE_SM))
        .width(sizing::AVATAR)
        .height(sizing::AVATAR)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::badge);

    let author = Column::new()
        .push(Text::new(review.author.as_str()).size(typography::BODY_LG))
        .push(Text::new(review.relative_time.as_str()).size(typography::CAPTION));

    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(avatar)
                .push(author),
        )
        .push(Text::new(review.stars.as_str()).color(palette::STAR));
    if !review.text.is_empty() {
        content = content.push(Text::new(review.text.as_str()).size(typography::BODY));
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
