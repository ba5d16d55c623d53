// SPDX-License-Identifier: MPL-2.0
//! Grid of the latest channel videos.

use crate::carousel::Fallback;
use crate::feeds::youtube::Video;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Videos per grid row.
const COLUMNS: usize = 3;

/// Load state of the video grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum VideoGrid {
    #[default]
    Loading,
    Loaded(Vec<Video>),
    Fallback(Fallback),
}

pub fn view<'a, M, O>(grid: &'a VideoGrid, i18n: &'a I18n, on_open: O) -> Element<'a, M>
where
    M: Clone + 'a,
    O: Fn(String) -> M + Copy + 'a,
{
    let header = super::heading(i18n.tr("videos-title"), Some(i18n.tr("videos-subtitle")));

    let body: Element<'a, M> = match grid {
        VideoGrid::Loading => Text::new(i18n.tr("feed-loading")).size(typography::BODY).into(),
        VideoGrid::Fallback(fallback) => {
            let mut column = Column::new()
                .spacing(spacing::XS)
                .push(Text::new(i18n.tr(fallback.message_key)).size(typography::BODY));
            if let Some(link) = &fallback.link {
                column = column.push(
                    button(Text::new(i18n.tr("feed-visit-profile")).size(typography::BODY))
                        .on_press(on_open(link.clone()))
                        .style(styles::button::link(false)),
                );
            }
            column.into()
        }
        VideoGrid::Loaded(videos) => videos
            .chunks(COLUMNS)
            .fold(Column::new().spacing(spacing::MD), |column, chunk| {
                let mut row = Row::new().spacing(spacing::MD);
                for video in chunk {
                    row = row.push(card(video, i18n, on_open));
                }
                for _ in chunk.len()..COLUMNS {
                    row = row.push(Space::new().width(Length::FillPortion(1)));
                }
                column.push(row)
            })
            .into(),
    };

    super::page(header, body)
}

fn card<'a, M, O>(video: &'a Video, i18n: &'a I18n, on_open: O) -> Element<'a, M>
where
    M: Clone + 'a,
    O: Fn(String) -> M,
{
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("▶").size(typography::TITLE_LG))
        .push(Text::new(video.title.as_str()).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("videos-watch")).size(typography::BODY_SM))
                .on_press(on_open(video.watch_url()))
                .style(styles::button::link(false)),
        );

    Container::new(content)
        .width(Length::FillPortion(1))
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Left)
        .style(styles::container::card)
        .into()
}
