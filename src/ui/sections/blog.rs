// SPDX-License-Identifier: MPL-2.0
//! Blog post list; a post opens in the modal.

use crate::i18n::fluent::I18n;
use crate::site::format::format_date;
use crate::site::BlogPost;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a, M, O>(posts: &'a [BlogPost], i18n: &'a I18n, on_open: O) -> Element<'a, M>
where
    M: Clone + 'a,
    O: Fn(usize) -> M,
{
    let header = super::heading(i18n.tr("blog-title"), None);

    let body: Element<'a, M> = if posts.is_empty() {
        Text::new(i18n.tr("blog-empty")).size(typography::BODY).into()
    } else {
        posts
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::MD), |column, (index, post)| {
                let mut content = Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(post.title.as_str()).size(typography::TITLE_SM))
                    .push(Text::new(meta_line(post)).size(typography::CAPTION));
                if !post.excerpt.is_empty() {
                    content = content.push(Text::new(post.excerpt.as_str()).size(typography::BODY));
                }
                content = content.push(
                    button(Text::new(i18n.tr("blog-read-more")).size(typography::BODY_SM))
                        .on_press(on_open(index))
                        .style(styles::button::link(false)),
                );
                column.push(
                    Container::new(content)
                        .width(Length::Fill)
                        .padding(spacing::MD)
                        .style(styles::container::card),
                )
            })
            .into()
    };

    super::page(header, body)
}

/// Date, followed by the category when the post has one.
fn meta_line(post: &BlogPost) -> String {
    let date = format_date(&post.date);
    let category = post.category_label();
    if category.is_empty() {
        date
    } else {
        format!("{date} · {category}")
    }
}
