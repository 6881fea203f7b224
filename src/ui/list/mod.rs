// SPDX-License-Identifier: MPL-2.0
//! List screen: one row per entry with a thumbnail and a title.
//!
//! Thumbnails are fetched once at startup through the same download pipeline
//! as the detail screen, then downscaled. A row whose address does not parse
//! shows a placeholder and cannot be opened.

use crate::config::defaults::THUMBNAIL_MAX_EDGE;
use crate::domain::row::{Row, RowList};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{fetch_image, parse_url, DecodeTarget, ImageData};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, text, Column, Container, Row as RowWidget, Scrollable, Text};
use iced::{alignment, Element, Length, Task, Theme};
use reqwest::Url;

/// Address of the image shown in the row's cell, if it parses.
#[must_use]
pub fn thumbnail_url(row: &Row) -> Option<Url> {
    parse_url(row.thumbnail_source()).ok()
}

/// Address of the full-resolution image, for zoomable rows whose URL parses.
#[must_use]
pub fn full_url(row: &Row) -> Option<Url> {
    row.full_resolution_source()
        .and_then(|raw| parse_url(raw).ok())
}

#[must_use]
pub fn is_navigable(row: &Row) -> bool {
    full_url(row).is_some()
}

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Loaded(image::Handle),
    /// The row has no usable address.
    Missing,
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    RowSelected(usize),
}

/// Side effects the application should perform after a list message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenDetail { title: String, url: Url },
    ThumbnailFailed { title: String },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    rows: RowList,
    thumbnails: Vec<Thumbnail>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(RowList::builtin())
    }
}

impl State {
    #[must_use]
    pub fn new(rows: RowList) -> Self {
        let thumbnails = rows
            .iter()
            .map(|row| {
                if thumbnail_url(row).is_some() {
                    Thumbnail::Loading
                } else {
                    Thumbnail::Missing
                }
            })
            .collect();
        Self { rows, thumbnails }
    }

    /// Starts one thumbnail download per row with a valid address.
    pub fn load_thumbnails(&self, client: &reqwest::Client) -> Task<Message> {
        let tasks = self.rows.iter().enumerate().filter_map(|(index, row)| {
            let Some(url) = thumbnail_url(row) else {
                tracing::warn!(title = row.title(), "row has no valid thumbnail address");
                return None;
            };
            let client = client.clone();
            Some(Task::perform(
                fetch_image(client, url, DecodeTarget::Thumbnail(THUMBNAIL_MAX_EDGE)),
                move |result| Message::ThumbnailLoaded { index, result },
            ))
        });
        Task::batch(tasks)
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::ThumbnailLoaded { index, result } => {
                let Some(slot) = self.thumbnails.get_mut(index) else {
                    return Effect::None;
                };
                let title = self.rows.row_at(index).title().to_string();
                match result {
                    Ok(image) => {
                        tracing::debug!(%title, width = image.width, height = image.height, "thumbnail loaded");
                        *slot = Thumbnail::Loaded(image.handle);
                        Effect::None
                    }
                    Err(error) => {
                        tracing::warn!(%title, %error, "thumbnail failed");
                        *slot = Thumbnail::Failed;
                        Effect::ThumbnailFailed { title }
                    }
                }
            }
            Message::RowSelected(index) => {
                if index >= self.rows.count() {
                    return Effect::None;
                }
                let row = self.rows.row_at(index);
                match full_url(row) {
                    Some(url) => Effect::OpenDetail {
                        title: row.title().to_string(),
                        url,
                    },
                    None => Effect::None,
                }
            }
        }
    }

    #[must_use]
    pub fn rows(&self) -> &RowList {
        &self.rows
    }

    #[must_use]
    pub fn thumbnail(&self, index: usize) -> Option<&Thumbnail> {
        self.thumbnails.get(index)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Container::new(Text::new(ctx.i18n.tr("list-title")).size(typography::TITLE_MD))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::toolbar);

        let rows = self
            .rows
            .iter()
            .zip(&self.thumbnails)
            .enumerate()
            .map(|(index, (row, thumbnail))| view_row(ctx.i18n, index, row, thumbnail));

        let list = Column::with_children(rows)
            .spacing(spacing::XS)
            .padding(spacing::SM)
            .width(Length::Fill);

        Column::new()
            .push(header)
            .push(Scrollable::new(list).width(Length::Fill).height(Length::Fill))
            .into()
    }
}

fn view_row<'a>(
    i18n: &I18n,
    index: usize,
    row: &'a Row,
    thumbnail: &'a Thumbnail,
) -> Element<'a, Message> {
    let cell: Element<'a, Message> = match thumbnail {
        Thumbnail::Loaded(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .into(),
        Thumbnail::Loading => placeholder(i18n.tr("list-thumbnail-loading")),
        Thumbnail::Missing | Thumbnail::Failed => placeholder(i18n.tr("list-thumbnail-missing")),
    };

    let navigable = is_navigable(row);
    let subtitle = if navigable {
        i18n.tr("list-row-zoomable")
    } else {
        i18n.tr("list-row-static")
    };

    let labels = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(row.title()).size(typography::BODY))
        .push(
            Text::new(subtitle)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );

    let content = RowWidget::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(cell)
        .push(labels);

    button(content)
        .width(Length::Fill)
        .padding(spacing::XS)
        .on_press_maybe(navigable.then_some(Message::RowSelected(index)))
        .style(styles::button::ghost)
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::thumbnail_placeholder)
        .into()
}
