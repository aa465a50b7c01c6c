// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for the currently visible items.
//!
//! Cells wrap to the window width and scroll vertically. Every visible item
//! gets a cell regardless of whether its thumbnail decoded yet; cells whose
//! image failed to load show a marked placeholder but remain clickable.

use crate::gallery::{Item, ItemId};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Scrollable, Text},
    Border, ContentFit, Element, Length, Theme,
};
use std::collections::HashMap;

/// Load state of one thumbnail cell.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Decode task is still running.
    Loading,
    /// Decoded and ready to draw.
    Ready(ImageData),
    /// The file could not be read or decoded; the cell stays visible.
    Unavailable,
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Items matching the current filter, in collection order.
    pub visible: Vec<&'a Item>,
    /// Per-item thumbnail load state, keyed by item id.
    pub thumbnails: &'a HashMap<ItemId, ThumbnailState>,
    /// Edge length of a square cell, already clamped by the caller.
    pub cell_size: f32,
}

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A cell was pressed and the lightbox should open on this item.
    ItemPressed(ItemId),
}

/// Render the thumbnail grid, or the empty hint when nothing matches.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.visible.is_empty() {
        return build_empty_hint(ctx.i18n);
    }

    let mut cells = Row::new().spacing(spacing::SM);
    for &item in &ctx.visible {
        cells = cells.push(build_cell(&ctx, item));
    }

    let grid = Container::new(cells.wrap())
        .width(Length::Fill)
        .padding(spacing::MD);

    Scrollable::new(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build one clickable cell: thumbnail on top, label underneath.
fn build_cell<'a>(ctx: &ViewContext<'a>, item: &'a Item) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match ctx.thumbnails.get(&item.id) {
        Some(ThumbnailState::Ready(data)) => Image::new(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(ctx.cell_size))
            .height(Length::Fixed(ctx.cell_size))
            .into(),
        Some(ThumbnailState::Unavailable) => build_placeholder(
            ctx.cell_size,
            Some(ctx.i18n.tr("thumb-unavailable")),
        ),
        Some(ThumbnailState::Loading) | None => build_placeholder(ctx.cell_size, None),
    };

    let label = Text::new(item.label.as_str())
        .size(typography::BODY_SM)
        .width(Length::Fixed(ctx.cell_size));

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(thumbnail)
        .push(label);

    button(content)
        .padding(spacing::XXS)
        .style(cell_style)
        .on_press(Message::ItemPressed(item.id))
        .into()
}

/// Build the gray surface shown while a thumbnail loads or after it failed.
fn build_placeholder<'a>(cell_size: f32, notice: Option<String>) -> Element<'a, Message> {
    let mut surface = Container::new(match notice {
        Some(text) => Element::from(Text::new(text).size(typography::CAPTION)),
        None => Element::from(Text::new("")),
    })
    .width(Length::Fixed(cell_size))
    .height(Length::Fixed(cell_size))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    surface = surface.style(styles::container::thumbnail_placeholder);

    surface.into()
}

/// Centered hint shown when the current filter matches no items.
fn build_empty_hint(i18n: &I18n) -> Element<'_, Message> {
    let hint = Text::new(i18n.tr("grid-empty"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    Container::new(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Style function for thumbnail cells.
fn cell_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.weak.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                color: palette.primary.strong.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}
