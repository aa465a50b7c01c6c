// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox shown over the grid.
//!
//! The lightbox stacks a dimmed backdrop, the active image with its caption,
//! round previous/next arrows, a close button, and the position counter.
//! Clicks on the backdrop close it; clicks on the content are consumed so
//! the lightbox stays open.

use crate::gallery::{Item, ItemId, ModalView};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{
    opacity,
    palette::{ERROR_500, WHITE},
    radius, sizing, spacing, typography,
};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text},
    Color, ContentFit, Element, Length, Padding,
};

/// Load state of the full-resolution image shown in the lightbox.
///
/// The slot remembers which item it belongs to so a decode that finishes
/// after the user stepped away is rendered as stale, not as the wrong image.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    /// Lightbox closed, nothing in flight.
    #[default]
    Idle,
    /// Decode task running for this item.
    Loading(ItemId),
    /// Decoded and ready to draw.
    Ready(ItemId, ImageData),
    /// The file could not be read or decoded.
    Unavailable(ItemId),
}

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Projection of the open lightbox: active item, position, total.
    pub modal: ModalView<'a>,
    /// Full image load state for the active item.
    pub image: &'a ImageSlot,
}

/// Messages emitted by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close the lightbox (close button, backdrop click, or Escape).
    Close,
    /// Step to the previous visible image.
    NavigatePrevious,
    /// Step to the next visible image.
    NavigateNext,
    /// No-op message to consume clicks on the content without closing it.
    ConsumeClick,
}

/// Render the lightbox.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Close);

    let nav_enabled = ctx.modal.nav_enabled();

    let stack = Stack::new()
        .push(backdrop)
        .push(build_content(&ctx))
        .push(build_arrow(
            "◀",
            nav_enabled,
            Message::NavigatePrevious,
            Horizontal::Left,
        ))
        .push(build_arrow(
            "▶",
            nav_enabled,
            Message::NavigateNext,
            Horizontal::Right,
        ))
        .push(build_close_button())
        .push(build_counter(&ctx.modal));

    stack.into()
}

/// Build the centered image (or its loading/failure notice) with the caption.
fn build_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let item = ctx.modal.item;

    let body: Element<'a, Message> = match ctx.image {
        ImageSlot::Ready(id, data) if *id == item.id => Image::new(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ImageSlot::Unavailable(id) if *id == item.id => {
            build_notice(ctx.i18n.tr("modal-unavailable"), ERROR_500)
        }
        _ => build_notice(ctx.i18n.tr("modal-loading"), WHITE),
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body)
        .push(build_caption(item));

    let clickable = mouse_area(content).on_press(Message::ConsumeClick);

    Container::new(clickable)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: spacing::XL,
            right: sizing::NAV_BUTTON + spacing::XL,
            bottom: spacing::XL + spacing::LG,
            left: sizing::NAV_BUTTON + spacing::XL,
        })
        .into()
}

/// Centered single-line notice used for the loading and unavailable states.
fn build_notice<'a>(text: String, color: Color) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::BODY_LG).color(color))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Caption row: item label plus its category as a small tag.
fn build_caption(item: &Item) -> Element<'_, Message> {
    let tag = Container::new(Text::new(item.display_category()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::FULL));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(item.label.as_str())
                .size(typography::TITLE_SM)
                .color(WHITE),
        )
        .push(tag)
        .into()
}

/// Build a round navigation arrow pinned to one side.
///
/// With a single visible item the arrow is rendered but disabled, so the
/// chrome does not jump around when the filter changes.
fn build_arrow<'a>(
    glyph: &'static str,
    enabled: bool,
    message: Message,
    side: Horizontal,
) -> Element<'a, Message> {
    let label = Container::new(Text::new(glyph).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let arrow: Element<'a, Message> = if enabled {
        button(label)
            .width(Length::Fixed(sizing::NAV_BUTTON))
            .height(Length::Fixed(sizing::NAV_BUTTON))
            .style(styles::button_overlay(
                WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(message)
            .into()
    } else {
        button(label)
            .width(Length::Fixed(sizing::NAV_BUTTON))
            .height(Length::Fixed(sizing::NAV_BUTTON))
            .style(styles::button::disabled())
            .into()
    };

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

/// Build the round close button pinned to the top-right corner.
fn build_close_button<'a>() -> Element<'a, Message> {
    let label = Container::new(Text::new("✕").size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let close = button(label)
        .width(Length::Fixed(sizing::CLOSE_BUTTON))
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Close);

    Container::new(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

/// Build the 1-based position counter pinned to the bottom center.
fn build_counter<'a>(modal: &ModalView<'a>) -> Element<'a, Message> {
    let counter = Container::new(Text::new(modal.counter()).size(typography::BODY))
        .padding(Padding {
            top: spacing::XXS,
            right: spacing::XS,
            bottom: spacing::XXS,
            left: spacing::XS,
        })
        .style(styles::overlay::indicator(radius::LG));

    Container::new(counter)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn item(id: u64) -> Item {
        Item {
            id: ItemId(id),
            label: "Sunrise".to_string(),
            category: "nature".to_string(),
            image: PathBuf::from("sunrise.jpg"),
            thumbnail: PathBuf::from("sunrise_thumb.jpg"),
        }
    }

    #[test]
    fn lightbox_renders_while_loading() {
        let i18n = I18n::default();
        let item = item(0);
        let modal = ModalView {
            item: &item,
            position: 0,
            total: 3,
        };
        let slot = ImageSlot::Loading(ItemId(0));
        let ctx = ViewContext {
            i18n: &i18n,
            modal,
            image: &slot,
        };
        let _element = view(ctx);
    }

    #[test]
    fn lightbox_renders_ready_image() {
        let i18n = I18n::default();
        let item = item(0);
        let modal = ModalView {
            item: &item,
            position: 0,
            total: 3,
        };
        let data = ImageData::from_rgba(2, 2, vec![255; 16]);
        let slot = ImageSlot::Ready(ItemId(0), data);
        let ctx = ViewContext {
            i18n: &i18n,
            modal,
            image: &slot,
        };
        let _element = view(ctx);
    }

    #[test]
    fn lightbox_renders_unavailable_notice() {
        let i18n = I18n::default();
        let item = item(4);
        let modal = ModalView {
            item: &item,
            position: 1,
            total: 2,
        };
        let slot = ImageSlot::Unavailable(ItemId(4));
        let ctx = ViewContext {
            i18n: &i18n,
            modal,
            image: &slot,
        };
        let _element = view(ctx);
    }

    #[test]
    fn stale_ready_slot_renders_as_loading() {
        // Slot still holds the previous item's image after a step.
        let i18n = I18n::default();
        let item = item(2);
        let modal = ModalView {
            item: &item,
            position: 0,
            total: 5,
        };
        let data = ImageData::from_rgba(2, 2, vec![255; 16]);
        let slot = ImageSlot::Ready(ItemId(1), data);
        let ctx = ViewContext {
            i18n: &i18n,
            modal,
            image: &slot,
        };
        let _element = view(ctx);
    }
}
