// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the empty state until a gallery is open, then the filter bar and
//! grid, with the lightbox stacked on top while one is showing.

use super::{GalleryState, Message};
use crate::i18n::fluent::I18n;
use crate::ui::{empty_state, grid, modal, navbar};
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Borrowed application state needed to build one frame.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: Option<&'a GalleryState>,
    pub load_error: Option<&'a str>,
    pub grid_cell_size: f32,
}

/// Builds the scene for the current application state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.gallery {
        Some(gallery) => build_gallery(gallery, ctx.i18n, ctx.grid_cell_size),
        None => empty_state::view(ctx.i18n, ctx.load_error).map(Message::EmptyState),
    }
}

fn build_gallery<'a>(
    gallery: &'a GalleryState,
    i18n: &'a I18n,
    cell_size: f32,
) -> Element<'a, Message> {
    let view_state = gallery.controller.view_state();

    let navbar = navbar::view(navbar::ViewContext {
        i18n,
        title: gallery.title.as_deref(),
        categories: gallery.controller.collection().categories(),
        filter: view_state.filter,
    })
    .map(Message::Navbar);

    let grid = grid::view(grid::ViewContext {
        i18n,
        visible: view_state.visible,
        thumbnails: &gallery.thumbnails,
        cell_size,
    })
    .map(Message::Grid);

    let browse = Column::new()
        .push(navbar)
        .push(grid)
        .width(Length::Fill)
        .height(Length::Fill);

    match view_state.modal {
        Some(modal_view) => Stack::new()
            .push(browse)
            .push(
                modal::view(modal::ViewContext {
                    i18n,
                    modal: modal_view,
                    image: &gallery.modal_image,
                })
                .map(Message::Modal),
            )
            .into(),
        None => browse.into(),
    }
}
