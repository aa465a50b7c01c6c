// SPDX-License-Identifier: MPL-2.0
//! Core gallery state, independent of any rendering surface.
//!
//! This module owns the item collection, the category filter, and the modal
//! viewer position, and provides a shared [`GalleryController`] as the single
//! source of truth for what the grid and the modal are showing. It performs
//! no I/O and holds no pixel data; image loading and painting consume the
//! [`ViewState`](view_state::ViewState) snapshot it produces.

pub mod collection;
pub mod controller;
pub mod item;
pub mod view_state;

pub use collection::Collection;
pub use controller::{Direction, GalleryController, ModalState};
pub use item::{capitalize, CategoryFilter, Item, ItemId};
pub use view_state::{ModalView, ViewState};
