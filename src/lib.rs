// SPDX-License-Identifier: MPL-2.0
//! `iced_mosaic` is a filterable image gallery built with the Iced GUI framework.
//!
//! A gallery is described by a `gallery.toml` manifest; its items are shown as
//! a category-filterable thumbnail grid with a full-screen lightbox for
//! browsing. The crate demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_mosaic/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod manifest;
pub mod media;
pub mod ui;
