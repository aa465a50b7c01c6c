// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery views.
//!
//! The `App` struct wires together the domains (gallery, localization,
//! configuration) and translates messages into side effects like manifest
//! loading and image decoding. This file intentionally keeps policy
//! decisions (window sizing, cell size clamping, epoch invalidation) close
//! to the main update loop so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::{GalleryController, ItemId};
use crate::i18n::fluent::I18n;
use crate::media::PrefetchCache;
use crate::ui::{grid, modal};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the gallery, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    /// The open gallery, if any.
    gallery: Option<GalleryState>,
    /// Details of the most recent failed open attempt.
    load_error: Option<String>,
    /// Edge length of a grid cell in logical pixels, already clamped.
    grid_cell_size: f32,
    /// Whether neighbors of the lightbox position are decoded ahead of time.
    prefetch_enabled: bool,
    /// Invalidation token for in-flight decode results. Bumped whenever a
    /// gallery load starts; results stamped with an older value are dropped
    /// on arrival.
    epoch: u64,
}

/// Everything belonging to one open gallery.
///
/// Replaced wholesale when another gallery is opened; nothing in here
/// survives a reload.
pub struct GalleryState {
    /// Display title from the manifest.
    title: Option<String>,
    /// Filter and lightbox state machine.
    controller: GalleryController,
    /// Thumbnail decode state per item.
    thumbnails: HashMap<ItemId, grid::ThumbnailState>,
    /// What the lightbox is currently showing.
    modal_image: modal::ImageSlot,
    /// Decoded full images kept around the lightbox position.
    prefetch: PrefetchCache,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_open", &self.gallery.is_some())
            .field("load_error", &self.load_error)
            .field("epoch", &self.epoch)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Ensures configured cell sizes stay inside the supported range so a
/// hand-edited config cannot produce an unusable grid.
fn clamp_grid_cell_size(value: f32) -> f32 {
    value.clamp(config::MIN_GRID_CELL_SIZE, config::MAX_GRID_CELL_SIZE)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: None,
            load_error: None,
            grid_cell_size: config::DEFAULT_GRID_CELL_SIZE,
            prefetch_enabled: true,
            epoch: 0,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off loading the
    /// gallery named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        if let Some(size) = config.grid_cell_size {
            app.grid_cell_size = clamp_grid_cell_size(size);
        }
        if let Some(enabled) = config.prefetch_enabled {
            app.prefetch_enabled = enabled;
        }

        let task = match flags.gallery_path {
            Some(path) => app.start_gallery_load(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self
            .gallery
            .as_ref()
            .and_then(|gallery| gallery.title.as_deref())
        {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let lightbox_open = self
            .gallery
            .as_ref()
            .is_some_and(|gallery| gallery.controller.modal().is_open());
        subscription::create_event_subscription(lightbox_open)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => self.handle_navbar_message(message),
            Message::Grid(message) => self.handle_grid_message(message),
            Message::Modal(message) => self.handle_modal_message(message),
            Message::EmptyState(message) => self.handle_empty_state_message(message),
            Message::GalleryLoaded { epoch, result } => self.handle_gallery_loaded(epoch, result),
            Message::ThumbnailLoaded { epoch, id, result } => {
                self.handle_thumbnail_loaded(epoch, id, result)
            }
            Message::ModalImageLoaded { epoch, id, result } => {
                self.handle_modal_image_loaded(epoch, id, result)
            }
            Message::ImagePrefetched {
                epoch,
                path,
                result,
            } => self.handle_image_prefetched(epoch, path, result),
            Message::OpenPickerResult(Some(path)) => self.start_gallery_load(path),
            Message::OpenPickerResult(None) => Task::none(),
            Message::FileDropped(path) => self.start_gallery_load(path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: self.gallery.as_ref(),
            load_error: self.load_error.as_deref(),
            grid_cell_size: self.grid_cell_size,
        })
    }
}
