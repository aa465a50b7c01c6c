// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers run on the UI thread and hand back follow-up work as a `Task`.
//! Image decoding never happens here; handlers only spawn decode tasks and
//! apply their results. A result is applied only when its epoch still
//! matches, so work spawned for a replaced gallery is dropped on arrival.

use super::{App, GalleryState, Message};
use crate::error::Error;
use crate::gallery::{Direction, GalleryController, ItemId};
use crate::manifest::{self, LoadedGallery};
use crate::media::{self, ImageData, PrefetchCache, PrefetchConfig};
use crate::ui::{empty_state, grid, modal, navbar};
use iced::Task;
use std::collections::HashMap;
use std::path::PathBuf;

impl App {
    /// Starts loading a gallery from a picked or dropped path.
    ///
    /// Opening is a fresh start: the current gallery and lightbox are torn
    /// down immediately, and bumping the epoch invalidates every decode
    /// still in flight.
    pub(super) fn start_gallery_load(&mut self, path: PathBuf) -> Task<Message> {
        self.epoch += 1;
        let epoch = self.epoch;
        self.gallery = None;
        self.load_error = None;

        Task::perform(async move { manifest::load(&path) }, move |result| {
            Message::GalleryLoaded { epoch, result }
        })
    }

    /// Opens the native folder picker.
    pub(super) fn open_folder_picker(&self) -> Task<Message> {
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .pick_folder()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::OpenPickerResult,
        )
    }

    pub(super) fn handle_navbar_message(&mut self, message: navbar::Message) -> Task<Message> {
        match message {
            navbar::Message::CategorySelected(filter) => {
                if let Some(gallery) = self.gallery.as_mut() {
                    // Changing the filter always closes the lightbox; drop
                    // the decoded image along with it.
                    gallery.controller.set_filter(filter);
                    gallery.modal_image = modal::ImageSlot::Idle;
                }
                Task::none()
            }
        }
    }

    pub(super) fn handle_grid_message(&mut self, message: grid::Message) -> Task<Message> {
        match message {
            grid::Message::ItemPressed(id) => self.open_lightbox(id),
        }
    }

    pub(super) fn handle_modal_message(&mut self, message: modal::Message) -> Task<Message> {
        match message {
            modal::Message::Close => {
                if let Some(gallery) = self.gallery.as_mut() {
                    gallery.controller.close();
                    gallery.modal_image = modal::ImageSlot::Idle;
                }
                Task::none()
            }
            modal::Message::NavigatePrevious => self.step_lightbox(Direction::Previous),
            modal::Message::NavigateNext => self.step_lightbox(Direction::Next),
            modal::Message::ConsumeClick => Task::none(),
        }
    }

    pub(super) fn handle_empty_state_message(
        &mut self,
        message: empty_state::Message,
    ) -> Task<Message> {
        match message {
            empty_state::Message::OpenPickerPressed => self.open_folder_picker(),
        }
    }

    /// Opens the lightbox on `id`.
    ///
    /// Presses on items hidden by the current filter, or ids the collection
    /// does not know, are ignored by the controller and leave everything
    /// unchanged.
    fn open_lightbox(&mut self, id: ItemId) -> Task<Message> {
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };
        gallery.controller.open_at(id);
        self.refresh_modal_image()
    }

    fn step_lightbox(&mut self, direction: Direction) -> Task<Message> {
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };
        gallery.controller.step(direction);
        self.refresh_modal_image()
    }

    /// Brings the lightbox image slot in line with the controller.
    ///
    /// Serves the image straight from the prefetch cache when it is there,
    /// otherwise marks the slot as loading and spawns a decode. Neighbors of
    /// the new position are scheduled for prefetching in the same batch.
    fn refresh_modal_image(&mut self) -> Task<Message> {
        let epoch = self.epoch;
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };

        let view = gallery.controller.view_state();
        let Some(modal_view) = view.modal else {
            gallery.modal_image = modal::ImageSlot::Idle;
            return Task::none();
        };
        let item_id = modal_view.item.id;
        let image_path = modal_view.item.image.clone();
        let candidates: Vec<PathBuf> = view
            .prefetch_candidates(gallery.prefetch.prefetch_count())
            .into_iter()
            .map(|item| item.image.clone())
            .collect();

        let mut tasks = Vec::new();

        if let Some(image) = gallery.prefetch.get(&image_path) {
            gallery.modal_image = modal::ImageSlot::Ready(item_id, image);
        } else {
            gallery.modal_image = modal::ImageSlot::Loading(item_id);
            tasks.push(Task::perform(
                media::load_image_off_thread(image_path),
                move |result| Message::ModalImageLoaded {
                    epoch,
                    id: item_id,
                    result,
                },
            ));
        }

        for path in gallery.prefetch.paths_to_prefetch(&candidates) {
            tasks.push(Task::perform(
                media::load_image_for_prefetch(path),
                move |(path, result)| Message::ImagePrefetched {
                    epoch,
                    path,
                    result,
                },
            ));
        }

        Task::batch(tasks)
    }

    /// Applies a finished manifest load.
    pub(super) fn handle_gallery_loaded(
        &mut self,
        epoch: u64,
        result: Result<LoadedGallery, Error>,
    ) -> Task<Message> {
        if epoch != self.epoch {
            return Task::none();
        }

        match result {
            Ok(loaded) => {
                let config = if self.prefetch_enabled {
                    PrefetchConfig::default()
                } else {
                    PrefetchConfig::disabled()
                };
                self.gallery = Some(GalleryState {
                    title: loaded.title,
                    controller: GalleryController::new(loaded.collection),
                    thumbnails: HashMap::new(),
                    modal_image: modal::ImageSlot::Idle,
                    prefetch: PrefetchCache::new(config),
                });
                self.load_error = None;
                self.spawn_thumbnail_loads()
            }
            Err(error) => {
                eprintln!("Failed to load gallery: {error:?}");
                self.load_error = Some(error.to_string());
                Task::none()
            }
        }
    }

    /// Schedules a thumbnail decode for every item of the open gallery.
    fn spawn_thumbnail_loads(&mut self) -> Task<Message> {
        let epoch = self.epoch;
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        for item in gallery.controller.collection().items() {
            let id = item.id;
            let path = item.thumbnail.clone();
            gallery.thumbnails.insert(id, grid::ThumbnailState::Loading);
            tasks.push(Task::perform(
                media::load_image_off_thread(path),
                move |result| Message::ThumbnailLoaded { epoch, id, result },
            ));
        }

        Task::batch(tasks)
    }

    /// Applies a finished thumbnail decode.
    ///
    /// Failures keep the cell visible and clickable; it only gets the
    /// placeholder look.
    pub(super) fn handle_thumbnail_loaded(
        &mut self,
        epoch: u64,
        id: ItemId,
        result: Result<ImageData, Error>,
    ) -> Task<Message> {
        if epoch != self.epoch {
            return Task::none();
        }
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };

        let state = match result {
            Ok(image) => grid::ThumbnailState::Ready(image),
            Err(error) => {
                eprintln!("Failed to load thumbnail: {error:?}");
                grid::ThumbnailState::Unavailable
            }
        };
        gallery.thumbnails.insert(id, state);
        Task::none()
    }

    /// Applies a finished lightbox decode.
    ///
    /// The result only counts while the slot still waits for exactly this
    /// item; navigating away re-targets the slot and whatever arrives for
    /// the old position must not overwrite it.
    pub(super) fn handle_modal_image_loaded(
        &mut self,
        epoch: u64,
        id: ItemId,
        result: Result<ImageData, Error>,
    ) -> Task<Message> {
        if epoch != self.epoch {
            return Task::none();
        }
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };
        if !matches!(gallery.modal_image, modal::ImageSlot::Loading(pending) if pending == id) {
            return Task::none();
        }

        gallery.modal_image = match result {
            Ok(image) => {
                // Keep it cached so stepping back to this item is instant.
                if let Some(item) = gallery.controller.collection().get(id) {
                    gallery.prefetch.insert(item.image.clone(), image.clone());
                }
                modal::ImageSlot::Ready(id, image)
            }
            Err(error) => {
                eprintln!("Failed to load image: {error:?}");
                modal::ImageSlot::Unavailable(id)
            }
        };
        Task::none()
    }

    /// Stores a prefetched neighbor in the cache.
    ///
    /// Prefetch failures stay silent; opening the item decodes again and
    /// surfaces the error in the lightbox.
    pub(super) fn handle_image_prefetched(
        &mut self,
        epoch: u64,
        path: PathBuf,
        result: Result<ImageData, Error>,
    ) -> Task<Message> {
        if epoch != self.epoch {
            return Task::none();
        }
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };

        if let Ok(image) = result {
            gallery.prefetch.insert(path, image);
        }
        Task::none()
    }
}
