// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::ItemId;
use crate::manifest::LoadedGallery;
use crate::media::ImageData;
use crate::ui::{empty_state, grid, modal, navbar};
use std::path::PathBuf;

/// Messages routed through `App::update`.
///
/// Component messages are wrapped per component; the remaining variants are
/// results of background work. Every decode result carries the epoch it was
/// spawned under so results belonging to a replaced gallery can be dropped.
#[derive(Debug, Clone)]
pub enum Message {
    /// Filter bar interactions.
    Navbar(navbar::Message),
    /// Thumbnail grid interactions.
    Grid(grid::Message),
    /// Lightbox interactions.
    Modal(modal::Message),
    /// Empty state interactions.
    EmptyState(empty_state::Message),
    /// A manifest load finished.
    GalleryLoaded {
        epoch: u64,
        result: Result<LoadedGallery, Error>,
    },
    /// A thumbnail decode finished.
    ThumbnailLoaded {
        epoch: u64,
        id: ItemId,
        result: Result<ImageData, Error>,
    },
    /// The full image for the lightbox finished decoding.
    ModalImageLoaded {
        epoch: u64,
        id: ItemId,
        result: Result<ImageData, Error>,
    },
    /// A neighbor finished decoding in the background.
    ImagePrefetched {
        epoch: u64,
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// The folder picker closed.
    OpenPickerResult(Option<PathBuf>),
    /// Something was dropped onto the window.
    FileDropped(PathBuf),
}

/// Launch parameters handed over by `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override, e.g. `fr` or `en-US`.
    pub lang: Option<String>,
    /// Gallery folder or manifest file to open at startup.
    pub gallery_path: Option<String>,
}
