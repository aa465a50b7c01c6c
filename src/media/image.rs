// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for grid thumbnails and the modal viewer.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded image ready for display.
///
/// Cloning is cheap: the handle is reference-counted internally.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Decoded size in bytes (RGBA, 4 bytes per pixel).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Loads an image from the given path and returns its decoded data.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not a supported raster format ([`Error::Image`])
/// - The file cannot be read ([`Error::Io`])
/// - The bytes cannot be decoded ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();

    if !super::is_supported_image(path) {
        return Err(Error::Image(format!(
            "unsupported image format: {}",
            path.display()
        )));
    }

    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;
    let (width, height) = img.dimensions();

    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Decodes an image off the UI thread.
///
/// Decoding runs on the blocking thread pool; the async part only awaits
/// completion, so UI messages keep flowing while pixels arrive.
pub async fn load_image_off_thread(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("image decode task failed: {e}"))))
}
