// SPDX-License-Identifier: MPL-2.0
//! Image loading and caching for the gallery.
//!
//! Everything here works on raster files only; which files belong to the
//! gallery and in what order is the manifest's concern.

pub mod image;
pub mod prefetch;

// Re-export commonly used types
pub use image::{load_image, load_image_off_thread, ImageData};
pub use prefetch::{load_image_for_prefetch, PrefetchCache, PrefetchConfig};

use std::path::Path;

/// Raster image extensions the gallery can decode.
///
/// Mirrors the formats the image decoder is built with.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Checks if a path carries a supported raster image extension.
#[must_use]
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn common_raster_formats_are_supported() {
        assert!(is_supported_image("photo.jpg"));
        assert!(is_supported_image("image.PNG"));
        assert!(is_supported_image("anim.gif"));
        assert!(is_supported_image("scan.tiff"));
    }

    #[test]
    fn non_raster_files_are_rejected() {
        assert!(!is_supported_image("document.pdf"));
        assert!(!is_supported_image("clip.mp4"));
        assert!(!is_supported_image("vector.svg"));
        assert!(!is_supported_image("no_extension"));
    }

    #[test]
    fn detection_ignores_directories_in_the_path() {
        let path = PathBuf::from("/home/user/photos/vacation.JpEg");
        assert!(is_supported_image(&path));
    }
}
