// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest loader.
//!
//! A gallery is a directory with a `gallery.toml` manifest describing the
//! items to show:
//!
//! ```toml
//! title = "Portfolio"
//!
//! [[item]]
//! label = "Mountain sunrise"          # optional, defaults to the file stem
//! category = "nature"
//! image = "images/mountain.jpg"       # relative to the manifest directory
//! thumbnail = "thumbs/mountain.jpg"   # optional, falls back to `image`
//! ```
//!
//! The loader validates the declarations and resolves paths, but does not
//! touch the image files themselves: a missing or broken image surfaces
//! later as a per-item unavailable marker, never as a load failure here.

use crate::error::{Error, Result};
use crate::gallery::item::{capitalize, ALL_CATEGORY};
use crate::gallery::{Collection, Item, ItemId};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the loader looks for when handed a directory.
pub const MANIFEST_FILE: &str = "gallery.toml";

/// A successfully loaded gallery, ready to hand to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGallery {
    /// Display title from the manifest, if declared.
    pub title: Option<String>,
    /// The directory the manifest lives in.
    pub root: PathBuf,
    /// All declared items, ids assigned in declaration order.
    pub collection: Collection,
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    title: Option<String>,
    #[serde(default)]
    item: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    label: Option<String>,
    category: String,
    image: String,
    thumbnail: Option<String>,
}

/// Loads a gallery from a manifest file or a directory containing one.
///
/// # Errors
///
/// Returns an error if the manifest cannot be found or read, is not valid
/// TOML, or declares an invalid item (empty category or image path, or the
/// reserved category name `all`).
pub fn load(path: &Path) -> Result<LoadedGallery> {
    let manifest_path = resolve_manifest_path(path)?;
    let root = manifest_path
        .parent()
        .ok_or_else(|| Error::Manifest("manifest path has no parent directory".into()))?
        .to_path_buf();

    let content = fs::read_to_string(&manifest_path)?;
    let manifest: ManifestFile =
        toml::from_str(&content).map_err(|e| Error::Manifest(e.to_string()))?;

    let mut items = Vec::with_capacity(manifest.item.len());
    for (index, declared) in manifest.item.into_iter().enumerate() {
        items.push(build_item(&root, index, declared)?);
    }

    Ok(LoadedGallery {
        title: manifest.title,
        root,
        collection: Collection::new(items),
    })
}

fn resolve_manifest_path(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        let candidate = path.join(MANIFEST_FILE);
        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(Error::Manifest(format!(
                "no {MANIFEST_FILE} in {}",
                path.display()
            )))
        }
    } else {
        Ok(path.to_path_buf())
    }
}

fn build_item(root: &Path, index: usize, declared: ManifestItem) -> Result<Item> {
    // Manifest entries are 1-based in error messages, matching how people
    // count [[item]] blocks in the file.
    let ordinal = index + 1;

    if declared.category.trim().is_empty() {
        return Err(Error::Manifest(format!(
            "item {ordinal}: category must not be empty"
        )));
    }
    if declared.category.eq_ignore_ascii_case(ALL_CATEGORY) {
        return Err(Error::Manifest(format!(
            "item {ordinal}: category \"{ALL_CATEGORY}\" is reserved for the filter bar"
        )));
    }
    if declared.image.trim().is_empty() {
        return Err(Error::Manifest(format!(
            "item {ordinal}: image path must not be empty"
        )));
    }

    let image = resolve_path(root, &declared.image);
    let thumbnail = declared
        .thumbnail
        .as_deref()
        .map_or_else(|| image.clone(), |value| resolve_path(root, value));
    let label = declared
        .label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| default_label(&image));

    Ok(Item {
        id: ItemId(index as u64),
        label,
        category: declared.category,
        image,
        thumbnail,
    })
}

fn resolve_path(root: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Falls back to a readable label derived from the image file stem:
/// `images/mountain-sunrise.jpg` becomes `Mountain sunrise`.
fn default_label(image: &Path) -> String {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default();
    capitalize(&stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::CategoryFilter;
    use std::fs;
    use tempfile::tempdir;

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(MANIFEST_FILE);
        fs::write(&path, content).expect("failed to write manifest");
        path
    }

    const SAMPLE: &str = r#"
title = "Portfolio"

[[item]]
label = "Mountain sunrise"
category = "nature"
image = "images/mountain.jpg"
thumbnail = "thumbs/mountain.jpg"

[[item]]
category = "city"
image = "images/tokyo-at-night.jpg"

[[item]]
label = "Lake"
category = "nature"
image = "images/lake.jpg"
"#;

    #[test]
    fn load_resolves_items_against_the_manifest_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = write_manifest(temp_dir.path(), SAMPLE);

        let gallery = load(&manifest_path).expect("load failed");
        assert_eq!(gallery.title.as_deref(), Some("Portfolio"));
        assert_eq!(gallery.root, temp_dir.path());
        assert_eq!(gallery.collection.len(), 3);

        let first = &gallery.collection.items()[0];
        assert_eq!(first.id, ItemId(0));
        assert_eq!(first.image, temp_dir.path().join("images/mountain.jpg"));
        assert_eq!(first.thumbnail, temp_dir.path().join("thumbs/mountain.jpg"));
    }

    #[test]
    fn load_accepts_a_directory_containing_a_manifest() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_manifest(temp_dir.path(), SAMPLE);

        let gallery = load(temp_dir.path()).expect("load failed");
        assert_eq!(gallery.collection.len(), 3);
        assert_eq!(gallery.collection.categories(), &["nature", "city"]);
    }

    #[test]
    fn load_rejects_a_directory_without_a_manifest() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load(temp_dir.path()).expect_err("load should fail");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = write_manifest(temp_dir.path(), "title = = nope");

        let err = load(&manifest_path).expect_err("load should fail");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn missing_thumbnail_falls_back_to_the_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = write_manifest(temp_dir.path(), SAMPLE);

        let gallery = load(&manifest_path).expect("load failed");
        let second = &gallery.collection.items()[1];
        assert_eq!(second.thumbnail, second.image);
    }

    #[test]
    fn missing_label_is_derived_from_the_file_stem() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = write_manifest(temp_dir.path(), SAMPLE);

        let gallery = load(&manifest_path).expect("load failed");
        let second = &gallery.collection.items()[1];
        assert_eq!(second.label, "Tokyo at night");
    }

    #[test]
    fn absolute_image_paths_are_kept_verbatim() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = write_manifest(
            temp_dir.path(),
            r#"
[[item]]
category = "nature"
image = "/srv/photos/alps.jpg"
"#,
        );

        let gallery = load(&manifest_path).expect("load failed");
        let item = &gallery.collection.items()[0];
        assert_eq!(item.image, PathBuf::from("/srv/photos/alps.jpg"));
    }

    #[test]
    fn reserved_category_all_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = write_manifest(
            temp_dir.path(),
            r#"
[[item]]
category = "All"
image = "images/a.jpg"
"#,
        );

        let err = load(&manifest_path).expect_err("load should fail");
        match err {
            Error::Manifest(message) => assert!(message.contains("reserved")),
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }

    #[test]
    fn empty_category_and_empty_image_are_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let manifest_path = write_manifest(
            temp_dir.path(),
            "[[item]]\ncategory = \"\"\nimage = \"images/a.jpg\"\n",
        );
        assert!(matches!(
            load(&manifest_path),
            Err(Error::Manifest(message)) if message.contains("category")
        ));

        let manifest_path = write_manifest(
            temp_dir.path(),
            "[[item]]\ncategory = \"nature\"\nimage = \"\"\n",
        );
        assert!(matches!(
            load(&manifest_path),
            Err(Error::Manifest(message)) if message.contains("image")
        ));
    }

    #[test]
    fn empty_manifest_loads_an_empty_collection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = write_manifest(temp_dir.path(), "title = \"Empty\"\n");

        let gallery = load(&manifest_path).expect("load failed");
        assert!(gallery.collection.is_empty());
        assert!(gallery
            .collection
            .visible(&CategoryFilter::All)
            .is_empty());
    }

    #[test]
    fn referenced_files_are_not_checked_at_load_time() {
        // None of the declared image files exist; loading must still work.
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = write_manifest(temp_dir.path(), SAMPLE);

        let gallery = load(&manifest_path).expect("load failed");
        for item in gallery.collection.items() {
            assert!(!item.image.exists());
        }
    }
}
