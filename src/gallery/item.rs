// SPDX-License-Identifier: MPL-2.0
//! Gallery items and the category filter applied to them.
//!
//! These are pure domain types without I/O. Where the image bytes live and
//! how they are decoded is the media layer's concern; the types here only
//! carry identity, display metadata, and the paths loaders should resolve.

use std::fmt;
use std::path::PathBuf;

/// Reserved filter name meaning "no category filter".
///
/// Manifests must not use it as an item category; the filter bar claims it
/// for the show-everything pill.
pub const ALL_CATEGORY: &str = "all";

/// Stable identity of a gallery item for the lifetime of a loaded gallery.
///
/// Ids are assigned by the manifest loader in declaration order and never
/// reused while the gallery stays open. Grid clicks and async load results
/// carry an `ItemId` rather than a grid position, so they stay meaningful
/// across filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single gallery entry: one image and its display metadata.
///
/// Immutable once loaded. The controller holds items inside a
/// [`Collection`](super::Collection) and only ever hands out references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Caption shown under the modal image.
    pub label: String,
    /// Category tag as declared in the manifest (lowercase by convention).
    pub category: String,
    /// Full-resolution image shown in the modal.
    pub image: PathBuf,
    /// Grid thumbnail; falls back to `image` when the manifest names none.
    pub thumbnail: PathBuf,
}

impl Item {
    /// Category name capitalized for display (filter pills, modal tag).
    #[must_use]
    pub fn display_category(&self) -> String {
        capitalize(&self.category)
    }
}

/// Category filter applied to the gallery grid.
///
/// `All` is the no-filter state and matches every item. `Only` matches items
/// whose category is exactly the stored name; a name no item carries is a
/// valid filter that simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every item.
    #[default]
    All,
    /// Show only items tagged with this category.
    Only(String),
}

impl CategoryFilter {
    /// Parses a filter name as emitted by the filter bar.
    ///
    /// The reserved word [`ALL_CATEGORY`] (any ASCII case) is the no-filter
    /// state; everything else selects a single category verbatim.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case(ALL_CATEGORY) {
            Self::All
        } else {
            Self::Only(name.to_string())
        }
    }

    /// Returns `true` if a specific category is selected (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Returns `true` if the given item passes this filter.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

/// Uppercases the first character of a display name.
///
/// Categories are stored lowercase; pills and the modal tag show them
/// capitalized.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
