// SPDX-License-Identifier: MPL-2.0
//! The ordered, immutable item list of one loaded gallery.

use super::item::{CategoryFilter, Item, ItemId};

/// The fixed item list of a loaded gallery.
///
/// Items keep the order the manifest declared, and the list never changes
/// while the gallery stays open; showing a different set of images means
/// loading a fresh `Collection` (and with it a fresh controller).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    items: Vec<Item>,
    categories: Vec<String>,
}

impl Collection {
    /// Builds a collection, recording its distinct categories in
    /// first-appearance order for the filter bar.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for item in &items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        Self { items, categories }
    }

    /// All items in declaration order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by identity.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items passing the filter, in declaration order.
    ///
    /// The result is always a subsequence of [`items`](Self::items); it is
    /// recomputed from scratch on every call rather than cached, so it can
    /// never drift from the source list.
    #[must_use]
    pub fn visible(&self, filter: &CategoryFilter) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .collect()
    }
}
