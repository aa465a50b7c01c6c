// SPDX-License-Identifier: MPL-2.0
//! Read-only projection of the controller state for rendering.

use super::item::{CategoryFilter, Item};

/// Snapshot of everything a renderer needs for one frame.
///
/// Borrowed from the controller; taking a snapshot never mutates anything.
/// The grid paints `visible` in order, the filter bar highlights `filter`,
/// and the lightbox shows `modal` when present.
#[derive(Debug, Clone)]
pub struct ViewState<'a> {
    /// The active category filter.
    pub filter: &'a CategoryFilter,
    /// Items passing the filter, in declaration order.
    pub visible: Vec<&'a Item>,
    /// The modal viewer, when open.
    pub modal: Option<ModalView<'a>>,
}

impl<'a> ViewState<'a> {
    /// Returns `true` if the modal viewer is showing.
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Items worth prefetching around the open modal position.
    ///
    /// Returns up to `count` wrap-around neighbors in each direction,
    /// nearest first and next before previous, without duplicates and
    /// without the active item itself. Empty when the modal is closed or
    /// there is nothing else to step to. The caller decides what fetching
    /// means; this only names the candidates.
    #[must_use]
    pub fn prefetch_candidates(&self, count: usize) -> Vec<&'a Item> {
        let Some(modal) = &self.modal else {
            return Vec::new();
        };
        let len = self.visible.len();
        if len <= 1 {
            return Vec::new();
        }

        let mut positions: Vec<usize> = Vec::new();
        for offset in 1..=count {
            let next = (modal.position + offset) % len;
            if next != modal.position && !positions.contains(&next) {
                positions.push(next);
            }
            let previous = (modal.position + len - (offset % len)) % len;
            if previous != modal.position && !positions.contains(&previous) {
                positions.push(previous);
            }
        }

        positions
            .into_iter()
            .filter_map(|position| self.visible.get(position).copied())
            .collect()
    }
}

/// The modal viewer's slice of a [`ViewState`].
#[derive(Debug, Clone, Copy)]
pub struct ModalView<'a> {
    /// The item the modal is showing.
    pub item: &'a Item,
    /// Position inside the filtered sequence (0-indexed).
    pub position: usize,
    /// Length of the filtered sequence.
    pub total: usize,
}

impl ModalView<'_> {
    /// Whether stepping can reach a different item.
    ///
    /// With a single visible item the arrows stay rendered but disabled;
    /// a step would only wrap back to the same position.
    #[must_use]
    pub fn nav_enabled(&self) -> bool {
        self.total > 1
    }

    /// Position indicator for the counter overlay, 1-based: `"3 / 14"`.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position + 1, self.total)
    }
}
