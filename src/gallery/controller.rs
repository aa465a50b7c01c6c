// SPDX-License-Identifier: MPL-2.0
//! The gallery state machine coordinating the filter and the modal viewer.
//!
//! `GalleryController` is the single source of truth for what the grid and
//! the lightbox show: the fixed item collection, the active category filter,
//! and the modal position inside the filtered sequence. Every transition
//! recomputes the filtered sequence from `(collection, filter)` instead of
//! caching it, so the modal position can never point at an item the filter
//! hides.
//!
//! All operations are total: stale or nonsensical input (an id that was
//! filtered out a moment ago, a step while the modal is closed) degrades to
//! a no-op, never to an error. A stray click must not take the session down.

use super::collection::Collection;
use super::item::{CategoryFilter, ItemId};
use super::view_state::{ModalView, ViewState};

/// Direction of a modal navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Whether the modal viewer is showing, and where.
///
/// `position` indexes the filtered item sequence, not the full collection.
/// Invariant: `Open` implies the filtered sequence is non-empty and
/// `position` is in bounds. The controller maintains this on every
/// transition; nothing else writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// The grid is showing; no item is enlarged.
    #[default]
    Closed,
    /// The lightbox is showing the item at `position` in the filtered sequence.
    Open { position: usize },
}

impl ModalState {
    /// Returns `true` if the modal viewer is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Owns the collection, the filter, and the modal state, and exposes the
/// transitions between them.
///
/// Holds no pixel data and performs no I/O; loaders and the renderer work
/// from the [`ViewState`] snapshot each operation returns.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    collection: Collection,
    filter: CategoryFilter,
    modal: ModalState,
}

impl GalleryController {
    /// Creates a controller showing everything, modal closed.
    #[must_use]
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            filter: CategoryFilter::All,
            modal: ModalState::Closed,
        }
    }

    /// The full item collection.
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The active category filter.
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// The modal state.
    #[must_use]
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Number of items passing the active filter.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.collection.visible(&self.filter).len()
    }

    /// Selects a category filter and closes the modal.
    ///
    /// Closing is unconditional, even when the currently shown item would
    /// survive the new filter: re-deriving a position silently would surprise
    /// the user, so a filter change always returns to the grid. An unknown
    /// category is not an error; it yields an empty (but valid) grid.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> ViewState<'_> {
        self.filter = filter;
        self.modal = ModalState::Closed;
        self.view_state()
    }

    /// Opens the modal on the given item.
    ///
    /// The position is looked up in the *current* filtered sequence, so a
    /// click that raced against a filter change cannot open a hidden item:
    /// if the id is unknown or filtered out, nothing happens.
    pub fn open_at(&mut self, id: ItemId) -> ViewState<'_> {
        let position = self
            .collection
            .visible(&self.filter)
            .iter()
            .position(|item| item.id == id);
        if let Some(position) = position {
            self.modal = ModalState::Open { position };
        }
        self.view_state()
    }

    /// Closes the modal. Idempotent.
    pub fn close(&mut self) -> ViewState<'_> {
        self.modal = ModalState::Closed;
        self.view_state()
    }

    /// Moves the open modal one item forward or back, wrapping at both ends.
    ///
    /// A no-op while the modal is closed or the filtered sequence is empty.
    /// With a single visible item the step wraps onto the same position.
    pub fn step(&mut self, direction: Direction) -> ViewState<'_> {
        if let ModalState::Open { position } = self.modal {
            let len = self.visible_len();
            if len > 0 {
                let next = match direction {
                    Direction::Next => (position + 1) % len,
                    Direction::Previous => (position + len - 1) % len,
                };
                self.modal = ModalState::Open { position: next };
            }
        }
        self.view_state()
    }

    /// Snapshot of the current state for rendering. Pure; mutates nothing.
    #[must_use]
    pub fn view_state(&self) -> ViewState<'_> {
        let visible = self.collection.visible(&self.filter);
        let modal = match self.modal {
            ModalState::Open { position } => visible.get(position).copied().map(|item| ModalView {
                item,
                position,
                total: visible.len(),
            }),
            ModalState::Closed => None,
        };
        ViewState {
            filter: &self.filter,
            visible,
            modal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::item::Item;
    use std::path::PathBuf;

    fn item(id: u64, category: &str) -> Item {
        Item {
            id: ItemId(id),
            label: format!("item {id}"),
            category: category.to_string(),
            image: PathBuf::from(format!("images/{id}.jpg")),
            thumbnail: PathBuf::from(format!("thumbs/{id}.jpg")),
        }
    }

    /// The three-item fixture from the scenario walkthroughs:
    /// ids 1 and 3 in category "a", id 2 in category "b".
    fn small_controller() -> GalleryController {
        GalleryController::new(Collection::new(vec![
            item(1, "a"),
            item(2, "b"),
            item(3, "a"),
        ]))
    }

    fn larger_controller() -> GalleryController {
        GalleryController::new(Collection::new(vec![
            item(1, "nature"),
            item(2, "city"),
            item(3, "nature"),
            item(4, "people"),
            item(5, "city"),
            item(6, "nature"),
        ]))
    }

    fn visible_ids(view: &ViewState<'_>) -> Vec<u64> {
        view.visible.iter().map(|item| item.id.0).collect()
    }

    #[test]
    fn new_controller_shows_everything_with_modal_closed() {
        let controller = small_controller();
        let view = controller.view_state();
        assert_eq!(*view.filter, CategoryFilter::All);
        assert_eq!(visible_ids(&view), vec![1, 2, 3]);
        assert!(view.modal.is_none());
    }

    #[test]
    fn set_filter_narrows_visible_to_a_subsequence() {
        let mut controller = small_controller();
        let view = controller.set_filter(CategoryFilter::parse("a"));
        assert_eq!(visible_ids(&view), vec![1, 3]);
    }

    #[test]
    fn open_at_positions_modal_within_filtered_sequence() {
        let mut controller = small_controller();
        controller.set_filter(CategoryFilter::parse("a"));

        // Item 3 is the second visible item, not the third overall.
        let view = controller.open_at(ItemId(3));
        let modal = view.modal.expect("modal should be open");
        assert_eq!(modal.item.id, ItemId(3));
        assert_eq!(modal.position, 1);
        assert_eq!(modal.counter(), "2 / 2");
    }

    #[test]
    fn step_next_wraps_to_the_front() {
        let mut controller = small_controller();
        controller.set_filter(CategoryFilter::parse("a"));
        controller.open_at(ItemId(3));

        let view = controller.step(Direction::Next);
        let modal = view.modal.expect("modal should stay open");
        assert_eq!(modal.position, 0);
        assert_eq!(modal.item.id, ItemId(1));
        assert_eq!(modal.counter(), "1 / 2");
    }

    #[test]
    fn step_previous_wraps_to_the_back() {
        let mut controller = small_controller();
        controller.set_filter(CategoryFilter::parse("a"));
        controller.open_at(ItemId(1));

        let view = controller.step(Direction::Previous);
        let modal = view.modal.expect("modal should stay open");
        assert_eq!(modal.position, 1);
        assert_eq!(modal.item.id, ItemId(3));
    }

    #[test]
    fn unknown_category_yields_a_valid_empty_grid() {
        let mut controller = small_controller();
        let view = controller.set_filter(CategoryFilter::parse("z"));
        assert!(view.visible.is_empty());
        assert!(view.modal.is_none());

        // Opening anything on an empty grid stays a no-op.
        let view = controller.open_at(ItemId(1));
        assert!(view.modal.is_none());
        assert_eq!(controller.modal(), ModalState::Closed);
    }

    #[test]
    fn open_at_ignores_filtered_out_items() {
        let mut controller = small_controller();
        controller.set_filter(CategoryFilter::parse("a"));

        // Item 2 exists but is hidden by the filter.
        let view = controller.open_at(ItemId(2));
        assert!(view.modal.is_none());
    }

    #[test]
    fn open_at_ignores_unknown_ids() {
        let mut controller = small_controller();
        controller.open_at(ItemId(42));
        assert_eq!(controller.modal(), ModalState::Closed);

        // An unknown id must also not disturb an already open modal.
        controller.open_at(ItemId(1));
        let before = controller.modal();
        controller.open_at(ItemId(42));
        assert_eq!(controller.modal(), before);
    }

    #[test]
    fn close_is_idempotent() {
        let mut controller = small_controller();
        controller.open_at(ItemId(2));
        assert!(controller.modal().is_open());

        controller.close();
        let once = controller.modal();
        controller.close();
        assert_eq!(controller.modal(), once);
        assert_eq!(once, ModalState::Closed);
    }

    #[test]
    fn set_filter_always_closes_the_modal() {
        let mut controller = small_controller();
        controller.open_at(ItemId(1));
        assert!(controller.modal().is_open());

        // Item 1 survives the "a" filter, but the modal still closes.
        let view = controller.set_filter(CategoryFilter::parse("a"));
        assert!(view.modal.is_none());
        assert_eq!(controller.modal(), ModalState::Closed);
    }

    #[test]
    fn reselecting_the_same_filter_also_closes_the_modal() {
        let mut controller = small_controller();
        controller.set_filter(CategoryFilter::parse("a"));
        controller.open_at(ItemId(1));

        controller.set_filter(CategoryFilter::parse("a"));
        assert_eq!(controller.modal(), ModalState::Closed);
    }

    #[test]
    fn step_while_closed_is_a_no_op() {
        let mut controller = small_controller();
        let view = controller.step(Direction::Next);
        assert!(view.modal.is_none());
        assert_eq!(controller.modal(), ModalState::Closed);
    }

    #[test]
    fn stepping_n_times_returns_to_the_start() {
        let mut controller = larger_controller();
        controller.set_filter(CategoryFilter::parse("nature"));
        controller.open_at(ItemId(3));
        let start = controller.modal();
        let n = controller.visible_len();
        assert_eq!(n, 3);

        for _ in 0..n {
            controller.step(Direction::Next);
        }
        assert_eq!(controller.modal(), start);

        for _ in 0..n {
            controller.step(Direction::Previous);
        }
        assert_eq!(controller.modal(), start);
    }

    #[test]
    fn single_item_sequence_steps_in_place_with_nav_disabled() {
        let mut controller = larger_controller();
        controller.set_filter(CategoryFilter::parse("people"));
        controller.open_at(ItemId(4));

        let view = controller.step(Direction::Next);
        let modal = view.modal.expect("modal should stay open");
        assert_eq!(modal.position, 0);
        assert!(!modal.nav_enabled());

        let view = controller.step(Direction::Previous);
        let modal = view.modal.expect("modal should stay open");
        assert_eq!(modal.position, 0);
        assert_eq!(modal.counter(), "1 / 1");
    }

    #[test]
    fn reopening_works_after_a_filter_change() {
        let mut controller = larger_controller();
        controller.set_filter(CategoryFilter::parse("city"));
        controller.open_at(ItemId(5));
        assert!(controller.modal().is_open());

        controller.set_filter(CategoryFilter::All);
        let view = controller.open_at(ItemId(5));
        let modal = view.modal.expect("modal should reopen");
        // Position is relative to the unfiltered sequence now.
        assert_eq!(modal.position, 4);
        assert_eq!(modal.total, 6);
    }

    #[test]
    fn modal_position_stays_in_bounds_across_operations() {
        enum Op {
            Filter(&'static str),
            Open(u64),
            Step(Direction),
            Close,
        }

        let script = [
            Op::Open(2),
            Op::Step(Direction::Next),
            Op::Filter("nature"),
            Op::Open(6),
            Op::Step(Direction::Previous),
            Op::Step(Direction::Previous),
            Op::Filter("z"),
            Op::Open(1),
            Op::Close,
            Op::Filter("all"),
            Op::Open(1),
            Op::Step(Direction::Previous),
        ];

        let mut controller = larger_controller();
        for op in script {
            match op {
                Op::Filter(name) => {
                    controller.set_filter(CategoryFilter::parse(name));
                }
                Op::Open(id) => {
                    controller.open_at(ItemId(id));
                }
                Op::Step(direction) => {
                    controller.step(direction);
                }
                Op::Close => {
                    controller.close();
                }
            }

            if let ModalState::Open { position } = controller.modal() {
                let len = controller.visible_len();
                assert!(len > 0, "open modal over an empty sequence");
                assert!(position < len, "position {position} out of bounds {len}");
            }
        }
    }
}
