// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits for the collaborators a [`ListLayout`](crate::ListLayout) drives.
//!
//! None of these are implemented by this crate for any particular toolkit.
//! A host framework implements them over its own model, cell widgets, and
//! drawing backend.

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

/// An ordered collection of items.
pub trait ListModel {
    /// Item type handed to the [`CellRenderer`].
    type Item: ?Sized;

    /// Number of items.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The item at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> ListModel for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> ListModel for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<M: ListModel + ?Sized> ListModel for &M {
    type Item = M::Item;

    fn len(&self) -> usize {
        M::len(self)
    }

    fn get(&self, index: usize) -> Option<&M::Item> {
        M::get(self, index)
    }
}

bitflags::bitflags! {
    /// Per-row state passed to the [`CellRenderer`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CellState: u8 {
        /// The row is selected.
        const SELECTED = 0b0000_0001;
        /// The row is the selection lead and the host has focus.
        const FOCUSED  = 0b0000_0010;
    }
}

/// The flyweight view produced by a [`CellRenderer`].
pub trait CellView {
    /// Size the view would like for the item it was last configured with.
    fn preferred_size(&self) -> Size;

    /// Positions the view. During painting the rectangle is local to the
    /// cell, so its origin is always `(0, 0)`.
    fn set_bounds(&mut self, bounds: Rect);
}

/// A [`CellView`] that can draw onto surfaces of type `S`.
pub trait PaintCell<S: Surface + ?Sized>: CellView {
    /// Draws the view. The surface origin is at the cell's top-left corner.
    fn paint(&mut self, surface: &mut S);
}

/// Produces a configured flyweight view for one item at a time.
///
/// The returned view borrows the renderer mutably, so at most one view is
/// alive at any time and a view can never outlive the next request. A
/// renderer is free to return the same storage on every call.
pub trait CellRenderer<T: ?Sized> {
    /// The flyweight view type.
    type View: CellView;
    /// Error raised when a view cannot be produced.
    type Error: core::error::Error + 'static;

    /// Configures the view for `item`.
    ///
    /// When measuring, `index` is always `0` and `state` is empty, since
    /// neither may influence the preferred size. When painting, `index` is
    /// the real row and `state` reflects the current selection.
    fn cell_view(
        &mut self,
        item: &T,
        index: usize,
        state: CellState,
    ) -> Result<&mut Self::View, Self::Error>;
}

/// Selection state consulted at paint time.
pub trait SelectionModel {
    /// Whether `index` is selected.
    fn is_selected(&self, index: usize) -> bool;

    /// The lead (most recently anchored) selection index, if any.
    fn lead_index(&self) -> Option<usize>;

    /// Replaces the selection with just `index`.
    fn set_selected_index(&mut self, index: usize);
}

/// The widget a [`ListLayout`](crate::ListLayout) is attached to.
pub trait ListHost {
    /// Color type used for the list background.
    type Color: Copy;

    /// Requests that the host re-run its own layout, because the list's
    /// preferred size may have changed.
    fn revalidate(&mut self);

    /// Background color painted behind the cells.
    fn background(&self) -> Self::Color;

    /// Whether the host currently has keyboard focus.
    fn has_focus(&self) -> bool {
        false
    }
}

/// A drawing target with a movable origin.
pub trait Surface {
    /// Fill color type.
    type Color: Copy;

    /// Moves the origin by `offset`. Later drawing is relative to the new origin.
    fn translate(&mut self, offset: Vec2);

    /// Fills `rect`, given relative to the current origin.
    fn fill_rect(&mut self, rect: Rect, color: Self::Color);
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::ListModel;

    #[test]
    fn slices_vecs_and_references_are_models() {
        let items = vec![3_u32, 5, 7];
        assert_eq!(ListModel::len(&items), 3);
        assert_eq!(ListModel::get(&items, 1), Some(&5));
        assert_eq!(ListModel::get(&items, 3), None);

        let slice: &[u32] = &items;
        assert_eq!(ListModel::len(&slice), 3);
        assert_eq!(ListModel::get(&slice, 2), Some(&7));
        assert!(!ListModel::is_empty(&slice));

        let empty: &[u32] = &[];
        assert!(ListModel::is_empty(&empty));
    }
}
