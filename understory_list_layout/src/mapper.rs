// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between row indices and pixel offsets.

use kurbo::{Point, Rect, Size};

use crate::cache::GeometryCache;
use crate::{LayoutMode, RowExtents, VisibleRows, compute_visible_rows};

/// Read-only view of fresh row geometry.
///
/// Obtained from [`ListLayout::geometry`](crate::ListLayout::geometry), which
/// rebuilds stale geometry first, so every query here is a lookup: offsets are
/// O(1) and [`CoordinateMapper::row_at_offset`] is O(1) for uniform rows and
/// O(log n) otherwise.
///
/// Rows are stacked from `y = 0` with no gaps and start at `x = 0`.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a> {
    cache: &'a GeometryCache,
}

impl<'a> CoordinateMapper<'a> {
    pub(crate) const fn new(cache: &'a GeometryCache) -> Self {
        Self { cache }
    }

    fn rows(&self) -> &'a dyn RowExtents {
        self.cache.rows()
    }

    /// Whether rows are uniform or individually measured.
    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        self.cache.mode()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Height of `row`, or `None` if out of range.
    #[must_use]
    pub fn row_height(&self, row: usize) -> Option<f64> {
        self.rows().extent_of(row)
    }

    /// Offset of the top edge of `row`, or `None` if out of range.
    #[must_use]
    pub fn row_top(&self, row: usize) -> Option<f64> {
        self.rows().offset_of(row)
    }

    /// Sum of all row heights.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.rows().total_extent()
    }

    /// The row containing vertical offset `y`.
    ///
    /// Returns `None` if `y` is negative or at or past the bottom of the last row.
    #[must_use]
    pub fn row_at_offset(&self, y: f64) -> Option<usize> {
        self.rows().row_at_offset(y)
    }

    /// Bounding rectangle of rows `a..=b` (in either order).
    ///
    /// Returns `None` if either row is out of range, which includes every
    /// query on an empty list.
    #[must_use]
    pub fn bounds_of(&self, a: usize, b: usize) -> Option<Rect> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let rows = self.rows();
        let top = rows.offset_of(low)?;
        let bottom = rows.offset_of(high)? + rows.extent_of(high)?;
        Some(Rect::new(0.0, top, rows.width(), bottom))
    }

    /// Bounding rectangle of a single row.
    #[must_use]
    pub fn row_bounds(&self, row: usize) -> Option<Rect> {
        self.bounds_of(row, row)
    }

    /// Bounding rectangle of every row, or `None` for an empty list.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        let last = self.row_count().checked_sub(1)?;
        self.bounds_of(0, last)
    }

    /// Size needed to show every row; zero for an empty list.
    #[must_use]
    pub fn preferred_size(&self) -> Size {
        self.content_bounds().map_or(Size::ZERO, |bounds| bounds.size())
    }

    /// The row containing `point`, considering only its vertical position.
    #[must_use]
    pub fn location_to_index(&self, point: Point) -> Option<usize> {
        self.row_at_offset(point.y)
    }

    /// Top-left corner of `row`, or `None` if out of range.
    #[must_use]
    pub fn index_to_location(&self, row: usize) -> Option<Point> {
        self.row_top(row).map(|y| Point::new(0.0, y))
    }

    /// Rows intersecting the vertical span `[top, bottom)`.
    #[must_use]
    pub fn visible_rows(&self, top: f64, bottom: f64) -> VisibleRows {
        compute_visible_rows(self.rows(), top, bottom)
    }
}
