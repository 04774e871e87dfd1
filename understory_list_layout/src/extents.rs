// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row extent trait and the visible-row helper built on it.

/// Rows that intersect a vertical span of the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRows {
    /// First intersecting row (inclusive).
    pub start: usize,
    /// One past the last intersecting row (exclusive).
    pub end: usize,

    /// Total height of rows before `start`.
    pub before_extent: f64,
    /// Total height of rows at or after `end`.
    pub after_extent: f64,
    /// Total height of all rows.
    pub content_extent: f64,
}

impl VisibleRows {
    /// No rows and no content.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        before_extent: 0.0,
        after_extent: 0.0,
        content_extent: 0.0,
    };

    /// Returns `true` if no rows intersect the span.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of intersecting rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Vertical row geometry over rows `0..len`, stacked from offset `0` with no gaps.
///
/// Every query that takes a row returns `None` when the row is out of range.
pub trait RowExtents {
    /// Number of rows.
    fn len(&self) -> usize;

    /// Returns `true` if there are no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width shared by every row: the fixed width, or the widest measured row.
    fn width(&self) -> f64;

    /// Sum of all row heights.
    fn total_extent(&self) -> f64;

    /// Height of `row`.
    fn extent_of(&self, row: usize) -> Option<f64>;

    /// Offset of the top edge of `row` from the top of row `0`.
    fn offset_of(&self, row: usize) -> Option<f64>;

    /// The row whose span `[offset_of(row), offset_of(row) + extent_of(row))`
    /// contains `offset`, or `None` if `offset` is negative or past the last row.
    ///
    /// A zero-height row contains no offset, so it is never returned: its
    /// top offset maps to the next row with a non-zero height.
    fn row_at_offset(&self, offset: f64) -> Option<usize>;
}

/// Computes the rows intersecting the vertical span `[top, bottom)`.
///
/// The span is clamped to the content. Rows are located through
/// [`RowExtents::row_at_offset`], so the cost is that of two lookups rather
/// than a walk over the rows above the span.
pub fn compute_visible_rows<R>(rows: &R, top: f64, bottom: f64) -> VisibleRows
where
    R: RowExtents + ?Sized,
{
    let len = rows.len();
    let content_extent = rows.total_extent().max(0.0);
    if len == 0 || content_extent == 0.0 {
        return VisibleRows::EMPTY;
    }

    let min = top.max(0.0).min(content_extent);
    let max = bottom.min(content_extent);

    if max <= min {
        return VisibleRows {
            start: 0,
            end: 0,
            before_extent: min,
            after_extent: content_extent - min,
            content_extent,
        };
    }

    // `min < content_extent`, so some row contains it.
    let start = rows.row_at_offset(min).unwrap_or(len - 1);

    // First row that starts at or after `max`.
    let end = match rows.row_at_offset(max) {
        Some(row) if rows.offset_of(row) == Some(max) => row,
        Some(row) => row + 1,
        None => len,
    }
    .max(start + 1);

    let before_extent = rows.offset_of(start).unwrap_or(0.0);
    let end_start = rows.offset_of(end).unwrap_or(content_extent);

    VisibleRows {
        start,
        end,
        before_extent,
        after_extent: (content_extent - end_start).max(0.0),
        content_extent,
    }
}
