// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured row heights with a prefix-offset index.

use alloc::vec::Vec;

use kurbo::Size;

use crate::RowExtents;

/// [`RowExtents`] backed by per-row measured heights and their prefix sums.
///
/// The whole index is rebuilt in a single pass by [`MeasuredRows::try_rebuild`];
/// it is never patched row by row, since one changed row shifts every row
/// below it. After a rebuild, offsets are O(1) and
/// [`RowExtents::row_at_offset`] is a binary search over the row tops.
#[derive(Clone, Default, Debug)]
pub struct MeasuredRows {
    heights: Vec<f64>,
    starts: Vec<f64>,
    total: f64,
    max_width: f64,
}

impl MeasuredRows {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-measures `len` rows, calling `measure(row)` once per row in order.
    ///
    /// Storage is resized in place, so rebuilding with an unchanged row count
    /// does not reallocate. If `measure` fails the error is returned as-is and
    /// the index is left partially written; callers must treat it as stale.
    pub fn try_rebuild<E>(
        &mut self,
        len: usize,
        mut measure: impl FnMut(usize) -> Result<Size, E>,
    ) -> Result<(), E> {
        self.heights.resize(len, 0.0);
        self.starts.resize(len, 0.0);
        self.total = 0.0;
        self.max_width = 0.0;

        let mut pos = 0.0;
        for row in 0..len {
            let size = measure(row)?;
            debug_assert!(
                size.height.is_finite() && size.height >= 0.0,
                "measured row heights must be finite and non-negative; got {:?} at row {row}",
                size.height
            );
            debug_assert!(
                size.width.is_finite() && size.width >= 0.0,
                "measured row widths must be finite and non-negative; got {:?} at row {row}",
                size.width
            );
            self.starts[row] = pos;
            self.heights[row] = size.height;
            self.max_width = self.max_width.max(size.width);
            pos += size.height;
        }
        self.total = pos;
        Ok(())
    }

    /// The measured heights, one per row.
    #[must_use]
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }
}

impl RowExtents for MeasuredRows {
    fn len(&self) -> usize {
        self.heights.len()
    }

    fn width(&self) -> f64 {
        self.max_width
    }

    fn total_extent(&self) -> f64 {
        self.total
    }

    fn extent_of(&self, row: usize) -> Option<f64> {
        self.heights.get(row).copied()
    }

    fn offset_of(&self, row: usize) -> Option<f64> {
        self.starts.get(row).copied()
    }

    fn row_at_offset(&self, offset: f64) -> Option<usize> {
        if offset.is_nan() || offset < 0.0 || offset >= self.total {
            return None;
        }
        // Last row starting at or before `offset`. Zero-height rows sharing a
        // start with the following row are skipped, since they contain nothing.
        let after = self.starts.partition_point(|&start| start <= offset);
        after.checked_sub(1)
    }
}
