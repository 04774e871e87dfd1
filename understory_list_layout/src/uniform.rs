// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row extents for lists where every row shares one fixed size.

use crate::RowExtents;

/// [`RowExtents`] where all rows share the same height and width.
///
/// Every query is O(1); nothing is stored per row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UniformRows {
    len: usize,
    height: f64,
    width: f64,
}

impl UniformRows {
    /// Creates `len` rows of the given `height` and `width`.
    #[must_use]
    pub fn new(len: usize, height: f64, width: f64) -> Self {
        debug_assert!(
            height.is_finite() && height >= 0.0,
            "UniformRows height must be finite and non-negative; got {height:?}"
        );
        debug_assert!(
            width.is_finite() && width >= 0.0,
            "UniformRows width must be finite and non-negative; got {width:?}"
        );
        Self { len, height, width }
    }

    /// The shared row height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl RowExtents for UniformRows {
    fn len(&self) -> usize {
        self.len
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn total_extent(&self) -> f64 {
        self.height * self.len as f64
    }

    fn extent_of(&self, row: usize) -> Option<f64> {
        (row < self.len).then_some(self.height)
    }

    fn offset_of(&self, row: usize) -> Option<f64> {
        (row < self.len).then(|| row as f64 * self.height)
    }

    fn row_at_offset(&self, offset: f64) -> Option<usize> {
        // Zero-height rows give a zero total, so the division below never sees 0.
        if offset.is_nan() || offset < 0.0 || offset >= self.total_extent() {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Offset is non-negative and below the total, and the row is clamped below"
        )]
        let mut row = ((offset / self.height) as usize).min(self.len - 1);
        // The quotient can land one row off; settle on the row whose
        // `offset_of` span contains `offset`.
        if row + 1 < self.len && (row + 1) as f64 * self.height <= offset {
            row += 1;
        } else if row > 0 && row as f64 * self.height > offset {
            row -= 1;
        }
        Some(row)
    }
}
