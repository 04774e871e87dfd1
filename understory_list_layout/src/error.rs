// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by geometry queries and painting.

use thiserror::Error;

/// Errors from a [`ListLayout`](crate::ListLayout).
///
/// Out-of-range rows and offsets are not errors; those queries return `None`.
/// `E` is the cell renderer's error type.
#[derive(Debug, Error)]
pub enum LayoutError<E> {
    /// Geometry was requested before the layout was ever attached to a host.
    #[error("list layout has not been attached to a host")]
    Unattached,

    /// Geometry was requested after the layout was detached from its host.
    #[error("list layout was detached from its host")]
    Detached,

    /// The model reported `len` items but had none at `index`.
    #[error("list model reported {len} items but has none at index {index}")]
    MissingItem {
        /// Row that could not be fetched.
        index: usize,
        /// Length the model reported.
        len: usize,
    },

    /// The cell renderer failed to produce a view for a row.
    #[error("cell renderer failed at row {index}")]
    Renderer {
        /// Row being measured or painted.
        index: usize,
        /// Renderer error.
        #[source]
        source: E,
    },
}

impl<E> LayoutError<E> {
    /// Returns `true` for [`LayoutError::Unattached`] and [`LayoutError::Detached`].
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Unattached | Self::Detached)
    }
}
