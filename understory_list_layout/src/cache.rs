// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row geometry, rebuilt in full from the model and renderer.

use tracing::debug;

use crate::{
    CellRenderer, CellState, CellView, LayoutError, LayoutMode, ListModel, MeasuredRows,
    RowExtents, SizingPolicy, UniformRows,
};

/// Row geometry owned by a single [`ListLayout`](crate::ListLayout).
///
/// Only read through a [`CoordinateMapper`](crate::CoordinateMapper), which
/// can only be obtained once the cache is fresh.
#[derive(Debug, Default)]
pub(crate) struct GeometryCache {
    mode: LayoutMode,
    uniform: UniformRows,
    // Kept across mode switches so its storage is reused.
    measured: MeasuredRows,
}

impl GeometryCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Recomputes all row geometry.
    ///
    /// With both fixed dimensions set this is O(1). Otherwise every row is
    /// measured once through `renderer`, with the placeholder index `0` and
    /// no selection or focus state.
    pub(crate) fn rebuild<M, R>(
        &mut self,
        model: &M,
        renderer: &mut R,
        sizing: SizingPolicy,
    ) -> Result<(), LayoutError<R::Error>>
    where
        M: ListModel + ?Sized,
        R: CellRenderer<M::Item> + ?Sized,
    {
        let row_count = model.len();
        self.mode = sizing.mode();
        match sizing.fixed_size() {
            Some(size) => {
                self.uniform = UniformRows::new(row_count, size.height, size.width);
            }
            None => {
                self.measured.try_rebuild(row_count, |row| -> Result<_, LayoutError<R::Error>> {
                    let item = model.get(row).ok_or(LayoutError::MissingItem {
                        index: row,
                        len: row_count,
                    })?;
                    let view = renderer
                        .cell_view(item, 0, CellState::empty())
                        .map_err(|source| LayoutError::Renderer { index: row, source })?;
                    Ok(view.preferred_size())
                })?;
            }
        }

        debug!(
            rows = row_count,
            mode = ?self.mode,
            width = self.rows().width(),
            height = self.rows().total_extent(),
            "rebuilt list geometry"
        );
        Ok(())
    }

    pub(crate) const fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// The active row extents for the current mode.
    pub(crate) fn rows(&self) -> &dyn RowExtents {
        match self.mode {
            LayoutMode::Uniform => &self.uniform,
            LayoutMode::Variable => &self.measured,
        }
    }
}
