// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by the unit tests.

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

use crate::{CellRenderer, CellState, CellView, ListHost, PaintCell, Surface};

#[derive(Debug, thiserror::Error)]
#[error("cannot measure an item with a NaN width")]
pub(crate) struct NanItem;

/// Flyweight cell whose preferred size is the item itself.
#[derive(Debug, Default)]
pub(crate) struct SizeCell {
    size: Size,
    index: usize,
    state: CellState,
    bounds: Rect,
}

impl CellView for SizeCell {
    fn preferred_size(&self) -> Size {
        self.size
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

impl PaintCell<RecordingSurface> for SizeCell {
    fn paint(&mut self, surface: &mut RecordingSurface) {
        surface.ops.push(Op::Cell {
            index: self.index,
            state: self.state,
            origin: surface.origin,
            local_bounds: self.bounds,
        });
    }
}

/// Renderer over `Size` items that reuses one [`SizeCell`] for every request.
#[derive(Debug, Default)]
pub(crate) struct SizeRenderer {
    cell: SizeCell,
    pub(crate) requests: usize,
    pub(crate) seen: Vec<(usize, CellState)>,
    pub(crate) fail_on_nan: bool,
}

impl CellRenderer<Size> for SizeRenderer {
    type View = SizeCell;
    type Error = NanItem;

    fn cell_view(
        &mut self,
        item: &Size,
        index: usize,
        state: CellState,
    ) -> Result<&mut SizeCell, NanItem> {
        self.requests += 1;
        self.seen.push((index, state));
        if self.fail_on_nan && item.width.is_nan() {
            return Err(NanItem);
        }
        self.cell.size = *item;
        self.cell.index = index;
        self.cell.state = state;
        Ok(&mut self.cell)
    }
}

/// Something drawn onto a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op {
    Fill {
        rect: Rect,
        color: u32,
    },
    Cell {
        index: usize,
        state: CellState,
        origin: Vec2,
        local_bounds: Rect,
    },
}

/// Surface that records fills (in absolute coordinates) and cell paints.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) origin: Vec2,
    pub(crate) ops: Vec<Op>,
}

impl RecordingSurface {
    pub(crate) fn painted_rows(&self) -> Vec<(usize, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Cell { index, origin, .. } => Some((*index, origin.y)),
                Op::Fill { .. } => None,
            })
            .collect()
    }

    pub(crate) fn fills(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill { rect, .. } => Some(*rect),
                Op::Cell { .. } => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Color = u32;

    fn translate(&mut self, offset: Vec2) {
        self.origin += offset;
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        self.ops.push(Op::Fill {
            rect: rect + self.origin,
            color,
        });
    }
}

/// Host that counts revalidation requests.
#[derive(Debug, Default)]
pub(crate) struct TestHost {
    pub(crate) revalidations: usize,
    pub(crate) focused: bool,
}

impl TestHost {
    pub(crate) const BACKGROUND: u32 = 0x00ff_ffff;
}

impl ListHost for TestHost {
    type Color = u32;

    fn revalidate(&mut self) {
        self.revalidations += 1;
    }

    fn background(&self) -> u32 {
        Self::BACKGROUND
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}
