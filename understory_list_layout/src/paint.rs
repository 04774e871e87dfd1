// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background and per-row cell painting over fresh geometry.

use core::ops::Range;

use kurbo::{Point, Rect, Vec2};
use tracing::trace;

use crate::{
    CellRenderer, CellState, CellView, CoordinateMapper, LayoutError, ListModel, PaintCell,
    SelectionModel, Surface, VisibleRows,
};

/// Keeps a surface translated until dropped.
///
/// The origin is restored even when painting through the guard unwinds.
struct Translated<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    offset: Vec2,
}

impl<'a, S: Surface + ?Sized> Translated<'a, S> {
    fn new(surface: &'a mut S, offset: Vec2) -> Self {
        surface.translate(offset);
        Self { surface, offset }
    }

    fn surface(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for Translated<'_, S> {
    fn drop(&mut self) {
        self.surface.translate(-self.offset);
    }
}

/// Borrowed collaborators for one paint pass.
pub(crate) struct RenderPipeline<'a, M: ?Sized, R: ?Sized, Sel: ?Sized> {
    pub(crate) geometry: CoordinateMapper<'a>,
    pub(crate) model: &'a M,
    pub(crate) renderer: &'a mut R,
    pub(crate) selection: &'a Sel,
    /// Whether the host has focus; the selection lead is then painted focused.
    pub(crate) focused: bool,
}

impl<M, R, Sel> RenderPipeline<'_, M, R, Sel>
where
    M: ListModel + ?Sized,
    R: CellRenderer<M::Item> + ?Sized,
    Sel: SelectionModel + ?Sized,
{
    /// Fills the content rectangle, if it has any area.
    pub(crate) fn paint_background<S>(&self, surface: &mut S, color: S::Color)
    where
        S: Surface + ?Sized,
    {
        if let Some(content) = self.geometry.content_bounds()
            && !content.is_zero_area()
        {
            surface.fill_rect(content, color);
        }
    }

    /// Paints the background over the full content, then rows
    /// `0..min(visible_row_count, row_count)`.
    pub(crate) fn paint_leading_rows<S>(
        &mut self,
        surface: &mut S,
        visible_row_count: usize,
        background: S::Color,
    ) -> Result<(), LayoutError<R::Error>>
    where
        S: Surface + ?Sized,
        R::View: PaintCell<S>,
    {
        let rows = visible_row_count.min(self.geometry.row_count());
        if rows == 0 {
            return Ok(());
        }
        self.paint_background(surface, background);
        self.paint_rows(surface, 0..rows)
    }

    /// Paints the background and every row intersecting `region`.
    pub(crate) fn paint_region<S>(
        &mut self,
        surface: &mut S,
        region: Rect,
        background: S::Color,
    ) -> Result<VisibleRows, LayoutError<R::Error>>
    where
        S: Surface + ?Sized,
        R::View: PaintCell<S>,
    {
        let Some(content) = self.geometry.content_bounds() else {
            return Ok(VisibleRows::EMPTY);
        };
        let damage = content.intersect(region);
        if damage.is_zero_area() {
            return Ok(VisibleRows::EMPTY);
        }
        let visible = self.geometry.visible_rows(damage.y0, damage.y1);
        surface.fill_rect(damage, background);
        self.paint_rows(surface, visible.start..visible.end)?;
        Ok(visible)
    }

    fn paint_rows<S>(
        &mut self,
        surface: &mut S,
        rows: Range<usize>,
    ) -> Result<(), LayoutError<R::Error>>
    where
        S: Surface + ?Sized,
        R::View: PaintCell<S>,
    {
        trace!(start = rows.start, end = rows.end, "painting list rows");
        for row in rows {
            if let Some(bounds) = self.geometry.row_bounds(row) {
                self.paint_cell(surface, row, bounds)?;
            }
        }
        Ok(())
    }

    fn paint_cell<S>(
        &mut self,
        surface: &mut S,
        row: usize,
        bounds: Rect,
    ) -> Result<(), LayoutError<R::Error>>
    where
        S: Surface + ?Sized,
        R::View: PaintCell<S>,
    {
        let item = self.model.get(row).ok_or(LayoutError::MissingItem {
            index: row,
            len: self.model.len(),
        })?;

        let mut state = CellState::empty();
        if self.selection.is_selected(row) {
            state |= CellState::SELECTED;
        }
        if self.focused && self.selection.lead_index() == Some(row) {
            state |= CellState::FOCUSED;
        }

        let view = self
            .renderer
            .cell_view(item, row, state)
            .map_err(|source| LayoutError::Renderer { index: row, source })?;

        let mut translated = Translated::new(surface, bounds.origin().to_vec2());
        view.set_bounds(Rect::from_origin_size(Point::ORIGIN, bounds.size()));
        view.paint(translated.surface());
        Ok(())
    }
}
