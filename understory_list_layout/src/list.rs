// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine a list widget delegates layout and painting to.

use core::mem;

use kurbo::{Point, Rect, Size};
use tracing::{debug, trace, warn};

use crate::cache::GeometryCache;
use crate::invalidation::InvalidationController;
use crate::paint::RenderPipeline;
use crate::{
    CellRenderer, CoordinateMapper, LayoutError, LayoutState, ListEvent, ListHost, ListModel,
    PaintCell, SelectionModel, SizingPolicy, Surface, VisibleRows,
};

/// Cached row layout and cell painting for one list widget.
///
/// This type:
/// - owns the item model, cell renderer, selection model, and sizing policy,
/// - caches per-row geometry and rebuilds it lazily after any change that can
///   affect it,
/// - maps between rows and pixel offsets,
/// - paints the rows of a region through the renderer's flyweight view.
///
/// The host widget is attached with [`ListLayout::attach`]. Geometry queries
/// made before that fail with [`LayoutError::Unattached`], and queries made
/// after [`ListLayout::detach`] fail with [`LayoutError::Detached`].
///
/// Mutable access to the model, renderer, or sizing policy marks the
/// geometry stale and asks the host to revalidate. Mutable access to the
/// selection or host does not, since neither affects row sizes.
#[derive(Debug)]
pub struct ListLayout<M, R, Sel, H> {
    model: M,
    renderer: R,
    selection: Sel,
    host: Option<H>,
    sizing: SizingPolicy,
    cache: GeometryCache,
    invalidation: InvalidationController,
}

impl<M, R, Sel, H> ListLayout<M, R, Sel, H>
where
    M: ListModel,
    R: CellRenderer<M::Item>,
    Sel: SelectionModel,
    H: ListHost,
{
    /// Creates an unattached layout with no fixed cell size.
    #[must_use]
    pub fn new(model: M, renderer: R, selection: Sel) -> Self {
        Self {
            model,
            renderer,
            selection,
            host: None,
            sizing: SizingPolicy::VARIABLE,
            cache: GeometryCache::new(),
            invalidation: InvalidationController::new(),
        }
    }

    /// Sets the initial sizing policy.
    #[must_use]
    pub fn with_sizing(mut self, sizing: SizingPolicy) -> Self {
        self.sizing = sizing;
        self
    }

    /// Attaches the layout to `host`, returning any previously attached host.
    ///
    /// Geometry becomes stale and the new host is asked to revalidate. Once
    /// detached, a layout cannot be attached again; `host` is dropped and
    /// [`LayoutError::Detached`] is returned.
    pub fn attach(&mut self, host: H) -> Result<Option<H>, LayoutError<R::Error>> {
        if !self.invalidation.attach() {
            return Err(LayoutError::Detached);
        }
        debug!("list layout attached");
        let previous = self.host.replace(host);
        if let Some(host) = self.host.as_mut() {
            host.revalidate();
        }
        Ok(previous)
    }

    /// Detaches from the host and returns it. No further geometry operations
    /// are valid afterwards.
    pub fn detach(&mut self) -> Option<H> {
        debug!("list layout detached");
        self.invalidation.detach();
        self.host.take()
    }

    /// Consumes the layout and returns its model, renderer, and selection.
    #[must_use]
    pub fn into_parts(self) -> (M, R, Sel) {
        (self.model, self.renderer, self.selection)
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LayoutState {
        self.invalidation.state()
    }

    /// The attached host, if any.
    #[must_use]
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Mutable access to the attached host. Does not invalidate geometry.
    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// The item model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the item model. Marks geometry stale.
    pub fn model_mut(&mut self) -> &mut M {
        self.invalidate();
        &mut self.model
    }

    /// Replaces the item model, returning the old one. Marks geometry stale.
    pub fn set_model(&mut self, model: M) -> M {
        self.invalidate();
        mem::replace(&mut self.model, model)
    }

    /// The cell renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the cell renderer. Marks geometry stale.
    pub fn renderer_mut(&mut self) -> &mut R {
        self.invalidate();
        &mut self.renderer
    }

    /// Replaces the cell renderer, returning the old one. Marks geometry stale.
    pub fn set_renderer(&mut self, renderer: R) -> R {
        self.invalidate();
        mem::replace(&mut self.renderer, renderer)
    }

    /// The selection model.
    #[must_use]
    pub fn selection(&self) -> &Sel {
        &self.selection
    }

    /// Mutable access to the selection model. Does not invalidate geometry.
    pub fn selection_mut(&mut self) -> &mut Sel {
        &mut self.selection
    }

    /// The current sizing policy.
    #[must_use]
    pub const fn sizing(&self) -> SizingPolicy {
        self.sizing
    }

    /// Replaces the sizing policy. Marks geometry stale if it changed.
    pub fn set_sizing(&mut self, sizing: SizingPolicy) {
        if sizing != self.sizing {
            self.sizing = sizing;
            self.invalidate();
        }
    }

    /// Sets or clears the fixed cell width.
    pub fn set_fixed_cell_width(&mut self, width: Option<f64>) {
        self.set_sizing(SizingPolicy {
            fixed_cell_width: width,
            ..self.sizing
        });
    }

    /// Sets or clears the fixed cell height.
    pub fn set_fixed_cell_height(&mut self, height: Option<f64>) {
        self.set_sizing(SizingPolicy {
            fixed_cell_height: height,
            ..self.sizing
        });
    }

    /// Marks geometry stale and asks the host to revalidate.
    pub fn invalidate(&mut self) {
        if self.invalidation.invalidate() {
            trace!("list geometry invalidated");
            if let Some(host) = self.host.as_mut() {
                host.revalidate();
            }
        }
    }

    /// Applies a change notification. Returns `true` if geometry was invalidated.
    pub fn handle_event(&mut self, event: ListEvent) -> bool {
        if event.invalidates_layout() {
            self.invalidate();
            true
        } else {
            false
        }
    }

    /// Rebuilds geometry if it is stale.
    ///
    /// On failure geometry stays stale and the next query retries the rebuild.
    ///
    /// Calling this before [`ListLayout::attach`] is a programming error: it
    /// panics in debug builds and returns [`LayoutError::Unattached`] otherwise.
    pub fn ensure_fresh(&mut self) -> Result<(), LayoutError<R::Error>> {
        debug_assert!(
            self.state() != LayoutState::Unattached,
            "list geometry requested before the layout was attached to a host"
        );
        let Self {
            model,
            renderer,
            sizing,
            cache,
            invalidation,
            ..
        } = self;
        invalidation
            .ensure_fresh(|| cache.rebuild(&*model, renderer, *sizing))
            .inspect_err(|err| {
                if !err.is_lifecycle() {
                    warn!(%err, "list geometry rebuild failed");
                }
            })
    }

    /// Fresh row geometry.
    pub fn geometry(&mut self) -> Result<CoordinateMapper<'_>, LayoutError<R::Error>> {
        self.ensure_fresh()?;
        Ok(CoordinateMapper::new(&self.cache))
    }

    /// Size needed to show every row; zero for an empty list.
    pub fn preferred_size(&mut self) -> Result<Size, LayoutError<R::Error>> {
        Ok(self.geometry()?.preferred_size())
    }

    /// Largest size the list can usefully take, which is unbounded.
    #[must_use]
    pub const fn maximum_size(&self) -> Size {
        Size::new(f64::INFINITY, f64::INFINITY)
    }

    /// Bounding rectangle of rows `a..=b`, or `None` if either is out of range.
    pub fn bounds_of(&mut self, a: usize, b: usize) -> Result<Option<Rect>, LayoutError<R::Error>> {
        Ok(self.geometry()?.bounds_of(a, b))
    }

    /// Height of `row`, or `None` if out of range.
    pub fn row_height(&mut self, row: usize) -> Result<Option<f64>, LayoutError<R::Error>> {
        Ok(self.geometry()?.row_height(row))
    }

    /// Offset of the top edge of `row`, or `None` if out of range.
    pub fn row_top(&mut self, row: usize) -> Result<Option<f64>, LayoutError<R::Error>> {
        Ok(self.geometry()?.row_top(row))
    }

    /// The row containing vertical offset `y`, or `None` outside every row.
    pub fn row_at_offset(&mut self, y: f64) -> Result<Option<usize>, LayoutError<R::Error>> {
        Ok(self.geometry()?.row_at_offset(y))
    }

    /// The row under `point`, or `None` outside every row.
    pub fn location_to_index(&mut self, point: Point) -> Result<Option<usize>, LayoutError<R::Error>> {
        Ok(self.geometry()?.location_to_index(point))
    }

    /// Top-left corner of `row`, or `None` if out of range.
    pub fn index_to_location(&mut self, row: usize) -> Result<Option<Point>, LayoutError<R::Error>> {
        Ok(self.geometry()?.index_to_location(row))
    }

    /// Rows intersecting the vertical span `[top, bottom)`.
    pub fn visible_rows(&mut self, top: f64, bottom: f64) -> Result<VisibleRows, LayoutError<R::Error>> {
        Ok(self.geometry()?.visible_rows(top, bottom))
    }

    /// Selects the row under `point`, as a pointer press would.
    ///
    /// Returns the selected row, or `None` (leaving the selection untouched)
    /// if the point is outside every row.
    pub fn select_at(&mut self, point: Point) -> Result<Option<usize>, LayoutError<R::Error>> {
        let row = self.location_to_index(point)?;
        if let Some(row) = row {
            self.selection.set_selected_index(row);
        }
        Ok(row)
    }

    fn pipeline(&mut self) -> Result<(RenderPipeline<'_, M, R, Sel>, H::Color), LayoutError<R::Error>> {
        self.ensure_fresh()?;
        let Self {
            model,
            renderer,
            selection,
            host,
            cache,
            ..
        } = self;
        let host = host.as_ref().ok_or(LayoutError::Unattached)?;
        let pipeline = RenderPipeline {
            geometry: CoordinateMapper::new(cache),
            model: &*model,
            renderer,
            selection: &*selection,
            focused: host.has_focus(),
        };
        Ok((pipeline, host.background()))
    }

    /// Paints the host background over the full preferred size.
    pub fn paint_background<S>(&mut self, surface: &mut S) -> Result<(), LayoutError<R::Error>>
    where
        S: Surface<Color = H::Color> + ?Sized,
    {
        let (pipeline, background) = self.pipeline()?;
        pipeline.paint_background(surface, background);
        Ok(())
    }

    /// Paints the background over the full preferred size, then the first
    /// `min(visible_row_count, row count)` rows. Paints nothing if that is zero.
    ///
    /// Each row is painted with the surface origin translated to the row's
    /// top-left corner; the translation is undone afterwards even if the cell
    /// panics. Selection and focus are read from the collaborators now, not
    /// from the geometry cache.
    pub fn paint<S>(
        &mut self,
        surface: &mut S,
        visible_row_count: usize,
    ) -> Result<(), LayoutError<R::Error>>
    where
        S: Surface<Color = H::Color> + ?Sized,
        R::View: PaintCell<S>,
    {
        let (mut pipeline, background) = self.pipeline()?;
        pipeline.paint_leading_rows(surface, visible_row_count, background)
    }

    /// Paints the background and only the rows intersecting `region`.
    ///
    /// Returns the rows that were painted.
    pub fn paint_region<S>(
        &mut self,
        surface: &mut S,
        region: Rect,
    ) -> Result<VisibleRows, LayoutError<R::Error>>
    where
        S: Surface<Color = H::Color> + ?Sized,
        R::View: PaintCell<S>,
    {
        let (mut pipeline, background) = self.pipeline()?;
        pipeline.paint_region(surface, region, background)
    }
}
