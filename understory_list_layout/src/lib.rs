// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory List Layout: cached row geometry and flyweight cell painting for list views.
//!
//! A list widget hands its item model, a cell renderer, and a selection model
//! to a [`ListLayout`] and delegates three jobs to it:
//!
//! - answering geometry questions: the list's preferred size, the bounds of a
//!   row range, and which row sits under a pixel offset,
//! - keeping that geometry cached, and rebuilding it lazily after anything
//!   that can change row sizes,
//! - painting the rows of a region through a single reused cell view.
//!
//! The core pieces are:
//!
//! - [`SizingPolicy`]: optional fixed cell width and height. When both are
//!   set every row has the same size ([`LayoutMode::Uniform`]) and nothing is
//!   measured; otherwise each row is measured through the renderer
//!   ([`LayoutMode::Variable`]).
//! - [`RowExtents`]: a stack of rows with per-row heights and offset lookups,
//!   implemented by [`UniformRows`] (O(1) everywhere) and [`MeasuredRows`]
//!   (prefix sums with an O(log n) offset search).
//! - [`CoordinateMapper`]: a read-only view of fresh geometry, obtained from
//!   [`ListLayout::geometry`].
//! - [`CellRenderer`]: hands out a mutably borrowed [`CellView`], so a
//!   renderer may reuse one view for every row and the borrow checker makes
//!   sure no caller keeps it past the next request.
//!
//! The host widget implements [`ListHost`] and is attached with
//! [`ListLayout::attach`]. Edits made through [`ListLayout::model_mut`],
//! [`ListLayout::renderer_mut`], or the sizing setters mark geometry stale and
//! ask the host to revalidate; change notifications from elsewhere go through
//! [`ListLayout::handle_event`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::convert::Infallible;
//!
//! use kurbo::{Point, Rect, Size};
//! use understory_list_layout::{
//!     CellRenderer, CellState, CellView, ListHost, ListLayout, SingleSelection,
//! };
//!
//! // A cell whose preferred height is one line per 10 characters.
//! #[derive(Default)]
//! struct TextCell {
//!     lines: usize,
//!     bounds: Rect,
//! }
//!
//! impl CellView for TextCell {
//!     fn preferred_size(&self) -> Size {
//!         Size::new(120.0, 16.0 * self.lines as f64)
//!     }
//!
//!     fn set_bounds(&mut self, bounds: Rect) {
//!         self.bounds = bounds;
//!     }
//! }
//!
//! #[derive(Default)]
//! struct TextRenderer {
//!     cell: TextCell,
//! }
//!
//! impl CellRenderer<&'static str> for TextRenderer {
//!     type View = TextCell;
//!     type Error = Infallible;
//!
//!     fn cell_view(
//!         &mut self,
//!         item: &&'static str,
//!         _index: usize,
//!         _state: CellState,
//!     ) -> Result<&mut TextCell, Infallible> {
//!         self.cell.lines = item.len().div_ceil(10).max(1);
//!         Ok(&mut self.cell)
//!     }
//! }
//!
//! struct Host;
//!
//! impl ListHost for Host {
//!     type Color = u32;
//!
//!     fn revalidate(&mut self) {}
//!
//!     fn background(&self) -> u32 {
//!         0xffff_ffff
//!     }
//! }
//!
//! let items = vec!["short", "a somewhat longer item", "tiny"];
//! let mut list = ListLayout::new(items, TextRenderer::default(), SingleSelection::new());
//! list.attach(Host).unwrap();
//!
//! // Rows are 16, 48, and 16 pixels tall.
//! assert_eq!(list.preferred_size().unwrap(), Size::new(120.0, 80.0));
//! assert_eq!(list.row_at_offset(20.0).unwrap(), Some(1));
//! assert_eq!(list.index_to_location(2).unwrap(), Some(Point::new(0.0, 64.0)));
//!
//! // Editing the model marks geometry stale; the next query re-measures.
//! list.model_mut().push("one more");
//! assert_eq!(list.preferred_size().unwrap().height, 96.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod error;
mod event;
mod extents;
mod host;
mod invalidation;
mod list;
mod mapper;
mod paint;
mod prefix_sum;
mod selection;
mod sizing;
mod uniform;

#[cfg(test)]
mod test_util;

pub use error::LayoutError;
pub use event::{ListEvent, ListProperty};
pub use extents::{RowExtents, VisibleRows, compute_visible_rows};
pub use host::{
    CellRenderer, CellState, CellView, ListHost, ListModel, PaintCell, SelectionModel, Surface,
};
pub use invalidation::LayoutState;
pub use list::ListLayout;
pub use mapper::CoordinateMapper;
pub use prefix_sum::MeasuredRows;
pub use selection::SingleSelection;
pub use sizing::{LayoutMode, SizingPolicy};
pub use uniform::UniformRows;
