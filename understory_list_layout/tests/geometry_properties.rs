// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for row geometry through the public `ListLayout` API.

use core::convert::Infallible;

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_list_layout::{
    CellRenderer, CellState, CellView, ListHost, ListLayout, SingleSelection, SizingPolicy,
};

#[derive(Debug, Default)]
struct Cell {
    size: Size,
}

impl CellView for Cell {
    fn preferred_size(&self) -> Size {
        self.size
    }

    fn set_bounds(&mut self, _bounds: Rect) {}
}

#[derive(Debug, Default)]
struct Renderer {
    cell: Cell,
}

impl CellRenderer<Size> for Renderer {
    type View = Cell;
    type Error = Infallible;

    fn cell_view(
        &mut self,
        item: &Size,
        _index: usize,
        _state: CellState,
    ) -> Result<&mut Cell, Infallible> {
        self.cell.size = *item;
        Ok(&mut self.cell)
    }
}

#[derive(Debug, Default)]
struct Host;

impl ListHost for Host {
    type Color = u8;

    fn revalidate(&mut self) {}

    fn background(&self) -> u8 {
        0
    }
}

type Layout = ListLayout<Vec<Size>, Renderer, SingleSelection, Host>;

fn attached(items: Vec<Size>) -> Layout {
    let mut list = ListLayout::new(items, Renderer::default(), SingleSelection::new());
    list.attach(Host).unwrap();
    list
}

/// Whole-pixel sizes, for comparing sums of heights exactly.
fn items(max_len: usize) -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec(
        (0_u16..400, 1_u16..60).prop_map(|(w, h)| Size::new(f64::from(w), f64::from(h))),
        0..max_len,
    )
}

/// Arbitrary positive fractional sizes.
fn fractional_items(max_len: usize) -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec(
        (0.0_f64..400.0, 0.01_f64..60.0).prop_map(|(w, h)| Size::new(w, h)),
        0..max_len,
    )
}

proptest! {
    #[test]
    fn every_row_top_maps_back_to_its_row(items in fractional_items(64)) {
        let len = items.len();
        let mut list = attached(items);
        for row in 0..len {
            let top = list.row_top(row).unwrap().unwrap();
            prop_assert_eq!(list.row_at_offset(top).unwrap(), Some(row));
            let height = list.row_height(row).unwrap().unwrap();
            prop_assert_eq!(list.row_at_offset(top + height * 0.5).unwrap(), Some(row));
        }
        prop_assert_eq!(list.row_top(len).unwrap(), None);
    }

    #[test]
    fn every_uniform_row_top_maps_back_to_its_row(
        len in 1_usize..2000,
        width in 1.0_f64..500.0,
        height in 0.01_f64..100.0,
    ) {
        let mut list = attached(vec![Size::ZERO; len])
            .with_sizing(SizingPolicy::uniform(width, height));
        for row in 0..len {
            let top = list.row_top(row).unwrap().unwrap();
            prop_assert_eq!(list.row_at_offset(top).unwrap(), Some(row));
            prop_assert_eq!(list.row_at_offset(top + height * 0.5).unwrap(), Some(row));
        }
        prop_assert_eq!(list.row_top(len).unwrap(), None);
    }

    #[test]
    fn range_bounds_height_is_sum_of_row_heights(
        items in items(48),
        a in 0_usize..48,
        b in 0_usize..48,
    ) {
        let len = items.len();
        let heights: Vec<f64> = items.iter().map(|size| size.height).collect();
        let max_width = items.iter().map(|size| size.width).fold(0.0, f64::max);
        let mut list = attached(items);

        let bounds = list.bounds_of(a, b).unwrap();
        if a >= len || b >= len {
            prop_assert_eq!(bounds, None);
        } else {
            let (low, high) = (a.min(b), a.max(b));
            let expected: f64 = heights[low..=high].iter().sum();
            let bounds = bounds.unwrap();
            prop_assert_eq!(bounds.height(), expected);
            prop_assert_eq!(bounds.x0, 0.0);
            prop_assert_eq!(bounds.width(), max_width);
        }
    }

    #[test]
    fn preferred_size_is_widest_by_total_height(items in items(64)) {
        let total: f64 = items.iter().map(|size| size.height).sum();
        let max_width = items.iter().map(|size| size.width).fold(0.0, f64::max);
        let mut list = attached(items);
        prop_assert_eq!(list.preferred_size().unwrap(), Size::new(max_width, total));
        prop_assert_eq!(list.row_at_offset(total).unwrap(), None);
    }

    #[test]
    fn uniform_preferred_size_scales_with_len(
        len in 0_usize..2000,
        width in 1_u16..500,
        height in 1_u16..50,
    ) {
        let (width, height) = (f64::from(width), f64::from(height));
        let mut list = attached(vec![Size::ZERO; len])
            .with_sizing(SizingPolicy::uniform(width, height));
        let expected = if len == 0 {
            Size::ZERO
        } else {
            Size::new(width, height * len as f64)
        };
        prop_assert_eq!(list.preferred_size().unwrap(), expected);
        prop_assert_eq!(list.renderer().cell.size, Size::ZERO);
    }

    #[test]
    fn resize_reports_only_new_rows(before in items(32), after in items(32)) {
        let mut list = attached(before);
        list.preferred_size().unwrap();

        let len = after.len();
        let total: f64 = after.iter().map(|size| size.height).sum();
        *list.model_mut() = after;

        prop_assert_eq!(list.preferred_size().unwrap().height, total);
        prop_assert_eq!(list.row_height(len).unwrap(), None);
        if len > 0 {
            prop_assert_eq!(list.row_at_offset(total - 0.5).unwrap(), Some(len - 1));
        }
    }
}
