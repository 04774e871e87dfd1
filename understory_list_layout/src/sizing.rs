// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size policy and the layout mode derived from it.

use kurbo::Size;

/// How row geometry is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Every row shares the fixed cell width and height. Nothing is measured.
    Uniform,
    /// Every row is measured through the cell renderer.
    #[default]
    Variable,
}

/// Optional fixed cell dimensions supplied by the host.
///
/// Setting *both* dimensions selects [`LayoutMode::Uniform`]; anything else
/// selects [`LayoutMode::Variable`]. The mode is always derived from the
/// policy again on every rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizingPolicy {
    /// Fixed width of every cell, if any.
    pub fixed_cell_width: Option<f64>,
    /// Fixed height of every cell, if any.
    pub fixed_cell_height: Option<f64>,
}

impl SizingPolicy {
    /// No fixed dimensions: every row is measured.
    pub const VARIABLE: Self = Self {
        fixed_cell_width: None,
        fixed_cell_height: None,
    };

    /// A policy with both dimensions fixed.
    #[must_use]
    pub const fn uniform(width: f64, height: f64) -> Self {
        Self {
            fixed_cell_width: Some(width),
            fixed_cell_height: Some(height),
        }
    }

    /// Returns a copy with the fixed cell width set.
    #[must_use]
    pub const fn with_fixed_cell_width(mut self, width: f64) -> Self {
        self.fixed_cell_width = Some(width);
        self
    }

    /// Returns a copy with the fixed cell height set.
    #[must_use]
    pub const fn with_fixed_cell_height(mut self, height: f64) -> Self {
        self.fixed_cell_height = Some(height);
        self
    }

    /// The shared cell size, when both dimensions are fixed.
    #[must_use]
    pub const fn fixed_size(&self) -> Option<Size> {
        match (self.fixed_cell_width, self.fixed_cell_height) {
            (Some(width), Some(height)) => Some(Size::new(width, height)),
            _ => None,
        }
    }

    /// The layout mode this policy selects.
    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        if self.fixed_size().is_some() {
            LayoutMode::Uniform
        } else {
            LayoutMode::Variable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutMode, SizingPolicy};

    #[test]
    fn both_dimensions_are_required_for_uniform_mode() {
        assert_eq!(SizingPolicy::VARIABLE.mode(), LayoutMode::Variable);
        assert_eq!(
            SizingPolicy::VARIABLE.with_fixed_cell_height(20.0).mode(),
            LayoutMode::Variable
        );
        assert_eq!(
            SizingPolicy::VARIABLE.with_fixed_cell_width(80.0).mode(),
            LayoutMode::Variable
        );

        let policy = SizingPolicy::VARIABLE
            .with_fixed_cell_width(80.0)
            .with_fixed_cell_height(20.0);
        assert_eq!(policy, SizingPolicy::uniform(80.0, 20.0));
        assert_eq!(policy.mode(), LayoutMode::Uniform);
        assert_eq!(policy.fixed_size(), Some(kurbo::Size::new(80.0, 20.0)));
    }
}
