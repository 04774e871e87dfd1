// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal single-row selection model.

use crate::SelectionModel;

/// Selection holding at most one row, which is also the lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleSelection {
    selected: Option<usize>,
}

impl SingleSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// The selected row, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

impl SelectionModel for SingleSelection {
    fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    fn lead_index(&self) -> Option<usize> {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use super::SingleSelection;
    use crate::SelectionModel;

    #[test]
    fn selecting_replaces_previous_row() {
        let mut selection = SingleSelection::new();
        assert_eq!(selection.lead_index(), None);

        selection.set_selected_index(2);
        selection.set_selected_index(4);
        assert!(!selection.is_selected(2));
        assert!(selection.is_selected(4));
        assert_eq!(selection.lead_index(), Some(4));

        selection.clear();
        assert_eq!(selection.selected(), None);
    }
}
