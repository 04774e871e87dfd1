// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications a host forwards from its model and properties.

/// A list property whose change may affect row geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListProperty {
    /// The item model was replaced.
    Model,
    /// The cell renderer was replaced.
    CellRenderer,
    /// The fixed cell width changed.
    FixedCellWidth,
    /// The fixed cell height changed.
    FixedCellHeight,
    /// The font used by cells changed.
    Font,
    /// Any other bound property.
    Other,
}

/// A change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListEvent {
    /// Items changed in a way not expressible as an insertion or removal.
    ContentsChanged,
    /// Rows `first..=last` were inserted.
    IntervalAdded {
        /// First inserted row.
        first: usize,
        /// Last inserted row.
        last: usize,
    },
    /// Rows `first..=last` were removed.
    IntervalRemoved {
        /// First removed row.
        first: usize,
        /// Last removed row.
        last: usize,
    },
    /// A bound property of the list changed.
    PropertyChanged(ListProperty),
    /// The selection changed. Row geometry is unaffected.
    SelectionChanged,
}

impl ListEvent {
    /// Whether this event makes cached row geometry stale.
    ///
    /// Any model change can shift every row below it, and every property
    /// change is treated as potentially size-affecting.
    #[must_use]
    pub const fn invalidates_layout(self) -> bool {
        !matches!(self, Self::SelectionChanged)
    }
}

#[cfg(test)]
mod tests {
    use super::{ListEvent, ListProperty};

    #[test]
    fn only_selection_changes_keep_geometry() {
        assert!(ListEvent::ContentsChanged.invalidates_layout());
        assert!(ListEvent::IntervalAdded { first: 0, last: 2 }.invalidates_layout());
        assert!(ListEvent::IntervalRemoved { first: 1, last: 1 }.invalidates_layout());
        assert!(ListEvent::PropertyChanged(ListProperty::Font).invalidates_layout());
        assert!(!ListEvent::SelectionChanged.invalidates_layout());
    }
}
