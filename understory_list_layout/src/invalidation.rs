// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle and staleness tracking for the geometry cache.

use crate::LayoutError;

/// Lifecycle state of a [`ListLayout`](crate::ListLayout).
///
/// `Unattached → Stale ⇄ Fresh → Detached`. `Detached` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutState {
    /// Never attached to a host; no geometry can exist yet.
    Unattached,
    /// Attached, and the cache must be rebuilt before the next geometry read.
    Stale,
    /// Attached, and the cache matches the model and sizing policy.
    Fresh,
    /// Detached from its host. No further geometry operations are valid.
    Detached,
}

/// Tracks whether the geometry cache may be read and rebuilds it on demand.
#[derive(Debug)]
pub(crate) struct InvalidationController {
    state: LayoutState,
}

impl InvalidationController {
    pub(crate) const fn new() -> Self {
        Self {
            state: LayoutState::Unattached,
        }
    }

    pub(crate) const fn state(&self) -> LayoutState {
        self.state
    }

    /// Moves into [`LayoutState::Stale`]. Returns `false` once detached.
    pub(crate) fn attach(&mut self) -> bool {
        if self.state == LayoutState::Detached {
            return false;
        }
        self.state = LayoutState::Stale;
        true
    }

    pub(crate) fn detach(&mut self) {
        self.state = LayoutState::Detached;
    }

    /// Marks the cache stale.
    ///
    /// Returns `true` if the layout is attached, meaning the host should be
    /// asked to revalidate.
    pub(crate) fn invalidate(&mut self) -> bool {
        match self.state {
            LayoutState::Stale | LayoutState::Fresh => {
                self.state = LayoutState::Stale;
                true
            }
            LayoutState::Unattached | LayoutState::Detached => false,
        }
    }

    /// Runs `rebuild` if the cache is stale, then marks it fresh.
    ///
    /// A failed rebuild leaves the cache stale, so the next call retries.
    /// Calling this again without an intervening [`Self::invalidate`] is a
    /// no-op.
    pub(crate) fn ensure_fresh<E>(
        &mut self,
        rebuild: impl FnOnce() -> Result<(), LayoutError<E>>,
    ) -> Result<(), LayoutError<E>> {
        match self.state {
            LayoutState::Fresh => Ok(()),
            LayoutState::Stale => {
                rebuild()?;
                self.state = LayoutState::Fresh;
                Ok(())
            }
            LayoutState::Unattached => Err(LayoutError::Unattached),
            LayoutState::Detached => Err(LayoutError::Detached),
        }
    }
}
