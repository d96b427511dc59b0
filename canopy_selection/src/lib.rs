// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_selection --heading-base-level=0

//! Canopy Selection: which canvas objects are selected, and which one a click
//! should pick next.
//!
//! This crate holds the two pieces of selection logic that do not depend on
//! geometry:
//! - [`Selection`], the set of selected keys plus a **primary** key (the most
//!   recently selected) and a **revision** counter that bumps whenever the
//!   contents change.
//! - [`cycle_target`], which resolves a click over several stacked objects to
//!   the one that should become selected, so repeated clicks walk through the
//!   stack in priority order.
//!
//! Keys only need `PartialEq`; generational handles from a scene work as-is.
//! The crate does not know where objects are or whether they are visible.
//! Callers hit test first and hand the ordered candidates to
//! [`cycle_target`], and they keep any per-object "selected" flags in sync
//! with the [`Selection`] they own.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_selection::{Candidate, Selection, cycle_target};
//!
//! let mut selection = Selection::<u32>::new();
//!
//! // Three objects stacked at the click point, all at the same priority.
//! let under_pointer = [10_u32, 20, 30];
//! for _ in 0..4 {
//!     let candidates: Vec<_> = under_pointer
//!         .iter()
//!         .map(|&k| Candidate::new(k, 1000, selection.contains(&k)))
//!         .collect();
//!     let winner = cycle_target(&candidates, false).unwrap();
//!     selection.select_only(candidates[winner].key);
//! }
//!
//! // 10, 20, 30, then back to 10.
//! assert_eq!(selection.items(), &[10]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

mod cycle;

pub use cycle::{Candidate, cycle_target};

/// The set of selected keys, with a primary key and a revision.
///
/// Keys are kept unique in a small `Vec<T>` in the order they were selected.
#[derive(Clone, Debug)]
pub struct Selection<T> {
    items: Vec<T>,
    primary: Option<usize>,
    revision: u64,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected keys in selection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the most recently selected key that is still selected.
    #[must_use]
    pub fn primary(&self) -> Option<&T> {
        self.primary.map(|idx| &self.items[idx])
    }

    /// Returns the revision counter.
    ///
    /// It bumps only when a call changes the contents or the primary key, so
    /// observers can compare it to skip work.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    /// Keeps only the keys for which `keep` returns `true`.
    ///
    /// The primary key survives if it is kept; otherwise the last remaining
    /// key becomes primary.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let before = self.items.len();
        let old_primary = self.primary;
        let mut idx = 0;
        let mut kept_count = 0;
        let mut new_primary = None;
        self.items.retain(|key| {
            let kept = keep(key);
            if kept {
                if old_primary == Some(idx) {
                    new_primary = Some(kept_count);
                }
                kept_count += 1;
            }
            idx += 1;
            kept
        });
        if self.items.len() != before {
            self.primary = new_primary.or_else(|| self.items.len().checked_sub(1));
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Replaces the selection with `key` alone.
    pub fn select_only(&mut self, key: T) {
        if self.items.len() == 1 && self.items[0] == key {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.primary = Some(0);
        self.bump_revision();
    }

    /// Adds `key` and makes it primary.
    pub fn add(&mut self, key: T) {
        match self.position_of(&key) {
            Some(idx) if self.primary == Some(idx) => {}
            Some(idx) => {
                self.primary = Some(idx);
                self.bump_revision();
            }
            None => {
                self.items.push(key);
                self.primary = Some(self.items.len() - 1);
                self.bump_revision();
            }
        }
    }

    /// Selects `key`, either alongside the current selection (`extend`) or
    /// in place of it.
    pub fn select(&mut self, key: T, extend: bool) {
        if extend {
            self.add(key);
        } else {
            self.select_only(key);
        }
    }

    /// Deselects `key`. Returns `true` if it was selected.
    pub fn remove(&mut self, key: &T) -> bool {
        let Some(idx) = self.position_of(key) else {
            return false;
        };
        self.items.remove(idx);
        self.primary = match self.primary {
            Some(p) if p == idx => self.items.len().checked_sub(1),
            Some(p) if p > idx => Some(p - 1),
            other => other,
        };
        self.bump_revision();
        true
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}
