// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-cycle resolution for stacked objects.

/// One object under the pointer, as seen by [`cycle_target`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<K> {
    /// The object's key.
    pub key: K,
    /// Selection priority; lower values are favored.
    pub priority: i32,
    /// Whether the object is currently selected.
    pub selected: bool,
}

impl<K> Candidate<K> {
    /// Creates a candidate.
    pub const fn new(key: K, priority: i32, selected: bool) -> Self {
        Self {
            key,
            priority,
            selected,
        }
    }
}

/// Picks which candidate a click should select.
///
/// `candidates` must be ordered by ascending priority, ties in discovery
/// order, as a hit test returns them. Only the leading run of candidates that
/// share the lowest priority takes part, unless `ignore_priority` is set, in
/// which case every candidate does.
///
/// Within that group the first unselected candidate that follows a selected
/// one wins. If the group ends without such a successor (including when no
/// candidate in it is selected) the cycle wraps to the first candidate.
/// Clicking repeatedly on the same spot therefore walks through the stacked
/// objects and starts over.
///
/// Returns the index of the winner, or `None` if `candidates` is empty.
///
/// ```rust
/// use canopy_selection::{Candidate, cycle_target};
///
/// let mut stack = [
///     Candidate::new('a', 0, false),
///     Candidate::new('b', 0, false),
///     Candidate::new('c', 5, false),
/// ];
/// assert_eq!(cycle_target(&stack, false), Some(0));
///
/// stack[0].selected = true;
/// assert_eq!(cycle_target(&stack, false), Some(1));
///
/// // `c` has a higher priority value and is skipped, so the cycle wraps.
/// stack[0].selected = false;
/// stack[1].selected = true;
/// assert_eq!(cycle_target(&stack, false), Some(0));
/// assert_eq!(cycle_target(&stack, true), Some(2));
/// ```
#[must_use]
pub fn cycle_target<K>(candidates: &[Candidate<K>], ignore_priority: bool) -> Option<usize> {
    let first = candidates.first()?;
    if candidates.len() == 1 {
        return Some(0);
    }

    let in_group = |c: &Candidate<K>| ignore_priority || c.priority == first.priority;
    let mut seen_selected = false;
    for (i, candidate) in candidates.iter().enumerate() {
        if !in_group(candidate) {
            break;
        }
        if candidate.selected {
            seen_selected = true;
        } else if seen_selected {
            return Some(i);
        }
    }
    Some(0)
}

#[cfg(test)]
mod tests {
    use super::{Candidate, cycle_target};

    fn stack(selected: &[bool], priorities: &[i32]) -> [Candidate<usize>; 3] {
        core::array::from_fn(|i| Candidate::new(i, priorities[i], selected[i]))
    }

    #[test]
    fn empty_has_no_target() {
        assert_eq!(cycle_target::<u32>(&[], false), None);
    }

    #[test]
    fn single_candidate_is_selected_even_if_already_selected() {
        let one = [Candidate::new(7_u32, 3, true)];
        assert_eq!(cycle_target(&one, false), Some(0));
    }

    #[test]
    fn walks_equal_priority_stack_and_wraps() {
        let p = [1, 1, 1];
        assert_eq!(cycle_target(&stack(&[false, false, false], &p), false), Some(0));
        assert_eq!(cycle_target(&stack(&[true, false, false], &p), false), Some(1));
        assert_eq!(cycle_target(&stack(&[false, true, false], &p), false), Some(2));
        assert_eq!(cycle_target(&stack(&[false, false, true], &p), false), Some(0));
    }

    #[test]
    fn lowest_priority_run_only() {
        let p = [0, 0, 9];
        assert_eq!(cycle_target(&stack(&[false, true, false], &p), false), Some(0));
        assert_eq!(cycle_target(&stack(&[false, true, false], &p), true), Some(2));
    }

    #[test]
    fn lone_lowest_priority_always_wins() {
        let p = [0, 5, 5];
        assert_eq!(cycle_target(&stack(&[true, false, false], &p), false), Some(0));
        assert_eq!(cycle_target(&stack(&[false, true, false], &p), false), Some(0));
    }

    #[test]
    fn multi_selected_group_advances_past_last_selected_run() {
        let p = [1, 1, 1];
        assert_eq!(cycle_target(&stack(&[true, true, false], &p), false), Some(2));
        assert_eq!(cycle_target(&stack(&[true, true, true], &p), false), Some(0));
    }
}
