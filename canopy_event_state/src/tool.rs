// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tools and the drag modes a press resolves to.

use crate::PointerButton;

/// The active canvas tool, which decides what a primary-button drag does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Drag moves the selection if there is one, otherwise pans.
    /// The secondary button rotates the selection.
    Free,
    /// Drag pans the canvas.
    #[default]
    Pan,
    /// Drag moves the selection.
    Move,
    /// Drag rotates the selection.
    Rotate,
}

/// What an active drag is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Moving the canvas area.
    Pan,
    /// Moving the selected objects.
    Move,
    /// Rotating the selected objects.
    Rotate,
}

impl Tool {
    /// Resolves the drag mode for a press of `button`.
    ///
    /// The middle button always pans. The secondary button only rotates,
    /// and only with [`Tool::Free`] and a non-empty selection. Returns `None`
    /// if the press starts no drag.
    ///
    /// ```rust
    /// use canopy_event_state::{DragMode, PointerButton, Tool};
    ///
    /// assert_eq!(
    ///     Tool::Free.drag_mode(PointerButton::Primary, true),
    ///     Some(DragMode::Move)
    /// );
    /// assert_eq!(
    ///     Tool::Free.drag_mode(PointerButton::Primary, false),
    ///     Some(DragMode::Pan)
    /// );
    /// assert_eq!(Tool::Move.drag_mode(PointerButton::Secondary, true), None);
    /// ```
    #[must_use]
    pub fn drag_mode(self, button: PointerButton, has_selection: bool) -> Option<DragMode> {
        match (button, self) {
            (PointerButton::Primary, Self::Free) if has_selection => Some(DragMode::Move),
            (PointerButton::Primary, Self::Free | Self::Pan) => Some(DragMode::Pan),
            (PointerButton::Primary, Self::Move) => Some(DragMode::Move),
            (PointerButton::Primary, Self::Rotate) => Some(DragMode::Rotate),
            (PointerButton::Middle, _) => Some(DragMode::Pan),
            (PointerButton::Secondary, Self::Free) if has_selection => Some(DragMode::Rotate),
            (PointerButton::Secondary, _) => None,
        }
    }
}
