// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer buttons and keyboard modifiers as the canvas sees them.

use kurbo::Point;

/// A pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The main button, usually left.
    Primary,
    /// The secondary button, usually right.
    Secondary,
    /// The middle button or wheel press.
    Middle,
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key. Doubles the wheel zoom step.
        const CTRL  = 0b0000_0010;
        /// Alt key. Click cycling ignores priority.
        const ALT   = 0b0000_0100;
    }
}

impl Modifiers {
    /// Returns `true` if Alt is the only modifier held.
    ///
    /// Chorded modifiers do not count, so Ctrl+Alt shortcuts handled by the
    /// host do not change selection behavior.
    #[must_use]
    pub fn ignores_priority(self) -> bool {
        self == Self::ALT
    }

    /// Returns `true` if Ctrl is the only modifier held.
    #[must_use]
    pub fn accelerates_zoom(self) -> bool {
        self == Self::CTRL
    }
}

/// A pointer press, move, or release, with the modifiers held at the time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position in screen pixels, relative to the control.
    pub position: Point,
    /// The button that changed state. Moves carry the button that started
    /// the drag, or [`PointerButton::Primary`] if none is held.
    pub button: PointerButton,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Creates an event with no modifiers held.
    #[must_use]
    pub fn new(position: impl Into<Point>, button: PointerButton) -> Self {
        Self {
            position: position.into(),
            button,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns the event with `modifiers` held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
