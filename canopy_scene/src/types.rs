// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: object and primitive handles, interaction
//! flags, and draw styles.

use canopy_shapes::{Outline, PaintStyle};
use peniko::Color;

/// Priority given to objects that do not set one.
pub const DEFAULT_PRIORITY: i32 = 1000;

/// Handle to an object in a [`Scene`](crate::Scene).
///
/// A slot index paired with the slot's generation. Inserting into a fresh
/// slot starts at generation `1`; removing frees the slot, and reusing it
/// bumps the generation, so an old handle never reaches the new occupant.
/// Scene operations given a stale handle behave as if the object were gone.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObjectId(pub(crate) u32, pub(crate) u32);

impl ObjectId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Identifier for one primitive of an object: the owner and the primitive's
/// index within it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PrimitiveId {
    /// The owning object.
    pub object: ObjectId,
    /// Index into the object's primitives.
    pub index: usize,
}

bitflags::bitflags! {
    /// What a user may do to an object with the pointer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectInteractions: u8 {
        /// A click can select the object.
        const SELECTABLE = 0b0000_0001;
        /// Dragging the selection moves the object.
        const MOVABLE    = 0b0000_0010;
        /// Rotating the selection rotates the object.
        const ROTATABLE  = 0b0000_0100;
        /// Every interaction.
        const ALL = Self::SELECTABLE.bits() | Self::MOVABLE.bits() | Self::ROTATABLE.bits();
    }
}

impl Default for ObjectInteractions {
    fn default() -> Self {
        Self::ALL
    }
}

/// Colors and outline widths of an object, unselected and selected.
#[derive(Clone, Copy, Debug)]
pub struct DrawStyle {
    /// Text color.
    pub fore_color: Color,
    /// Text color while selected.
    pub selected_fore_color: Color,
    /// Outline color.
    pub outline_color: Color,
    /// Outline color while selected.
    pub selected_outline_color: Color,
    /// Outline width in screen pixels.
    pub outline_width: f64,
    /// Outline width in screen pixels while selected.
    pub selected_outline_width: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        let red = Color::from_rgb8(255, 0, 0);
        Self {
            fore_color: Color::BLACK,
            selected_fore_color: red,
            outline_color: Color::BLACK,
            selected_outline_color: red,
            outline_width: 1.0,
            selected_outline_width: 2.0,
        }
    }
}

impl DrawStyle {
    /// Resolves the colors to draw with.
    #[must_use]
    pub fn paint_style(&self, selected: bool) -> PaintStyle {
        if selected {
            PaintStyle {
                outline: Outline {
                    color: self.selected_outline_color,
                    width: self.selected_outline_width,
                },
                foreground: self.selected_fore_color,
                selected,
            }
        } else {
            PaintStyle {
                outline: Outline {
                    color: self.outline_color,
                    width: self.outline_width,
                },
                foreground: self.fore_color,
                selected,
            }
        }
    }
}
