// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer seam: what shapes ask of a backend, and what they are told
//! about the frame being drawn.

use alloc::string::String;

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

/// Identifier for an image owned by the host renderer.
///
/// Shapes never hold pixel data; a [`crate::Picture`] refers to its image by
/// handle and the [`Painter`] resolves it.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Stroke color and width for outlines.
#[derive(Clone, Copy, Debug)]
pub struct Outline {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in screen pixels.
    pub width: f64,
}

/// Font used by [`crate::TextString`].
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name, resolved by the painter.
    pub family: String,
    /// Nominal size in world units.
    pub size: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: String::from("Arial"),
            size: 10.0,
        }
    }
}

/// Resolved colors for drawing one object's primitives.
#[derive(Clone, Copy, Debug)]
pub struct PaintStyle {
    /// Outline for stroked shapes.
    pub outline: Outline,
    /// Foreground color, used for text.
    pub foreground: Color,
    /// Whether the owning object is selected.
    pub selected: bool,
}

/// Per-draw parameters handed to [`crate::Shape::draw`].
#[derive(Clone, Copy, Debug)]
pub struct DrawContext {
    /// World units per screen pixel; shapes divide world coordinates by it.
    pub scale: f64,
    /// Height to reflect `y` about, or `0.0` when the canvas is not
    /// vertically inverted.
    pub invert_height: f64,
    /// Colors of the owning object.
    pub style: PaintStyle,
}

impl DrawContext {
    /// Returns `true` if `y` should be reflected.
    #[must_use]
    pub fn inverted(&self) -> bool {
        self.invert_height > 0.0
    }

    /// Maps a world point to canvas-local drawing coordinates.
    #[must_use]
    pub fn local_point(&self, pt: Point) -> Point {
        let y = if self.inverted() {
            self.invert_height - pt.y
        } else {
            pt.y
        };
        Point::new(pt.x / self.scale, y / self.scale)
    }

    /// Maps a world rectangle to canvas-local drawing coordinates.
    ///
    /// Under inversion the rectangle is reflected as a whole, so its world
    /// bottom edge becomes its drawn top edge.
    #[must_use]
    pub fn local_rect(&self, rect: Rect) -> Rect {
        let y0 = if self.inverted() {
            self.invert_height - rect.y1
        } else {
            rect.y0
        };
        Rect::from_origin_size(
            Point::new(rect.x0 / self.scale, y0 / self.scale),
            Size::new(rect.width() / self.scale, rect.height() / self.scale),
        )
    }
}

/// Drawing backend for canvases and their shapes.
///
/// All geometry arrives in canvas-local coordinates: already divided by the
/// scale and reflected if needed. The canvas positions that local space on
/// screen with [`Painter::set_transform`].
pub trait Painter {
    /// Replaces the current transform from canvas-local to screen space.
    fn set_transform(&mut self, transform: Affine);

    /// Restricts drawing to `rect` until the matching [`Painter::pop_clip`].
    fn push_clip(&mut self, rect: Rect);

    /// Removes the most recent clip.
    fn pop_clip(&mut self);

    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, outline: &Outline);

    /// Strokes the ellipse inscribed in `bounds`.
    fn stroke_ellipse(&mut self, bounds: Rect, outline: &Outline);

    /// Strokes a closed polygon.
    fn stroke_polygon(&mut self, points: &[Point], outline: &Outline);

    /// Measures `text` set in `font`, in world units.
    fn measure_text(&mut self, text: &str, font: &Font) -> Size;

    /// Draws `text` with its top-left corner at `origin`, with glyphs at
    /// `zoom` times the font's nominal size.
    fn fill_text(&mut self, origin: Point, text: &str, font: &Font, zoom: f64, color: Color);

    /// Draws the `src` sub-rectangle of `image` (in image pixels) into `dest`.
    fn draw_image(&mut self, image: ImageId, src: Rect, dest: Rect);
}
