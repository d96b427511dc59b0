// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::error::{ShapeError, check_rect};
use crate::{DrawContext, ImageId, Painter, Shape};

/// An image drawn into a world-space rectangle. Its position is the top-left
/// corner of that rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Picture {
    image: ImageId,
    src: Rect,
    dest: Rect,
}

impl Picture {
    /// Draws the whole `src` region of `image` at the same size, with its
    /// top-left corner at `src`'s origin.
    pub fn new(image: ImageId, src: Rect) -> Result<Self, ShapeError> {
        Self::with_dest(image, src, src)
    }

    /// Draws the `src` region of `image` (in image pixels) into `dest`
    /// (in world units).
    pub fn with_dest(image: ImageId, src: Rect, dest: Rect) -> Result<Self, ShapeError> {
        check_rect(src)?;
        check_rect(dest)?;
        Ok(Self { image, src, dest })
    }

    /// Returns the image handle.
    #[must_use]
    pub fn image(&self) -> ImageId {
        self.image
    }

    /// Returns the source region in image pixels.
    #[must_use]
    pub fn src(&self) -> Rect {
        self.src
    }

    /// Returns the destination rectangle in world space.
    #[must_use]
    pub fn dest(&self) -> Rect {
        self.dest
    }
}

impl Shape for Picture {
    fn position(&self) -> Point {
        self.dest.origin()
    }

    fn contains_point(&self, pt: Point) -> bool {
        !(pt.x < self.dest.x0 || pt.x > self.dest.x1 || pt.y < self.dest.y0 || pt.y > self.dest.y1)
    }

    fn translate_by(&mut self, delta: Vec2) {
        self.dest = self.dest + delta;
    }

    fn rotate_around(&mut self, _pivot: Point, _radians: f64) {}

    fn resize_around(&mut self, pivot: Point, multiplier: f64) {
        self.dest = Affine::scale_about(multiplier, pivot).transform_rect_bbox(self.dest);
    }

    fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, ctx: &DrawContext) {
        painter.draw_image(self.image, self.src, ctx.local_rect(self.dest));
    }
}
