// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};
use peniko::Color;

use crate::error::{ShapeError, check_rect};
use crate::{DrawContext, Painter, Shape};

/// A filled, axis-aligned rectangle. Its position is its top-left corner.
///
/// Flat rectangles ignore rotation; they only show an outline while their
/// owner is selected.
#[derive(Clone, Copy, Debug)]
pub struct FlatRect {
    rect: Rect,
    color: Color,
}

impl FlatRect {
    /// Creates a flat rectangle.
    pub fn new(rect: Rect, color: Color) -> Result<Self, ShapeError> {
        check_rect(rect)?;
        Ok(Self { rect, color })
    }

    /// Returns the rectangle in world space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Shape for FlatRect {
    fn position(&self) -> Point {
        self.rect.origin()
    }

    fn contains_point(&self, pt: Point) -> bool {
        !(pt.x < self.rect.x0 || pt.x > self.rect.x1 || pt.y < self.rect.y0 || pt.y > self.rect.y1)
    }

    fn translate_by(&mut self, delta: Vec2) {
        self.rect = self.rect + delta;
    }

    fn rotate_around(&mut self, _pivot: Point, _radians: f64) {}

    fn resize_around(&mut self, pivot: Point, multiplier: f64) {
        self.rect = Affine::scale_about(multiplier, pivot).transform_rect_bbox(self.rect);
    }

    fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, ctx: &DrawContext) {
        let local = ctx.local_rect(self.rect);
        painter.fill_rect(local, self.color);
        if ctx.style.selected {
            painter.stroke_rect(local, &ctx.style.outline);
        }
    }
}
