// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Vec2};

use crate::error::{ShapeError, check_point};
use crate::{DrawContext, Painter, Shape};

/// A stroked circle. Its position is its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a circle, rejecting negative or non-finite input.
    pub fn new(center: impl Into<Point>, radius: f64) -> Result<Self, ShapeError> {
        let center = center.into();
        check_point(center)?;
        if !radius.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the bounding box in world space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, (self.radius * 2.0, self.radius * 2.0))
    }
}

impl Shape for Circle {
    fn position(&self) -> Point {
        self.center
    }

    fn contains_point(&self, pt: Point) -> bool {
        (pt - self.center).hypot2() <= self.radius * self.radius
    }

    fn translate_by(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn rotate_around(&mut self, pivot: Point, radians: f64) {
        self.center = Affine::rotate_about(radians, pivot) * self.center;
    }

    fn resize_around(&mut self, pivot: Point, multiplier: f64) {
        self.center = Affine::scale_about(multiplier, pivot) * self.center;
        self.radius *= multiplier.abs();
    }

    fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, ctx: &DrawContext) {
        painter.stroke_ellipse(ctx.local_rect(self.bounds()), &ctx.style.outline);
    }
}
