// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_shapes --heading-base-level=0

//! Canopy Shapes: the drawable primitives of a Canopy canvas.
//!
//! Each primitive lives in world space and knows how to:
//! - report a reference position,
//! - answer whether it contains a world point,
//! - translate, rotate around a pivot, and resize around a pivot,
//! - draw itself through a [`Painter`].
//!
//! The built-in primitives are [`Circle`], [`Polygon`], [`FlatRect`],
//! [`TextString`] and [`Picture`]. They share the [`Shape`] trait and are
//! collected in the closed [`Primitive`] enum so a scene can store them by
//! value.
//!
//! Geometry is validated when a primitive is built; constructors return
//! [`ShapeError`] for non-finite input, negative extents, or polygons with
//! fewer than three vertices.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use canopy_shapes::{Circle, Primitive, Shape};
//!
//! let mut p = Primitive::from(Circle::new((30.0, 30.0), 20.0).unwrap());
//! assert!(p.contains_point(Point::new(40.0, 40.0)));
//!
//! p.translate_by(Vec2::new(100.0, 0.0));
//! assert_eq!(p.position(), Point::new(130.0, 30.0));
//! assert!(!p.contains_point(Point::new(40.0, 40.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::{Point, Vec2};

mod circle;
mod error;
mod flat_rect;
mod paint;
mod picture;
mod polygon;
mod text;

pub use circle::Circle;
pub use error::ShapeError;
pub use flat_rect::FlatRect;
pub use paint::{DrawContext, Font, ImageId, Outline, PaintStyle, Painter};
pub use picture::Picture;
pub use polygon::Polygon;
pub use text::{TextAlign, TextString};

/// Behavior shared by every drawable primitive.
///
/// Coordinates are world units. Angles are radians, measured in world space,
/// so the on-screen direction flips when the canvas is vertically inverted.
pub trait Shape {
    /// Reference point used as the pivot for object-level rotation.
    fn position(&self) -> Point;

    /// Returns `true` if the world point lies on or inside the shape.
    fn contains_point(&self, pt: Point) -> bool;

    /// Moves the shape by `delta`.
    fn translate_by(&mut self, delta: Vec2);

    /// Rotates the shape around `pivot`. Shapes that cannot rotate ignore this.
    fn rotate_around(&mut self, pivot: Point, radians: f64);

    /// Scales the shape around `pivot` by `multiplier`.
    fn resize_around(&mut self, pivot: Point, multiplier: f64);

    /// Draws the shape. May update cached measurements such as text extents.
    fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, ctx: &DrawContext);
}

/// Any of the built-in primitives.
#[derive(Clone, Debug)]
pub enum Primitive {
    /// A circle outline.
    Circle(Circle),
    /// A closed polygon outline.
    Polygon(Polygon),
    /// A filled rectangle.
    FlatRect(FlatRect),
    /// A line of text.
    Text(TextString),
    /// An image drawn into a rectangle.
    Picture(Picture),
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Primitive::Circle($s) => $body,
            Primitive::Polygon($s) => $body,
            Primitive::FlatRect($s) => $body,
            Primitive::Text($s) => $body,
            Primitive::Picture($s) => $body,
        }
    };
}

impl Shape for Primitive {
    fn position(&self) -> Point {
        dispatch!(self, s => s.position())
    }

    fn contains_point(&self, pt: Point) -> bool {
        dispatch!(self, s => s.contains_point(pt))
    }

    fn translate_by(&mut self, delta: Vec2) {
        dispatch!(self, s => s.translate_by(delta));
    }

    fn rotate_around(&mut self, pivot: Point, radians: f64) {
        dispatch!(self, s => s.rotate_around(pivot, radians));
    }

    fn resize_around(&mut self, pivot: Point, multiplier: f64) {
        dispatch!(self, s => s.resize_around(pivot, multiplier));
    }

    fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, ctx: &DrawContext) {
        dispatch!(self, s => s.draw(painter, ctx));
    }
}

impl From<Circle> for Primitive {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Polygon> for Primitive {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<FlatRect> for Primitive {
    fn from(value: FlatRect) -> Self {
        Self::FlatRect(value)
    }
}

impl From<TextString> for Primitive {
    fn from(value: TextString) -> Self {
        Self::Text(value)
    }
}

impl From<Picture> for Primitive {
    fn from(value: Picture) -> Self {
        Self::Picture(value)
    }
}
