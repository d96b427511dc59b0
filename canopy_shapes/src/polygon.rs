// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::error::{ShapeError, check_point};
use crate::{DrawContext, Painter, Shape};

/// Inline capacity covers rectangles and triangles without allocating.
type Ring = SmallVec<[Point; 4]>;

/// A closed, stroked polygon.
///
/// Its position starts at the center of the vertices' bounding box and then
/// moves rigidly with the vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Ring,
    position: Point,
}

impl Polygon {
    /// Creates a polygon from an ordered ring of at least three vertices.
    pub fn new(vertices: impl IntoIterator<Item = Point>) -> Result<Self, ShapeError> {
        let vertices: Ring = vertices.into_iter().collect();
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }
        for v in &vertices {
            check_point(*v)?;
        }
        let bounds = vertices
            .iter()
            .skip(1)
            .fold(Rect::from_points(vertices[0], vertices[0]), |r, v| {
                r.union_pt(*v)
            });
        Ok(Self {
            vertices,
            position: bounds.center(),
        })
    }

    /// Creates an axis-aligned rectangle polygon centered on `center`.
    ///
    /// Unlike [`crate::FlatRect`], it rotates.
    pub fn rect(center: impl Into<Point>, width: f64, height: f64) -> Result<Self, ShapeError> {
        let center = center.into();
        check_point(center)?;
        if !(width.is_finite() && height.is_finite()) {
            return Err(ShapeError::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            return Err(ShapeError::NegativeSize { width, height });
        }
        let r = Rect::from_center_size(center, (width, height));
        let mut polygon = Self::new([
            Point::new(r.x0, r.y0),
            Point::new(r.x1, r.y0),
            Point::new(r.x1, r.y1),
            Point::new(r.x0, r.y1),
        ])?;
        polygon.position = center;
        Ok(polygon)
    }

    /// Returns the vertex ring.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn apply(&mut self, transform: Affine) {
        for v in &mut self.vertices {
            *v = transform * *v;
        }
        self.position = transform * self.position;
    }
}

impl Shape for Polygon {
    fn position(&self) -> Point {
        self.position
    }

    // Even-odd crossing number over the ring.
    fn contains_point(&self, pt: Point) -> bool {
        let v = &self.vertices;
        let mut inside = false;
        let mut j = v.len() - 1;
        for i in 0..v.len() {
            let (a, b) = (v[i], v[j]);
            if (a.y > pt.y) != (b.y > pt.y)
                && pt.x < (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    fn translate_by(&mut self, delta: Vec2) {
        self.apply(Affine::translate(delta));
    }

    fn rotate_around(&mut self, pivot: Point, radians: f64) {
        self.apply(Affine::rotate_about(radians, pivot));
    }

    fn resize_around(&mut self, pivot: Point, multiplier: f64) {
        self.apply(Affine::scale_about(multiplier, pivot));
    }

    fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, ctx: &DrawContext) {
        let local: Ring = self.vertices.iter().map(|v| ctx.local_point(*v)).collect();
        painter.stroke_polygon(&local, &ctx.style.outline);
    }
}
