// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use canopy_shapes::{DrawContext, Painter, Primitive, Shape};
use kurbo::{Point, Vec2};

use crate::types::{DEFAULT_PRIORITY, DrawStyle, ObjectInteractions};

/// A group of primitives that is selected, moved, and rotated as one.
///
/// The position is the pivot for rotation and resizing, and moves with the
/// primitives. Whether the object is selected or visible is owned by the
/// [`Scene`](crate::Scene) it lives in; see [`Scene::select`](crate::Scene::select)
/// and [`Scene::set_visible`](crate::Scene::set_visible).
pub struct SceneObject {
    position: Point,
    primitives: Vec<Primitive>,
    interactions: ObjectInteractions,
    priority: i32,
    draw_order: i32,
    selected: bool,
    visible: bool,
    style: DrawStyle,
    tag: Option<Box<dyn Any>>,
}

impl fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneObject")
            .field("position", &self.position)
            .field("primitives", &self.primitives.len())
            .field("interactions", &self.interactions)
            .field("priority", &self.priority)
            .field("draw_order", &self.draw_order)
            .field("selected", &self.selected)
            .field("visible", &self.visible)
            .field("tagged", &self.tag.is_some())
            .finish_non_exhaustive()
    }
}

impl SceneObject {
    /// Creates an empty, visible object at `position` with every interaction
    /// enabled and the default priority.
    pub fn new(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            primitives: Vec::new(),
            interactions: ObjectInteractions::ALL,
            priority: DEFAULT_PRIORITY,
            draw_order: 0,
            selected: false,
            visible: true,
            style: DrawStyle::default(),
            tag: None,
        }
    }

    /// Creates an object holding a single primitive, positioned where the
    /// primitive is.
    pub fn from_primitive(primitive: impl Into<Primitive>) -> Self {
        let primitive = primitive.into();
        let mut object = Self::new(primitive.position());
        object.primitives.push(primitive);
        object
    }

    /// Appends a primitive and returns the object, for chaining.
    #[must_use]
    pub fn with_primitive(mut self, primitive: impl Into<Primitive>) -> Self {
        self.push(primitive);
        self
    }

    /// Sets the interactions, for chaining.
    #[must_use]
    pub fn with_interactions(mut self, interactions: ObjectInteractions) -> Self {
        self.interactions = interactions;
        self
    }

    /// Sets the priority, for chaining.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the draw order, for chaining.
    #[must_use]
    pub fn with_draw_order(mut self, draw_order: i32) -> Self {
        self.draw_order = draw_order;
        self
    }

    /// Sets the style, for chaining.
    #[must_use]
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the hidden flag, for chaining. Only meaningful before insertion.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Appends a primitive.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Returns the primitives in draw order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns the primitive at `index`.
    #[must_use]
    pub fn primitive(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    /// Returns the object's position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns what the pointer may do with the object.
    #[must_use]
    pub fn interactions(&self) -> ObjectInteractions {
        self.interactions
    }

    /// Replaces the allowed interactions.
    pub fn set_interactions(&mut self, interactions: ObjectInteractions) {
        self.interactions = interactions;
    }

    /// Returns `true` if any of `interactions` is allowed.
    #[must_use]
    pub fn is(&self, interactions: ObjectInteractions) -> bool {
        self.interactions.intersects(interactions)
    }

    /// Returns the selection priority. Lower values win.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Sets the selection priority.
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// Returns the draw order key.
    #[must_use]
    pub fn draw_order(&self) -> i32 {
        self.draw_order
    }

    /// Sets the draw order key. The scene only re-sorts on insertion and at
    /// the end of an update batch.
    pub fn set_draw_order(&mut self, draw_order: i32) {
        self.draw_order = draw_order;
    }

    /// Returns `true` if the object is selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Returns `true` if the object is drawn and hit tested.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns the draw style.
    #[must_use]
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    /// Replaces the draw style.
    pub fn set_style(&mut self, style: DrawStyle) {
        self.style = style;
    }

    /// Returns the user tag, if one is set.
    #[must_use]
    pub fn tag(&self) -> Option<&dyn Any> {
        self.tag.as_deref()
    }

    /// Returns the user tag downcast to `T`.
    #[must_use]
    pub fn tag_as<T: Any>(&self) -> Option<&T> {
        self.tag.as_deref()?.downcast_ref()
    }

    /// Attaches user data to the object, replacing any previous tag.
    pub fn set_tag(&mut self, tag: impl Any) {
        self.tag = Some(Box::new(tag));
    }

    /// Removes and returns the user tag.
    pub fn take_tag(&mut self) -> Option<Box<dyn Any>> {
        self.tag.take()
    }

    /// Moves the object and all its primitives by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        for primitive in &mut self.primitives {
            primitive.translate_by(delta);
        }
        self.position += delta;
    }

    /// Moves the object so its position lands on `target`.
    pub fn move_to(&mut self, target: Point) {
        self.move_by(target - self.position);
    }

    /// Rotates every primitive around the object's position.
    pub fn rotate(&mut self, radians: f64) {
        let pivot = self.position;
        for primitive in &mut self.primitives {
            primitive.rotate_around(pivot, radians);
        }
    }

    /// Scales every primitive around the object's position.
    pub fn resize(&mut self, multiplier: f64) {
        let pivot = self.position;
        for primitive in &mut self.primitives {
            primitive.resize_around(pivot, multiplier);
        }
    }

    /// Returns `true` if any primitive contains the world point.
    ///
    /// Visibility is not considered; the scene's queries filter on it.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.primitives.iter().any(|p| p.contains_point(pt))
    }

    /// Index of the first primitive containing the world point.
    #[must_use]
    pub fn primitive_index_at(&self, pt: Point) -> Option<usize> {
        self.primitives.iter().position(|p| p.contains_point(pt))
    }

    /// Draws every primitive if the object is visible.
    pub fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, scale: f64, invert_height: f64) {
        if !self.visible {
            return;
        }
        let ctx = DrawContext {
            scale,
            invert_height,
            style: self.style.paint_style(self.selected),
        };
        for primitive in &mut self.primitives {
            primitive.draw(painter, &ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use canopy_shapes::{Circle, Polygon};
    use kurbo::{Point, Vec2};

    use super::SceneObject;
    use crate::{DEFAULT_PRIORITY, ObjectInteractions};

    fn two_squares() -> SceneObject {
        SceneObject::new((0.0, 0.0))
            .with_primitive(Polygon::rect((-10.0, 0.0), 4.0, 4.0).unwrap())
            .with_primitive(Polygon::rect((10.0, 0.0), 4.0, 4.0).unwrap())
    }

    #[test]
    fn defaults() {
        let obj = SceneObject::new((1.0, 2.0));
        assert_eq!(obj.priority(), DEFAULT_PRIORITY);
        assert_eq!(obj.interactions(), ObjectInteractions::ALL);
        assert!(obj.is_visible());
        assert!(!obj.is_selected());
        assert!(obj.tag().is_none());
    }

    #[test]
    fn from_primitive_takes_its_position() {
        let obj = SceneObject::from_primitive(Circle::new((30.0, 40.0), 5.0).unwrap());
        assert_eq!(obj.position(), Point::new(30.0, 40.0));
        assert_eq!(obj.primitives().len(), 1);
    }

    #[test]
    fn move_keeps_primitives_in_lockstep() {
        let mut obj = two_squares();
        obj.move_by(Vec2::new(5.0, 5.0));
        assert_eq!(obj.position(), Point::new(5.0, 5.0));
        assert!(obj.contains(Point::new(-5.0, 5.0)));
        assert!(obj.contains(Point::new(15.0, 5.0)));

        obj.move_to(Point::new(100.0, 0.0));
        assert_eq!(obj.position(), Point::new(100.0, 0.0));
        assert!(obj.contains(Point::new(110.0, 0.0)));
        assert!(!obj.contains(Point::new(15.0, 5.0)));
    }

    #[test]
    fn rotate_pivots_on_object_position() {
        let mut obj = two_squares();
        obj.rotate(core::f64::consts::FRAC_PI_2);
        // The squares orbit the object's position instead of spinning in place.
        assert!(obj.contains(Point::new(0.0, 10.0)));
        assert!(obj.contains(Point::new(0.0, -10.0)));
        assert!(!obj.contains(Point::new(10.0, 0.0)));
        assert_eq!(obj.position(), Point::ZERO);
    }

    #[test]
    fn resize_scales_around_position() {
        let mut obj = two_squares();
        obj.resize(2.0);
        assert!(obj.contains(Point::new(20.0, 0.0)));
        assert!(!obj.contains(Point::new(10.0, 0.0)));
    }

    #[test]
    fn interaction_query_matches_any_flag() {
        let obj = SceneObject::new((0.0, 0.0)).with_interactions(ObjectInteractions::MOVABLE);
        assert!(obj.is(ObjectInteractions::MOVABLE));
        assert!(obj.is(ObjectInteractions::MOVABLE | ObjectInteractions::ROTATABLE));
        assert!(!obj.is(ObjectInteractions::SELECTABLE));
    }

    #[test]
    fn tag_roundtrip() {
        let mut obj = SceneObject::new((0.0, 0.0));
        obj.set_tag(String::from("door"));
        assert_eq!(obj.tag_as::<String>().map(String::as_str), Some("door"));
        assert!(obj.tag_as::<u32>().is_none());
        assert!(obj.take_tag().is_some());
        assert!(obj.tag().is_none());
    }
}
