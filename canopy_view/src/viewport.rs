// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::{ScaleChange, ScaleMode};

/// Lowest value accepted for [`CanvasViewport::scale_min`].
pub const SCALE_FLOOR: f64 = 1.0;
/// Highest value accepted for [`CanvasViewport::scale_max`].
pub const SCALE_CEILING: f64 = 1000.0;
/// Margin, in screen pixels, kept around the canvas area when fitting it
/// into the control.
pub const FIT_MARGIN: f64 = 20.0;

/// Viewport over a fixed-size canvas area.
///
/// The canvas area is a world-space rectangle anchored at the world origin.
/// It is placed in the host control at `origin` (screen pixels) and drawn at
/// `1 / scale`: the scale is the number of world units covered by one screen
/// pixel, so larger values zoom *out*.
///
/// With vertical inversion enabled, world `y = 0` sits at the bottom edge of
/// the canvas area instead of the top.
#[derive(Clone, Debug)]
pub struct CanvasViewport {
    control_size: Size,
    origin: Point,
    area_size: Size,
    scale: f64,
    scale_min: f64,
    scale_max: f64,
    scale_step: f64,
    scale_mode: ScaleMode,
    invert_y: bool,
}

impl CanvasViewport {
    /// Creates a viewport for a control of the given size.
    ///
    /// - The canvas area is empty and sits at the control origin.
    /// - Scale is `1.0`, bounded to `[1, 1000]`, with a static step of `1`.
    #[must_use]
    pub fn new(control_size: Size) -> Self {
        Self {
            control_size,
            origin: Point::ZERO,
            area_size: Size::ZERO,
            scale: 1.0,
            scale_min: SCALE_FLOOR,
            scale_max: SCALE_CEILING,
            scale_step: 1.0,
            scale_mode: ScaleMode::default(),
            invert_y: false,
        }
    }

    /// Returns the size of the host control in screen pixels.
    #[must_use]
    pub fn control_size(&self) -> Size {
        self.control_size
    }

    /// Sets the size of the host control.
    ///
    /// This does not refit the canvas area; call
    /// [`CanvasViewport::fit_and_center`] for that.
    pub fn set_control_size(&mut self, size: Size) {
        self.control_size = size;
    }

    /// Returns the world-space size of the canvas area.
    #[must_use]
    pub fn area_size(&self) -> Size {
        self.area_size
    }

    /// Sets the world-space size of the canvas area, then refits and
    /// recenters it inside the control.
    ///
    /// Returns the change if refitting moved the scale.
    pub fn set_area_size(&mut self, size: Size) -> Option<ScaleChange> {
        self.area_size = size;
        self.fit_and_center()
    }

    /// Returns the screen position of the canvas area's top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Places the canvas area's top-left corner at `origin` (screen pixels).
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Moves the canvas area by a screen-space delta.
    ///
    /// The delta is not scaled: panning follows the pointer one to one.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    /// Returns the current scale (world units per screen pixel).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamped to `[scale_min, scale_max]`.
    ///
    /// Returns the change if the scale actually moved.
    pub fn set_scale(&mut self, value: f64) -> Option<ScaleChange> {
        let previous = self.scale;
        self.scale = self.clamp_scale(value);
        self.change_from(previous)
    }

    /// Returns the lower scale bound (how far one can zoom in).
    #[must_use]
    pub fn scale_min(&self) -> f64 {
        self.scale_min
    }

    /// Sets the lower scale bound, floored at [`SCALE_FLOOR`].
    ///
    /// The current scale is pulled back into the bounds.
    pub fn set_scale_min(&mut self, value: f64) -> Option<ScaleChange> {
        self.scale_min = value.max(SCALE_FLOOR);
        self.set_scale(self.scale)
    }

    /// Returns the upper scale bound (how far one can zoom out).
    #[must_use]
    pub fn scale_max(&self) -> f64 {
        self.scale_max
    }

    /// Sets the upper scale bound, ceiled at [`SCALE_CEILING`].
    ///
    /// The current scale is pulled back into the bounds.
    pub fn set_scale_max(&mut self, value: f64) -> Option<ScaleChange> {
        self.scale_max = value.min(SCALE_CEILING);
        self.set_scale(self.scale)
    }

    /// Returns the wheel step.
    #[must_use]
    pub fn scale_step(&self) -> f64 {
        self.scale_step
    }

    /// Sets the wheel step, floored at `1`.
    pub fn set_scale_step(&mut self, value: f64) {
        self.scale_step = value.max(1.0);
    }

    /// Returns how the wheel step is derived.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Sets how the wheel step is derived.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.scale_mode = mode;
    }

    /// Returns `true` if world `y = 0` is at the bottom of the canvas area.
    #[must_use]
    pub fn invert_y(&self) -> bool {
        self.invert_y
    }

    /// Sets vertical inversion.
    pub fn set_invert_y(&mut self, invert: bool) {
        self.invert_y = invert;
    }

    /// Height that primitives reflect about when drawing, or `0.0` when
    /// inversion is off.
    #[must_use]
    pub fn invert_height(&self) -> f64 {
        if self.invert_y {
            self.area_size.height
        } else {
            0.0
        }
    }

    /// Converts a screen point into world coordinates.
    #[must_use]
    pub fn world_from_screen(&self, pt: Point) -> Point {
        let local = self.local_from_screen(pt);
        let mut world = Point::new(local.x * self.scale, local.y * self.scale);
        if self.invert_y {
            world.y = self.area_size.height - world.y;
        }
        world
    }

    /// Converts a world point into screen coordinates.
    ///
    /// This is the exact inverse of [`CanvasViewport::world_from_screen`].
    #[must_use]
    pub fn screen_from_world(&self, pt: Point) -> Point {
        self.origin + self.local_from_world(pt).to_vec2()
    }

    /// Converts a world point into unscaled canvas-local coordinates, that
    /// is relative to the canvas origin but without adding it.
    #[must_use]
    pub fn local_from_world(&self, pt: Point) -> Point {
        let y = if self.invert_y {
            self.area_size.height - pt.y
        } else {
            pt.y
        };
        Point::new(pt.x / self.scale, y / self.scale)
    }

    /// Converts a screen point into canvas-local coordinates (origin
    /// relative, no scaling or inversion).
    #[must_use]
    pub fn local_from_screen(&self, pt: Point) -> Point {
        (pt - self.origin).to_point()
    }

    /// The canvas area in canvas-local coordinates, as it is drawn.
    #[must_use]
    pub fn local_area_rect(&self) -> Rect {
        Rect::from_origin_size(
            Point::ZERO,
            Size::new(
                self.area_size.width / self.scale,
                self.area_size.height / self.scale,
            ),
        )
    }

    /// Returns the world-space rectangle currently visible in the control.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let a = self.world_from_screen(Point::ZERO);
        let b = self.world_from_screen(self.control_size.to_vec2().to_point());
        Rect::from_points(a, b)
    }

    /// Zooms one wheel notch around a screen point.
    ///
    /// A positive `wheel_delta` zooms in (decreases the scale), a negative
    /// one zooms out; zero does nothing. `accelerate` doubles the step.
    /// The canvas origin is moved so the world point under `anchor` stays
    /// under it.
    pub fn zoom_at(
        &mut self,
        anchor: Point,
        wheel_delta: f64,
        accelerate: bool,
    ) -> Option<ScaleChange> {
        if wheel_delta == 0.0 {
            return None;
        }

        let mut step = match self.scale_mode {
            ScaleMode::Static => self.scale_step,
            ScaleMode::Dynamic => (self.scale / self.scale_step).floor().max(1.0),
        };
        if accelerate {
            step *= 2.0;
        }
        let signed_step = if wheel_delta < 0.0 { step } else { -step };

        let previous = self.scale;
        self.scale = self.clamp_scale((self.scale + signed_step).round());

        let local = self.local_from_screen(anchor);
        let ratio = previous / self.scale;
        self.origin = Point::new(anchor.x - local.x * ratio, anchor.y - local.y * ratio);

        self.change_from(previous)
    }

    /// Scales the canvas area to fit the control and centers it.
    ///
    /// Returns the change if the scale moved.
    pub fn fit_and_center(&mut self) -> Option<ScaleChange> {
        let change = self.fit();
        self.recenter();
        change
    }

    /// Scales the canvas area so it fits into the control with a
    /// [`FIT_MARGIN`] border.
    ///
    /// Controls no larger than the margin keep their current scale.
    pub fn fit(&mut self) -> Option<ScaleChange> {
        let avail_w = self.control_size.width - FIT_MARGIN;
        let avail_h = self.control_size.height - FIT_MARGIN;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return None;
        }
        let fit_x = self.area_size.width / avail_w;
        let fit_y = self.area_size.height / avail_h;
        let previous = self.scale;
        self.scale = self.clamp_scale(fit_x.max(fit_y).max(1.0));
        self.change_from(previous)
    }

    /// Centers the canvas area inside the control at the current scale.
    pub fn recenter(&mut self) {
        let scaled = self.local_area_rect();
        self.origin = Point::new(
            self.control_size.width / 2.0 - scaled.width() / 2.0,
            self.control_size.height / 2.0 - scaled.height() / 2.0,
        );
    }

    /// Moves the canvas area so `world` lands at the control's center.
    pub fn scroll_to_world(&mut self, world: Point) {
        let local = self.local_from_world(world);
        self.origin = Point::new(
            self.control_size.width / 2.0 - local.x,
            self.control_size.height / 2.0 - local.y,
        );
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            control_size: self.control_size,
            origin: self.origin,
            area_size: self.area_size,
            visible_world_rect: self.visible_world_rect(),
            scale: self.scale,
            scale_min: self.scale_min,
            scale_max: self.scale_max,
            scale_step: self.scale_step,
            scale_mode: self.scale_mode,
            invert_y: self.invert_y,
        }
    }

    // `clamp` would panic on inverted bounds; they are kept as set instead.
    fn clamp_scale(&self, value: f64) -> f64 {
        value.max(self.scale_min).min(self.scale_max)
    }

    fn change_from(&self, previous: f64) -> Option<ScaleChange> {
        (previous != self.scale).then_some(ScaleChange {
            previous,
            current: self.scale,
        })
    }
}

/// Debug snapshot of a [`CanvasViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Host control size in screen pixels.
    pub control_size: Size,
    /// Screen position of the canvas area's top-left corner.
    pub origin: Point,
    /// World-space size of the canvas area.
    pub area_size: Size,
    /// World-space rectangle currently visible through the control.
    pub visible_world_rect: Rect,
    /// Current scale.
    pub scale: f64,
    /// Lower scale bound.
    pub scale_min: f64,
    /// Upper scale bound.
    pub scale_max: f64,
    /// Wheel step.
    pub scale_step: f64,
    /// Wheel step mode.
    pub scale_mode: ScaleMode,
    /// Whether world `y = 0` is at the bottom.
    pub invert_y: bool,
}
