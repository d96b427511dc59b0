// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications from the canvas and the host seam that receives them.

use canopy_scene::ObjectId;
use canopy_view::ScaleChange;
use kurbo::Vec2;

/// Something the user did to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasEvent {
    /// A drag moved an object. Sent once per object when the drag ends.
    ObjectMoved {
        /// The object that moved.
        object: ObjectId,
        /// Total world-space displacement over the drag.
        delta: Vec2,
    },
    /// A drag rotated an object. Sent once per object when the drag ends.
    ObjectRotated {
        /// The object that rotated.
        object: ObjectId,
        /// Total rotation over the drag, in radians.
        radians: f64,
    },
    /// A click selected an object, or cleared the selection (`None`).
    ObjectSelected(Option<ObjectId>),
    /// The scale changed.
    ScaleChanged(ScaleChange),
}

/// The window or control a canvas lives in.
///
/// The canvas never draws on its own. It asks the host to schedule a redraw,
/// and the host later calls [`Canvas::paint`](crate::Canvas::paint).
pub trait CanvasHost {
    /// Schedules a repaint of the control.
    fn request_redraw(&mut self);

    /// Delivers a notification.
    fn emit(&mut self, event: CanvasEvent);
}

/// A host that ignores everything, for headless use.
impl CanvasHost for () {
    fn request_redraw(&mut self) {}

    fn emit(&mut self, _event: CanvasEvent) {}
}

impl<H: CanvasHost + ?Sized> CanvasHost for &mut H {
    fn request_redraw(&mut self) {
        (**self).request_redraw();
    }

    fn emit(&mut self, event: CanvasEvent) {
        (**self).emit(event);
    }
}
