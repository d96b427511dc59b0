// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: one press-move-release cycle in screen space.
//!
//! ## Usage
//!
//! 1) On press, call [`DragSession::begin`] with the resolved [`DragMode`] (or
//!    `None` if the press starts no drag) and the pointer position.
//! 2) On each move, call [`DragSession::update`] to get the movement since the
//!    previous position. The session starts counting as a drag once the
//!    pointer leaves its start position.
//! 3) Rotations report their angle with [`DragSession::accumulate_degrees`].
//! 4) On release, call [`DragSession::finish`] for a [`DragSummary`]. The
//!    session is idle again afterwards, whatever happened.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use canopy_event_state::{DragMode, DragSession};
//!
//! let mut drag = DragSession::default();
//! drag.begin(Some(DragMode::Pan), Point::new(10.0, 20.0));
//! assert!(!drag.is_dragging());
//!
//! let step = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(step.delta, Vec2::new(5.0, 5.0));
//! assert!(drag.is_dragging());
//!
//! let summary = drag.finish();
//! assert_eq!(summary.mode, Some(DragMode::Pan));
//! assert!(summary.dragged);
//! assert_eq!(drag.mode(), None);
//! ```

use kurbo::{Point, Vec2};

use crate::DragMode;

/// Movement reported by [`DragSession::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// The active mode.
    pub mode: DragMode,
    /// Screen-space movement since the previous position.
    pub delta: Vec2,
}

/// How a drag ended, returned by [`DragSession::finish`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSummary {
    /// The mode the session was in, if any.
    pub mode: Option<DragMode>,
    /// Screen position of the press.
    pub start: Point,
    /// Whether the pointer moved away from `start` at any point.
    pub dragged: bool,
    /// Total rotation reported during the session, in degrees.
    pub degrees: f64,
}

/// Tracks a single drag from press to release.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSession {
    mode: Option<DragMode>,
    start: Point,
    last: Point,
    dragging: bool,
    degrees: f64,
}

impl DragSession {
    /// Starts a session at `pos`, discarding any previous one.
    pub fn begin(&mut self, mode: Option<DragMode>, pos: Point) {
        *self = Self {
            mode,
            start: pos,
            last: pos,
            dragging: false,
            degrees: 0.0,
        };
    }

    /// Records a pointer move and returns the movement since the previous
    /// position, or `None` if no drag mode is active.
    pub fn update(&mut self, pos: Point) -> Option<DragStep> {
        let delta = pos - self.last;
        self.last = pos;
        let mode = self.mode?;
        if pos != self.start {
            self.dragging = true;
        }
        Some(DragStep { mode, delta })
    }

    /// Adds to the rotation total, in degrees.
    pub fn accumulate_degrees(&mut self, degrees: f64) {
        self.degrees += degrees;
    }

    /// Ends the session and returns what happened during it.
    pub fn finish(&mut self) -> DragSummary {
        let summary = DragSummary {
            mode: self.mode,
            start: self.start,
            dragged: self.dragging,
            degrees: self.degrees,
        };
        *self = Self::default();
        summary
    }

    /// The active mode, or `None` when idle.
    #[must_use]
    pub fn mode(&self) -> Option<DragMode> {
        self.mode
    }

    /// Screen position of the press.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns `true` once the pointer has left the start position with a
    /// mode active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Rotation accumulated so far, in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }
}
