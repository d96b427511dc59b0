// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_view --heading-base-level=0

//! Canopy View: the viewport of an interactive canvas.
//!
//! This crate provides a small, headless model of a fixed-size world-space
//! canvas area shown inside a host control. It focuses on:
//! - Scale state bounded to `[scale_min, scale_max]` (never below `1`, never
//!   above `1000`).
//! - Coordinate conversion between screen pixels and world space, with
//!   optional vertical inversion.
//! - Wheel zoom anchored at the pointer, with static or dynamic steps.
//! - Fitting the canvas area into the control and centering it.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to keep their own objects in world space and use [`CanvasViewport`] to map
//! pointer positions into the world and world geometry back onto the screen.
//!
//! ## Scale convention
//!
//! The scale is the number of world units covered by one screen pixel. A
//! scale of `10` draws a 1000-unit wide area 100 pixels wide; larger scales
//! zoom *out*.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use canopy_view::CanvasViewport;
//!
//! // 480x360 control showing a 7000x8000 world-unit canvas area.
//! let mut view = CanvasViewport::new(Size::new(480.0, 360.0));
//! view.set_area_size(Size::new(7000.0, 8000.0));
//!
//! // Convert a pointer position into world space (for hit testing, etc.).
//! let pointer = Point::new(240.0, 180.0);
//! let world = view.world_from_screen(pointer);
//! let back = view.screen_from_world(world);
//! assert!((back - pointer).hypot() < 1e-9);
//! ```
//!
//! ## Anchored zoom
//!
//! [`CanvasViewport::zoom_at`] keeps the world point under the pointer fixed
//! on screen:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use canopy_view::CanvasViewport;
//!
//! let mut view = CanvasViewport::new(Size::new(800.0, 600.0));
//! view.set_area_size(Size::new(10_000.0, 10_000.0));
//!
//! let pointer = Point::new(100.0, 450.0);
//! let before = view.world_from_screen(pointer);
//! view.zoom_at(pointer, 120.0, false);
//! let after = view.world_from_screen(pointer);
//! assert!((after - before).hypot() < 1e-6);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod viewport;

pub use modes::{ScaleChange, ScaleMode};
pub use viewport::{CanvasViewport, FIT_MARGIN, SCALE_CEILING, SCALE_FLOOR, ViewportDebugInfo};
