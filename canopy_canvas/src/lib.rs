// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_canvas --heading-base-level=0

//! Canopy Canvas: a headless interactive 2D canvas.
//!
//! [`Canvas`] ties together a [`canopy_scene::Scene`] of selectable shapes, a
//! [`canopy_view::CanvasViewport`] with bounded wheel zoom, and the drag
//! state of [`canopy_event_state`]. The host window owns the event loop:
//!
//! - Pointer input goes in through [`Canvas::pointer_down`],
//!   [`Canvas::pointer_move`], [`Canvas::pointer_up`],
//!   [`Canvas::double_click`] and [`Canvas::wheel`].
//! - Redraw requests and [`CanvasEvent`]s come out through the
//!   [`CanvasHost`] the canvas was built with.
//! - Drawing happens in [`Canvas::paint`], against any
//!   [`canopy_shapes::Painter`].
//!
//! Clicking selects the object under the pointer. Repeated clicks on a stack
//! of overlapping objects cycle through the ones sharing the lowest priority;
//! holding only Alt cycles through all of them. Dragging pans, moves, or
//! rotates depending on the active [`canopy_event_state::Tool`], and move
//! and rotate notifications are sent once, when the drag ends.
//!
//! ## Example
//!
//! ```rust
//! use canopy_canvas::{Canvas, CanvasEvent, CanvasHost};
//! use canopy_event_state::{PointerButton, PointerEvent};
//! use canopy_scene::SceneObject;
//! use canopy_shapes::Circle;
//! use kurbo::{Point, Size};
//!
//! #[derive(Debug, Default)]
//! struct Host {
//!     events: Vec<CanvasEvent>,
//! }
//!
//! impl CanvasHost for Host {
//!     fn request_redraw(&mut self) {}
//!     fn emit(&mut self, event: CanvasEvent) {
//!         self.events.push(event);
//!     }
//! }
//!
//! let mut canvas = Canvas::new(Host::default());
//! canvas.set_canvas_area_size(Size::new(1000.0, 1000.0));
//! let dot = canvas.add(SceneObject::from_primitive(Circle::new((500.0, 500.0), 50.0).unwrap()));
//!
//! let at = canvas.screen_from_world(Point::new(500.0, 500.0));
//! canvas.pointer_down(PointerEvent::new(at, PointerButton::Primary));
//! canvas.pointer_up(PointerEvent::new(at, PointerButton::Primary));
//!
//! assert_eq!(canvas.selected(), &[dot]);
//! assert_eq!(
//!     canvas.host().events.last(),
//!     Some(&CanvasEvent::ObjectSelected(Some(dot)))
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod config;
mod events;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use events::{CanvasEvent, CanvasHost};
