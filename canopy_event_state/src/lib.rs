// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_event_state --heading-base-level=0

//! Canopy Event State: pointer interaction state for a canvas.
//!
//! This crate holds the small state machines that turn raw pointer input into
//! canvas gestures, without knowing anything about the scene:
//!
//! - [`PointerEvent`], [`PointerButton`] and [`Modifiers`]: the input
//!   vocabulary. Modifiers travel with each event.
//! - [`Tool`] and [`DragMode`]: which gesture a press starts, given the active
//!   tool and whether anything is selected.
//! - [`DragSession`]: one press-move-release cycle, tracking the start
//!   position, incremental deltas, whether the pointer actually moved, and the
//!   accumulated rotation.
//!
//! ## Lifecycle
//!
//! A session is either idle or in exactly one [`DragMode`]. A press resolves
//! a mode with [`Tool::drag_mode`] and begins the session; moves report
//! [`DragStep`]s; a release always returns the session to idle through
//! [`DragSession::finish`], so no gesture can be left half-finished.
//!
//! ```rust
//! use kurbo::Point;
//! use canopy_event_state::{DragMode, DragSession, PointerButton, Tool};
//!
//! let mut drag = DragSession::default();
//!
//! // Free tool with a selection: a primary drag moves it.
//! let mode = Tool::Free.drag_mode(PointerButton::Primary, true);
//! drag.begin(mode, Point::new(100.0, 100.0));
//!
//! let step = drag.update(Point::new(103.0, 100.0)).unwrap();
//! assert_eq!(step.mode, DragMode::Move);
//!
//! let summary = drag.finish();
//! assert!(summary.dragged);
//! assert_eq!(drag.mode(), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod drag;
mod input;
mod tool;

pub use drag::{DragSession, DragStep, DragSummary};
pub use input::{Modifiers, PointerButton, PointerEvent};
pub use tool::{DragMode, Tool};
