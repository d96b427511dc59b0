// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_scene --heading-base-level=0

//! Canopy Scene: the objects of an interactive canvas and the selection over
//! them.
//!
//! A [`Scene`] owns [`SceneObject`]s, each a group of
//! [`canopy_shapes::Primitive`]s that share a position, interaction flags, a
//! selection priority, a draw order, and a [`DrawStyle`].
//!
//! - Objects are addressed by generational [`ObjectId`] handles; operations
//!   on a removed object's id are no-ops.
//! - Draw order is a stable sort on [`SceneObject::draw_order`], applied on
//!   insert, or once at the end of a [`Scene::begin_update`] batch.
//! - Hit testing ([`Scene::objects_at`]) only sees visible objects and orders
//!   results by ascending priority.
//! - The selection lives in the scene, so removing or hiding an object also
//!   deselects it and no object keeps a stale selected flag.
//!
//! The scene does not know about screen space, tools, or redraw scheduling;
//! `canopy_canvas` layers those on top.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use canopy_scene::{Scene, SceneObject};
//! use canopy_shapes::Polygon;
//!
//! let mut scene = Scene::new();
//! let square = || SceneObject::from_primitive(Polygon::rect((0.0, 0.0), 10.0, 10.0).unwrap());
//! let a = scene.insert(square());
//! let b = scene.insert(square().with_priority(0));
//!
//! // `b` has the lower priority value, so a click picks it first.
//! let first = scene.pick(Point::ZERO, false).unwrap();
//! assert_eq!(first, b);
//! scene.select(first, false);
//!
//! scene.remove(b);
//! assert_eq!(scene.selected_count(), 0);
//! assert_eq!(scene.pick(Point::ZERO, false), Some(a));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod object;
mod scene;
mod types;

pub use object::SceneObject;
pub use scene::Scene;
pub use types::{DEFAULT_PRIORITY, DrawStyle, ObjectId, ObjectInteractions, PrimitiveId};
