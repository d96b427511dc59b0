// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How [`crate::CanvasViewport::zoom_at`] derives its scale step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Every wheel notch changes the scale by exactly the configured step.
    #[default]
    Static,
    /// The step is `max(1, floor(scale / step))`.
    ///
    /// The further the view is zoomed out (the larger the scale), the larger
    /// each notch becomes, so zooming accelerates when far out and slows down
    /// when close in.
    Dynamic,
}

/// A change of the viewport scale, reported by every operation that changes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleChange {
    /// Scale before the operation.
    pub previous: f64,
    /// Scale after the operation.
    pub current: f64,
}
