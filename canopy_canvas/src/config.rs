// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_event_state::Tool;
use canopy_view::{SCALE_CEILING, SCALE_FLOOR, ScaleMode};
use kurbo::Size;
use peniko::Color;

/// Initial settings for a [`Canvas`](crate::Canvas).
///
/// Every field can also be changed later through the matching setter on the
/// canvas. Scale bounds and step are clamped the same way in both places.
#[derive(Clone, Copy, Debug)]
pub struct CanvasConfig {
    /// Whether selecting with "add" keeps the existing selection.
    pub multi_select: bool,
    /// Smallest scale (most zoomed in). Never below `1`.
    pub scale_min: f64,
    /// Largest scale (most zoomed out). Never above `1000`.
    pub scale_max: f64,
    /// Wheel zoom step. Never below `1`.
    pub scale_step: f64,
    /// Whether the wheel step is fixed or grows with the scale.
    pub scale_mode: ScaleMode,
    /// Whether objects may draw outside the canvas area.
    pub draw_outside_canvas_area: bool,
    /// The active tool.
    pub tool: Tool,
    /// Whether world `y` grows upwards.
    pub invert_y: bool,
    /// Fill color of the canvas area.
    pub canvas_back_color: Color,
    /// Size of the host control in screen pixels.
    pub control_size: Size,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            multi_select: false,
            scale_min: SCALE_FLOOR,
            scale_max: SCALE_CEILING,
            scale_step: 1.0,
            scale_mode: ScaleMode::Static,
            draw_outside_canvas_area: true,
            tool: Tool::Pan,
            invert_y: false,
            canvas_back_color: Color::WHITE,
            control_size: Size::new(480.0, 360.0),
        }
    }
}
