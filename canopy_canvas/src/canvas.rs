// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use canopy_event_state::{DragMode, DragSession, PointerButton, PointerEvent, Tool};
use canopy_scene::{ObjectId, ObjectInteractions, PrimitiveId, Scene, SceneObject};
use canopy_shapes::{Painter, Primitive};
use canopy_view::{CanvasViewport, ScaleChange, ScaleMode, ViewportDebugInfo};
use kurbo::{Affine, Point, Size, Vec2};
use peniko::Color;
use tracing::{debug, trace};

use crate::{CanvasConfig, CanvasEvent, CanvasHost};

/// An interactive canvas: a scene of objects under a pan/zoom viewport,
/// driven by pointer input.
///
/// The host feeds pointer events in, receives [`CanvasEvent`]s and redraw
/// requests through its [`CanvasHost`], and calls [`Canvas::paint`] when it
/// redraws. Every mutating call requests one redraw, except inside a
/// [`Canvas::begin_update`] batch, where requests are held back until
/// [`Canvas::end_update`] issues a single one.
#[derive(Debug)]
pub struct Canvas<H = ()> {
    viewport: CanvasViewport,
    scene: Scene,
    drag: DragSession,
    host: H,
    multi_select: bool,
    draw_outside_canvas_area: bool,
    tool: Tool,
    canvas_back_color: Color,
}

impl<H: CanvasHost> Canvas<H> {
    /// Creates a canvas with default settings.
    pub fn new(host: H) -> Self {
        Self::with_config(CanvasConfig::default(), host)
    }

    /// Creates a canvas from `config`.
    ///
    /// The (empty) canvas area is fitted and centered in the control, and
    /// no events are emitted.
    pub fn with_config(config: CanvasConfig, host: H) -> Self {
        let mut viewport = CanvasViewport::new(config.control_size);
        viewport.set_scale_min(config.scale_min);
        viewport.set_scale_max(config.scale_max);
        viewport.set_scale_step(config.scale_step);
        viewport.set_scale_mode(config.scale_mode);
        viewport.set_invert_y(config.invert_y);
        viewport.fit_and_center();
        Self {
            viewport,
            scene: Scene::new(),
            drag: DragSession::default(),
            host,
            multi_select: config.multi_select,
            draw_outside_canvas_area: config.draw_outside_canvas_area,
            tool: config.tool,
            canvas_back_color: config.canvas_back_color,
        }
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the canvas and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Read access to the scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Read access to the viewport.
    pub fn viewport(&self) -> &CanvasViewport {
        &self.viewport
    }

    /// Requests a redraw unless an update batch is open.
    pub fn invalidate(&mut self) {
        if !self.scene.is_updating() {
            self.host.request_redraw();
        }
    }

    // --- objects ---

    /// Adds an object and returns its id.
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = self.scene.insert(object);
        self.invalidate();
        id
    }

    /// Removes an object, deselecting it. Returns it if `id` was live.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let object = self.scene.remove(id)?;
        self.invalidate();
        Some(object)
    }

    /// Removes every object and clears the selection.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.invalidate();
    }

    /// Returns an object.
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.scene.get(id)
    }

    /// Returns an object for editing. Call [`Canvas::invalidate`] afterwards
    /// to have the change drawn.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.scene.get_mut(id)
    }

    /// Shows or hides an object. Hiding deselects it.
    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> bool {
        let changed = self.scene.set_visible(id, visible);
        if changed {
            self.invalidate();
        }
        changed
    }

    /// The first object in draw order for which `predicate` holds.
    pub fn find(&self, predicate: impl FnMut(&SceneObject) -> bool) -> Option<ObjectId> {
        self.scene.find(predicate)
    }

    /// The first visible object in draw order under a world point.
    pub fn first_object_at(&self, world: Point) -> Option<ObjectId> {
        self.scene.first_object_at(world)
    }

    /// Visible objects under a world point passing `filter`, by priority.
    pub fn objects_at(
        &self,
        world: Point,
        filter: impl FnMut(&SceneObject) -> bool,
    ) -> Vec<ObjectId> {
        self.scene.objects_at(world, filter)
    }

    /// Resolves a primitive handle.
    pub fn primitive(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.scene.primitive(id)
    }

    /// The primitive under a world point, if any.
    pub fn primitive_at(&self, world: Point) -> Option<PrimitiveId> {
        self.scene.primitive_at(world)
    }

    /// Suspends redraw requests and draw-order sorting.
    pub fn begin_update(&mut self) {
        self.scene.begin_update();
    }

    /// Sorts the draw order and requests a single redraw.
    pub fn end_update(&mut self) {
        self.scene.end_update();
        self.host.request_redraw();
    }

    // --- selection ---

    /// Selects an object, or clears the selection for `None`.
    ///
    /// With `add` set and multi-select enabled the object joins the current
    /// selection; otherwise it replaces it. Hidden objects and stale ids are
    /// ignored. Returns `true` if anything changed hands.
    pub fn select_object(&mut self, object: Option<ObjectId>, add: bool) -> bool {
        let Some(id) = object else {
            self.clear_selection();
            return true;
        };
        let selected = self.scene.select(id, add && self.multi_select);
        if selected {
            debug!(?id, count = self.scene.selected_count(), "object selected");
            self.invalidate();
        }
        selected
    }

    /// Deselects one object.
    pub fn unselect_object(&mut self, id: ObjectId) -> bool {
        let removed = self.scene.unselect(id);
        if removed {
            self.invalidate();
        }
        removed
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.scene.clear_selection();
        debug!("selection cleared");
        self.invalidate();
    }

    /// The selected objects, in selection order.
    pub fn selected(&self) -> &[ObjectId] {
        self.scene.selected()
    }

    /// Number of selected objects.
    pub fn selected_count(&self) -> usize {
        self.scene.selected_count()
    }

    // --- viewport ---

    /// Sets the world-space size of the canvas area and refits it.
    pub fn set_canvas_area_size(&mut self, size: Size) {
        let change = self.viewport.set_area_size(size);
        debug!(?size, scale = self.viewport.scale(), "canvas area resized");
        self.report_scale(change);
        self.invalidate();
    }

    /// World-space size of the canvas area.
    pub fn canvas_area_size(&self) -> Size {
        self.viewport.area_size()
    }

    /// Tells the canvas its control was resized. The canvas area keeps its
    /// scale and position.
    pub fn set_control_size(&mut self, size: Size) {
        self.viewport.set_control_size(size);
        self.invalidate();
    }

    /// Size of the host control.
    pub fn control_size(&self) -> Size {
        self.viewport.control_size()
    }

    /// Scales the canvas area to fit the control and centers it.
    pub fn fit_and_center(&mut self) {
        let change = self.viewport.fit_and_center();
        debug!(scale = self.viewport.scale(), origin = ?self.viewport.origin(), "fit and center");
        self.report_scale(change);
        self.invalidate();
    }

    /// Centers the canvas area at the current scale.
    pub fn recenter(&mut self) {
        self.viewport.recenter();
        debug!(origin = ?self.viewport.origin(), "recentered");
        self.invalidate();
    }

    /// Centers the control on a world point.
    pub fn scroll_to_world(&mut self, world: Point) {
        self.viewport.scroll_to_world(world);
        self.invalidate();
    }

    /// Converts a screen point to world space.
    pub fn world_from_screen(&self, pt: Point) -> Point {
        self.viewport.world_from_screen(pt)
    }

    /// Converts a world point to screen space.
    pub fn screen_from_world(&self, pt: Point) -> Point {
        self.viewport.screen_from_world(pt)
    }

    /// Current scale in world units per screen pixel.
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    /// Sets the scale, clamped to the bounds.
    pub fn set_scale(&mut self, scale: f64) {
        let change = self.viewport.set_scale(scale);
        self.report_scale(change);
        self.invalidate();
    }

    /// Lower scale bound.
    pub fn scale_min(&self) -> f64 {
        self.viewport.scale_min()
    }

    /// Sets the lower scale bound (at least `1`).
    pub fn set_scale_min(&mut self, value: f64) {
        let change = self.viewport.set_scale_min(value);
        self.report_scale(change);
        self.invalidate();
    }

    /// Upper scale bound.
    pub fn scale_max(&self) -> f64 {
        self.viewport.scale_max()
    }

    /// Sets the upper scale bound (at most `1000`).
    pub fn set_scale_max(&mut self, value: f64) {
        let change = self.viewport.set_scale_max(value);
        self.report_scale(change);
        self.invalidate();
    }

    /// Wheel zoom step.
    pub fn scale_step(&self) -> f64 {
        self.viewport.scale_step()
    }

    /// Sets the wheel zoom step (at least `1`).
    pub fn set_scale_step(&mut self, value: f64) {
        self.viewport.set_scale_step(value);
        self.invalidate();
    }

    /// Wheel zoom mode.
    pub fn scale_mode(&self) -> ScaleMode {
        self.viewport.scale_mode()
    }

    /// Sets the wheel zoom mode.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.viewport.set_scale_mode(mode);
        self.invalidate();
    }

    /// Whether world `y` grows upwards.
    pub fn invert_y(&self) -> bool {
        self.viewport.invert_y()
    }

    /// Sets whether world `y` grows upwards.
    pub fn set_invert_y(&mut self, invert: bool) {
        self.viewport.set_invert_y(invert);
        self.invalidate();
    }

    /// Snapshot of the viewport for inspection.
    pub fn viewport_debug_info(&self) -> ViewportDebugInfo {
        self.viewport.debug_info()
    }

    // --- settings ---

    /// Whether "add to selection" is honored.
    pub fn multi_select(&self) -> bool {
        self.multi_select
    }

    /// Enables or disables multi-select.
    pub fn set_multi_select(&mut self, enabled: bool) {
        self.multi_select = enabled;
        self.invalidate();
    }

    /// Whether objects may draw outside the canvas area.
    pub fn draw_outside_canvas_area(&self) -> bool {
        self.draw_outside_canvas_area
    }

    /// Sets whether objects may draw outside the canvas area.
    pub fn set_draw_outside_canvas_area(&mut self, enabled: bool) {
        self.draw_outside_canvas_area = enabled;
        self.invalidate();
    }

    /// The active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches the active tool. A drag already in progress keeps its mode.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.invalidate();
    }

    /// Fill color of the canvas area.
    pub fn canvas_back_color(&self) -> Color {
        self.canvas_back_color
    }

    /// Sets the fill color of the canvas area.
    pub fn set_canvas_back_color(&mut self, color: Color) {
        self.canvas_back_color = color;
        self.invalidate();
    }

    // --- input ---

    /// Returns `true` once the pointer has moved during the current drag.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The mode of the drag in progress, if any.
    pub fn drag_mode(&self) -> Option<DragMode> {
        self.drag.mode()
    }

    /// Handles a pointer press.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        let has_selection = self.scene.selected_count() > 0;
        let mode = self.tool.drag_mode(event.button, has_selection);
        self.drag.begin(mode, event.position);
        debug!(?mode, button = ?event.button, position = ?event.position, "drag begin");

        if event.button == PointerButton::Primary && self.tool == Tool::Free && !has_selection {
            self.scene.clear_selection();
            self.host.emit(CanvasEvent::ObjectSelected(None));
            self.invalidate();
        }
    }

    /// Handles pointer movement, applying the active drag.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        let Some(step) = self.drag.update(event.position) else {
            return;
        };
        trace!(mode = ?step.mode, delta = ?step.delta, "drag update");
        match step.mode {
            DragMode::Pan => {
                self.viewport.pan_by(step.delta);
                self.invalidate();
            }
            DragMode::Move => {
                if self.scene.selected_count() == 0 {
                    return;
                }
                let delta = self.world_delta(step.delta);
                self.scene
                    .translate_selected(ObjectInteractions::MOVABLE, delta);
                self.invalidate();
            }
            DragMode::Rotate => {
                if self.scene.selected_count() == 0 {
                    return;
                }
                let degrees = if self.viewport.invert_y() {
                    -step.delta.y
                } else {
                    step.delta.y
                };
                self.drag.accumulate_degrees(degrees);
                self.scene
                    .rotate_selected(ObjectInteractions::ROTATABLE, degrees.to_radians());
                self.invalidate();
            }
        }
    }

    /// Handles a pointer release: click-selects if the pointer never moved,
    /// commits the drag, and returns to idle.
    pub fn pointer_up(&mut self, event: PointerEvent) {
        let summary = self.drag.finish();

        if event.button == PointerButton::Primary && !summary.dragged {
            self.click_select(event);
        }

        match summary.mode {
            Some(DragMode::Move) if self.scene.selected_count() > 0 => {
                let start = self.viewport.world_from_screen(summary.start);
                let end = self.viewport.world_from_screen(event.position);
                if start != end {
                    let delta = end - start;
                    debug!(?delta, "move committed");
                    for object in self.scene.selected_with(ObjectInteractions::MOVABLE) {
                        self.host.emit(CanvasEvent::ObjectMoved { object, delta });
                    }
                }
            }
            Some(DragMode::Rotate) if self.scene.selected_count() > 0 => {
                if summary.degrees != 0.0 {
                    let radians = summary.degrees.to_radians();
                    debug!(degrees = summary.degrees, "rotation committed");
                    for object in self.scene.selected_with(ObjectInteractions::ROTATABLE) {
                        self.host
                            .emit(CanvasEvent::ObjectRotated { object, radians });
                    }
                }
                self.invalidate();
            }
            _ => {}
        }
    }

    /// Handles a double click. A middle double click fits and centers.
    pub fn double_click(&mut self, event: PointerEvent) {
        if event.button == PointerButton::Middle {
            self.fit_and_center();
        }
    }

    /// Handles a wheel notch at `event.position`. Positive deltas zoom in.
    /// Holding only Ctrl doubles the step.
    pub fn wheel(&mut self, event: PointerEvent, wheel_delta: f64) {
        if wheel_delta == 0.0 {
            return;
        }
        let change = self.viewport.zoom_at(
            event.position,
            wheel_delta,
            event.modifiers.accelerates_zoom(),
        );
        self.report_scale(change);
        self.invalidate();
    }

    // --- rendering ---

    /// Draws the canvas area and its visible objects. Does nothing while an
    /// update batch is open.
    pub fn paint<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        if self.scene.is_updating() {
            return;
        }
        let area = self.viewport.local_area_rect();
        painter.set_transform(Affine::translate(self.viewport.origin().to_vec2()));
        painter.fill_rect(area, self.canvas_back_color);

        let clip = !self.draw_outside_canvas_area;
        if clip {
            painter.push_clip(area);
        }
        self.scene.draw(
            painter,
            self.viewport.scale(),
            self.viewport.invert_height(),
        );
        if clip {
            painter.pop_clip();
        }
    }

    fn click_select(&mut self, event: PointerEvent) {
        let world = self.viewport.world_from_screen(event.position);
        let target = self
            .scene
            .pick(world, event.modifiers.ignores_priority());
        match target {
            Some(id) => {
                self.scene.select(id, false);
                debug!(?id, "click selected");
            }
            None => {
                self.scene.clear_selection();
                debug!("click cleared selection");
            }
        }
        self.host.emit(CanvasEvent::ObjectSelected(target));
        self.invalidate();
    }

    /// Screen movement as a world-space displacement.
    fn world_delta(&self, screen: Vec2) -> Vec2 {
        let y = if self.viewport.invert_y() {
            -screen.y
        } else {
            screen.y
        };
        Vec2::new(screen.x, y) * self.viewport.scale()
    }

    fn report_scale(&mut self, change: Option<ScaleChange>) {
        if let Some(change) = change {
            debug!(previous = change.previous, current = change.current, "scale changed");
            self.host.emit(CanvasEvent::ScaleChanged(change));
        }
    }
}
