// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven behavior of `Canvas`: click selection and cycling, drags,
//! wheel zoom, batching, and what reaches the host.

use canopy_canvas::{Canvas, CanvasConfig, CanvasEvent, CanvasHost};
use canopy_event_state::{Modifiers, PointerButton, PointerEvent, Tool};
use canopy_scene::{ObjectInteractions, SceneObject};
use canopy_shapes::{Font, ImageId, Outline, Painter, Polygon};
use canopy_view::ScaleChange;
use kurbo::{Affine, Point, Rect, Size, Vec2};
use peniko::Color;

#[derive(Debug, Default)]
struct Recorder {
    redraws: usize,
    events: Vec<CanvasEvent>,
}

impl Recorder {
    fn reset(&mut self) {
        self.redraws = 0;
        self.events.clear();
    }
}

impl CanvasHost for Recorder {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn emit(&mut self, event: CanvasEvent) {
        self.events.push(event);
    }
}

const CENTER: Point = Point::new(500.0, 500.0);

/// 1000x1000 area at scale 5, centered in the default 480x360 control, so
/// world (500, 500) sits exactly at screen (240, 180).
fn canvas() -> Canvas<Recorder> {
    let mut canvas = Canvas::new(Recorder::default());
    canvas.set_canvas_area_size(Size::new(1000.0, 1000.0));
    canvas.set_scale(5.0);
    canvas.recenter();
    canvas.host_mut().reset();
    canvas
}

fn square(center: Point) -> SceneObject {
    SceneObject::from_primitive(Polygon::rect(center, 100.0, 100.0).unwrap())
}

fn press(canvas: &mut Canvas<Recorder>, button: PointerButton, screen: Point) {
    canvas.pointer_down(PointerEvent::new(screen, button));
}

fn release(canvas: &mut Canvas<Recorder>, button: PointerButton, screen: Point) {
    canvas.pointer_up(PointerEvent::new(screen, button));
}

fn click_with(canvas: &mut Canvas<Recorder>, world: Point, modifiers: Modifiers) {
    let at = canvas.screen_from_world(world);
    let event = PointerEvent::new(at, PointerButton::Primary).with_modifiers(modifiers);
    canvas.pointer_down(event);
    canvas.pointer_up(event);
}

fn click(canvas: &mut Canvas<Recorder>, world: Point) {
    click_with(canvas, world, Modifiers::empty());
}

fn drag(canvas: &mut Canvas<Recorder>, button: PointerButton, from: Point, path: &[Vec2]) {
    press(canvas, button, from);
    let mut at = from;
    for step in path {
        at += *step;
        canvas.pointer_move(PointerEvent::new(at, button));
    }
    release(canvas, button, at);
}

#[test]
fn screen_mapping_is_exact() {
    let canvas = canvas();
    assert_eq!(canvas.screen_from_world(CENTER), Point::new(240.0, 180.0));
    assert_eq!(canvas.world_from_screen(Point::new(240.0, 180.0)), CENTER);
}

#[test]
fn repeated_clicks_cycle_through_stacked_objects() {
    let mut canvas = canvas();
    let ids = [
        canvas.add(square(CENTER)),
        canvas.add(square(CENTER)),
        canvas.add(square(CENTER)),
    ];
    canvas.host_mut().reset();

    for expected in [ids[0], ids[1], ids[2], ids[0]] {
        click(&mut canvas, CENTER);
        assert_eq!(canvas.selected(), &[expected]);
        assert_eq!(
            canvas.host().events.last(),
            Some(&CanvasEvent::ObjectSelected(Some(expected)))
        );
    }
    assert_eq!(canvas.host().events.len(), 4);
}

#[test]
fn lower_priority_value_wins_unless_alt_is_held() {
    let mut canvas = canvas();
    let background = canvas.add(square(CENTER).with_priority(5));
    let handle = canvas.add(square(CENTER).with_priority(0));

    click(&mut canvas, CENTER);
    assert_eq!(canvas.selected(), &[handle]);
    click(&mut canvas, CENTER);
    assert_eq!(canvas.selected(), &[handle], "the group is only the handle");

    click_with(&mut canvas, CENTER, Modifiers::ALT);
    assert_eq!(canvas.selected(), &[background]);

    // Alt together with another modifier does not count.
    click_with(&mut canvas, CENTER, Modifiers::ALT | Modifiers::SHIFT);
    assert_eq!(canvas.selected(), &[handle]);
}

#[test]
fn unselectable_objects_are_skipped() {
    let mut canvas = canvas();
    canvas.add(square(CENTER).with_interactions(ObjectInteractions::MOVABLE));
    click(&mut canvas, CENTER);
    assert!(canvas.selected().is_empty());
    assert_eq!(canvas.host().events, [CanvasEvent::ObjectSelected(None)]);
}

#[test]
fn click_on_empty_space_clears_selection() {
    let mut canvas = canvas();
    let id = canvas.add(square(CENTER));
    click(&mut canvas, CENTER);
    canvas.host_mut().reset();

    click(&mut canvas, Point::new(50.0, 50.0));
    assert!(canvas.selected().is_empty());
    assert!(!canvas.object(id).unwrap().is_selected());
    assert_eq!(canvas.host().events, [CanvasEvent::ObjectSelected(None)]);
}

#[test]
fn free_tool_press_without_selection_reports_deselect() {
    let mut canvas = canvas();
    canvas.set_tool(Tool::Free);
    let at = canvas.screen_from_world(Point::new(50.0, 50.0));
    press(&mut canvas, PointerButton::Primary, at);
    assert_eq!(canvas.host().events, [CanvasEvent::ObjectSelected(None)]);
    release(&mut canvas, PointerButton::Primary, at);
}

#[test]
fn move_drag_reports_total_delta_once() {
    let mut canvas = canvas();
    canvas.set_tool(Tool::Free);
    let id = canvas.add(square(CENTER));
    click(&mut canvas, CENTER);
    canvas.host_mut().reset();

    let from = canvas.screen_from_world(CENTER);
    drag(
        &mut canvas,
        PointerButton::Primary,
        from,
        &[Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)],
    );

    assert_eq!(
        canvas.host().events,
        [CanvasEvent::ObjectMoved {
            object: id,
            delta: Vec2::new(15.0, 0.0),
        }]
    );
    assert_eq!(
        canvas.object(id).unwrap().position(),
        Point::new(515.0, 500.0)
    );
    assert_eq!(canvas.selected(), &[id], "a drag is not a click");
    assert!(!canvas.is_dragging());
    assert_eq!(canvas.drag_mode(), None);
}

#[test]
fn move_drag_back_to_start_reports_nothing() {
    let mut canvas = canvas();
    canvas.set_tool(Tool::Move);
    let id = canvas.add(square(CENTER));
    click(&mut canvas, CENTER);
    canvas.host_mut().reset();

    let from = canvas.screen_from_world(CENTER);
    drag(
        &mut canvas,
        PointerButton::Primary,
        from,
        &[Vec2::new(4.0, -2.0), Vec2::new(-4.0, 2.0)],
    );

    assert!(canvas.host().events.is_empty());
    assert_eq!(canvas.object(id).unwrap().position(), CENTER);
    assert!(canvas.host().redraws > 0);
}

#[test]
fn move_respects_inverted_y_and_capabilities() {
    let mut canvas = canvas();
    canvas.set_tool(Tool::Move);
    canvas.set_multi_select(true);
    let free = canvas.add(square(CENTER));
    let pinned = canvas.add(
        square(Point::new(800.0, 800.0)).with_interactions(ObjectInteractions::SELECTABLE),
    );
    canvas.select_object(Some(free), false);
    canvas.select_object(Some(pinned), true);
    canvas.set_invert_y(true);
    canvas.host_mut().reset();

    let from = canvas.screen_from_world(CENTER);
    drag(&mut canvas, PointerButton::Primary, from, &[Vec2::new(0.0, -2.0)]);

    // Screen up is world up when inverted.
    assert_eq!(
        canvas.host().events,
        [CanvasEvent::ObjectMoved {
            object: free,
            delta: Vec2::new(0.0, 10.0),
        }]
    );
    assert_eq!(
        canvas.object(free).unwrap().position(),
        Point::new(500.0, 510.0)
    );
    assert_eq!(
        canvas.object(pinned).unwrap().position(),
        Point::new(800.0, 800.0)
    );
}

#[test]
fn secondary_drag_rotates_selection() {
    let mut canvas = canvas();
    canvas.set_tool(Tool::Free);
    let id = canvas.add(square(CENTER));
    click(&mut canvas, CENTER);
    canvas.host_mut().reset();

    let from = canvas.screen_from_world(CENTER);
    drag(
        &mut canvas,
        PointerButton::Secondary,
        from,
        &[Vec2::new(0.0, 10.0), Vec2::new(5.0, 20.0)],
    );

    let [CanvasEvent::ObjectRotated { object, radians }] = canvas.host().events[..] else {
        panic!("expected one rotation, got {:?}", canvas.host().events);
    };
    assert_eq!(object, id);
    assert!((radians - 30_f64.to_radians()).abs() < 1e-12);
    assert_eq!(canvas.object(id).unwrap().position(), CENTER);
}

#[test]
fn secondary_press_without_selection_does_nothing() {
    let mut canvas = canvas();
    canvas.set_tool(Tool::Free);
    let before = canvas.viewport().origin();
    drag(
        &mut canvas,
        PointerButton::Secondary,
        Point::new(100.0, 100.0),
        &[Vec2::new(10.0, 10.0)],
    );
    assert_eq!(canvas.viewport().origin(), before);
    assert!(canvas.host().events.is_empty());
}

#[test]
fn pan_drag_moves_origin_one_to_one() {
    let mut canvas = canvas();
    let id = canvas.add(square(CENTER));
    click(&mut canvas, CENTER);
    canvas.host_mut().reset();
    let before = canvas.viewport().origin();

    drag(
        &mut canvas,
        PointerButton::Primary,
        Point::new(10.0, 10.0),
        &[Vec2::new(20.0, 15.0)],
    );

    assert_eq!(canvas.viewport().origin(), before + Vec2::new(20.0, 15.0));
    assert_eq!(canvas.selected(), &[id], "panning keeps the selection");
    assert!(canvas.host().events.is_empty());
}

#[test]
fn middle_drag_pans_with_any_tool() {
    let mut canvas = canvas();
    canvas.set_tool(Tool::Rotate);
    let before = canvas.viewport().origin();
    drag(
        &mut canvas,
        PointerButton::Middle,
        Point::new(10.0, 10.0),
        &[Vec2::new(-5.0, 5.0)],
    );
    assert_eq!(canvas.viewport().origin(), before + Vec2::new(-5.0, 5.0));
}

#[test]
fn wheel_zoom_reports_scale_changes() {
    let mut canvas = canvas();
    let pointer = Point::new(100.0, 100.0);
    let anchored = canvas.world_from_screen(pointer);

    canvas.wheel(PointerEvent::new(pointer, PointerButton::Middle), 120.0);
    assert_eq!(canvas.scale(), 4.0);
    assert!((canvas.world_from_screen(pointer) - anchored).hypot() < 1e-9);

    let ctrl = PointerEvent::new(pointer, PointerButton::Middle).with_modifiers(Modifiers::CTRL);
    canvas.wheel(ctrl, -120.0);
    assert_eq!(canvas.scale(), 6.0);

    assert_eq!(
        canvas.host().events,
        [
            CanvasEvent::ScaleChanged(ScaleChange {
                previous: 5.0,
                current: 4.0,
            }),
            CanvasEvent::ScaleChanged(ScaleChange {
                previous: 4.0,
                current: 6.0,
            }),
        ]
    );
}

#[test]
fn wheel_at_bound_is_silent() {
    let mut canvas = canvas();
    canvas.set_scale(1.0);
    canvas.host_mut().reset();
    canvas.wheel(PointerEvent::new(Point::ZERO, PointerButton::Middle), 120.0);
    assert_eq!(canvas.scale(), 1.0);
    assert!(canvas.host().events.is_empty());
}

#[test]
fn middle_double_click_fits_again() {
    let mut canvas = canvas();
    canvas.double_click(PointerEvent::new(Point::ZERO, PointerButton::Primary));
    assert_eq!(canvas.scale(), 5.0);

    canvas.double_click(PointerEvent::new(Point::ZERO, PointerButton::Middle));
    let fitted = 1000.0 / 340.0;
    assert!((canvas.scale() - fitted).abs() < 1e-12);
    let [CanvasEvent::ScaleChanged(change)] = canvas.host().events[..] else {
        panic!("expected one scale change, got {:?}", canvas.host().events);
    };
    assert_eq!(change.previous, 5.0);
    assert_eq!(change.current, canvas.scale());
}

#[test]
fn hidden_objects_are_not_hit_or_selected() {
    let mut canvas = canvas();
    let id = canvas.add(square(CENTER));
    click(&mut canvas, CENTER);
    assert_eq!(canvas.selected(), &[id]);

    assert!(canvas.set_visible(id, false));
    assert!(canvas.selected().is_empty());
    assert!(!canvas.object(id).unwrap().is_selected());
    assert_eq!(canvas.first_object_at(CENTER), None);

    click(&mut canvas, CENTER);
    assert!(canvas.selected().is_empty());
    assert!(!canvas.select_object(Some(id), false));
}

#[test]
fn removal_leaves_no_trace() {
    let mut canvas = canvas();
    let id = canvas.add(square(CENTER));
    click(&mut canvas, CENTER);

    assert!(canvas.remove(id).is_some());
    assert_eq!(canvas.selected_count(), 0);
    assert!(canvas.object(id).is_none());
    assert!(canvas.remove(id).is_none());
    assert!(!canvas.set_visible(id, true));

    // The slot is reused under a fresh id.
    let again = canvas.add(square(CENTER));
    assert_ne!(again, id);
    click(&mut canvas, CENTER);
    assert_eq!(canvas.selected(), &[again]);
}

#[test]
fn batched_update_requests_one_redraw() {
    let mut canvas = canvas();
    canvas.begin_update();
    let low = canvas.add(square(CENTER).with_draw_order(10));
    let high = canvas.add(square(CENTER).with_draw_order(-10));
    canvas.add(square(Point::new(100.0, 100.0)));
    assert_eq!(canvas.host().redraws, 0);

    canvas.end_update();
    assert_eq!(canvas.host().redraws, 1);
    assert!(!canvas.scene().is_updating());

    let order: Vec<_> = canvas.scene().iter().map(|(id, _)| id).collect();
    assert_eq!(order.first(), Some(&high));
    assert_eq!(order.last(), Some(&low));
}

#[test]
fn multi_select_only_extends_when_enabled() {
    let mut canvas = canvas();
    let a = canvas.add(square(CENTER));
    let b = canvas.add(square(Point::new(100.0, 100.0)));

    canvas.select_object(Some(a), false);
    canvas.select_object(Some(b), true);
    assert_eq!(canvas.selected(), &[b]);

    canvas.set_multi_select(true);
    canvas.select_object(Some(a), true);
    assert_eq!(canvas.selected(), &[b, a]);

    assert!(canvas.unselect_object(b));
    assert_eq!(canvas.selected(), &[a]);

    canvas.select_object(None, false);
    assert_eq!(canvas.selected_count(), 0);
    assert!(canvas.host().events.is_empty(), "programmatic selection is silent");
}

#[test]
fn config_is_applied_and_clamped() {
    let config = CanvasConfig {
        scale_min: 0.5,
        scale_max: 5000.0,
        scale_step: 0.0,
        tool: Tool::Free,
        multi_select: true,
        ..CanvasConfig::default()
    };
    let canvas = Canvas::with_config(config, Recorder::default());
    assert_eq!(canvas.scale_min(), 1.0);
    assert_eq!(canvas.scale_max(), 1000.0);
    assert_eq!(canvas.scale_step(), 1.0);
    assert_eq!(canvas.tool(), Tool::Free);
    assert!(canvas.multi_select());
    assert_eq!(canvas.control_size(), Size::new(480.0, 360.0));
    assert!(canvas.host().events.is_empty());
}

#[test]
fn tightening_scale_bounds_reports_the_clamp() {
    let mut canvas = canvas();
    canvas.set_scale_max(3.0);
    assert_eq!(canvas.scale(), 3.0);
    assert_eq!(
        canvas.host().events,
        [CanvasEvent::ScaleChanged(ScaleChange {
            previous: 5.0,
            current: 3.0,
        })]
    );
}

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Transform(Vec2),
    Clip(Rect),
    Unclip,
    Fill(Rect, Color),
    Polygon(usize),
    Other,
}

#[derive(Debug, Default)]
struct Ops(Vec<Op>);

impl Painter for Ops {
    fn set_transform(&mut self, transform: Affine) {
        self.0.push(Op::Transform(transform.translation()));
    }
    fn push_clip(&mut self, rect: Rect) {
        self.0.push(Op::Clip(rect));
    }
    fn pop_clip(&mut self) {
        self.0.push(Op::Unclip);
    }
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.0.push(Op::Fill(rect, color));
    }
    fn stroke_rect(&mut self, _rect: Rect, _outline: &Outline) {
        self.0.push(Op::Other);
    }
    fn stroke_ellipse(&mut self, _bounds: Rect, _outline: &Outline) {
        self.0.push(Op::Other);
    }
    fn stroke_polygon(&mut self, points: &[Point], _outline: &Outline) {
        self.0.push(Op::Polygon(points.len()));
    }
    fn measure_text(&mut self, _text: &str, _font: &Font) -> Size {
        Size::ZERO
    }
    fn fill_text(&mut self, _origin: Point, _text: &str, _font: &Font, _zoom: f64, _c: Color) {
        self.0.push(Op::Other);
    }
    fn draw_image(&mut self, _image: ImageId, _src: Rect, _dest: Rect) {
        self.0.push(Op::Other);
    }
}

#[test]
fn paint_fills_area_then_draws_visible_objects() {
    let mut canvas = canvas();
    canvas.set_canvas_back_color(Color::BLACK);
    canvas.add(square(CENTER));
    let hidden = canvas.add(square(CENTER));
    canvas.set_visible(hidden, false);

    let area = Rect::new(0.0, 0.0, 200.0, 200.0);
    let mut ops = Ops::default();
    canvas.paint(&mut ops);
    assert_eq!(
        ops.0,
        [
            Op::Transform(Vec2::new(140.0, 80.0)),
            Op::Fill(area, Color::BLACK),
            Op::Polygon(4),
        ]
    );

    canvas.set_draw_outside_canvas_area(false);
    let mut ops = Ops::default();
    canvas.paint(&mut ops);
    assert_eq!(ops.0[2..], [Op::Clip(area), Op::Polygon(4), Op::Unclip]);
}

#[test]
fn paint_is_skipped_while_updating() {
    let mut canvas = canvas();
    canvas.begin_update();
    canvas.add(square(CENTER));
    let mut ops = Ops::default();
    canvas.paint(&mut ops);
    assert!(ops.0.is_empty());
}
