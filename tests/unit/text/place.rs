use super::*;

use crate::canvas::testing::{DrawCall, RecordingCanvas};
use crate::fonts::catalog::FontHandle;

fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> PageRect {
    PageRect { x0, y0, x1, y1 }
}

fn text_origin(canvas: &RecordingCanvas) -> (f64, f64) {
    match &canvas.calls[0] {
        DrawCall::Text { origin, .. } => *origin,
        other => panic!("expected a text call, got {other:?}"),
    }
}

#[test]
fn center_splits_the_leftover_space() {
    let origin = place(rect(0, 0, 100, 50), (60.0, 20.0), Position::CENTER);
    assert_eq!(origin, (20.0, 15.0));
}

#[test]
fn low_offsets_from_the_near_edge() {
    let pos = Position::new(Anchor::Low(4.0), Anchor::Low(3.0));
    let origin = place(rect(10, 20, 110, 70), (30.0, 10.0), pos);
    assert_eq!(origin, (14.0, 23.0));
}

#[test]
fn high_leaves_a_gap_at_the_far_edge() {
    let pos = Position::new(Anchor::High(5.0), Anchor::High(5.0));
    let origin = place(rect(10, 20, 110, 70), (30.0, 10.0), pos);
    assert_eq!(origin, (75.0, 55.0));
}

#[test]
fn oversized_runs_center_past_the_edges() {
    let origin = place(rect(0, 0, 10, 10), (20.0, 4.0), Position::CENTER);
    assert_eq!(origin.0, -5.0);
}

#[test]
fn draw_anchored_places_the_nominal_box() {
    let mut canvas = RecordingCanvas::new(200, 100);
    let font = FittedFont {
        handle: FontHandle(0),
        px: 20,
    };
    let pos = Position::new(Anchor::Low(2.0), Anchor::Center);
    draw_anchored(&mut canvas, rect(0, 0, 100, 50), "Hi", font, Rgba8::BLACK, pos, false)
        .unwrap();
    assert_eq!(text_origin(&canvas), (2.0, 15.0));
}

#[test]
fn squeezed_placement_shifts_by_the_ink_offset() {
    let mut canvas = RecordingCanvas::new(200, 100);
    let font = FittedFont {
        handle: FontHandle(0),
        px: 20,
    };
    let pos = Position::new(Anchor::Low(0.0), Anchor::Low(0.0));
    draw_anchored(&mut canvas, rect(0, 0, 100, 50), "Hi", font, Rgba8::BLACK, pos, true)
        .unwrap();
    assert_eq!(text_origin(&canvas), (-1.0, -2.0));
}

#[test]
fn squeezed_high_anchor_measures_the_ink_height() {
    let mut canvas = RecordingCanvas::new(200, 100);
    let font = FittedFont {
        handle: FontHandle(0),
        px: 20,
    };
    let pos = Position::new(Anchor::Low(0.0), Anchor::High(4.0));
    draw_anchored(&mut canvas, rect(0, 0, 100, 50), "Hi", font, Rgba8::BLACK, pos, true)
        .unwrap();
    assert_eq!(text_origin(&canvas), (-1.0, 28.0));
}
