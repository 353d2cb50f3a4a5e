use super::*;

use chrono::NaiveDate;

use crate::boxes::registry::default_registry;
use crate::canvas::testing::{DrawCall, RecordingCanvas};
use crate::config::model::PageSettings;
use crate::foundation::core::{Orientation, Rgba8};

fn cfg() -> ResolvedConfig {
    let mut cfg = PageSettings::default()
        .resolve(Orientation::Landscape, Vec::new())
        .unwrap();
    cfg.date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    cfg
}

fn photo() -> Photo {
    Photo::from_image(image::RgbaImage::from_pixel(
        3,
        2,
        image::Rgba([10, 20, 30, 255]),
    ))
}

fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> PageRect {
    PageRect { x0, y0, x1, y1 }
}

#[test]
fn the_whole_page_renders_in_order() {
    let mut canvas = RecordingCanvas::new(1200, 1050);
    let registry = default_registry();
    let plan = render_page(&mut canvas, &cfg(), &registry, &photo()).unwrap();

    assert_eq!(plan.page, rect(0, 0, 1200, 1050));
    assert_eq!(plan.photo, rect(0, 0, 1200, 800));
    assert_eq!(plan.caption, None);
    assert_eq!(plan.content, rect(47, 824, 1153, 1003));
    let kinds: Vec<char> = plan.boxes.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, ['m', 'd', 'e']);
    assert_eq!(plan.boxes[0].rect, rect(47, 824, 400, 1003));
    assert_eq!(plan.boxes[1].rect, rect(424, 824, 776, 1003));
    assert_eq!(plan.boxes[2].rect, rect(800, 824, 1153, 1003));

    assert_eq!(
        canvas.calls[0],
        DrawCall::FillRect {
            rect: rect(0, 0, 1200, 1050),
            fill: Some(Rgba8::opaque(0xde, 0xde, 0xde)),
            border: None,
        }
    );
    assert!(matches!(canvas.calls[1], DrawCall::Photo { .. }));

    let texts = canvas.drawn_texts();
    assert!(texts.contains(&"Mon"));
    assert!(texts.contains(&"Tuesday"));
    assert!(texts.contains(&"25"));
    assert!(texts.contains(&"Tuesday:"));
}

#[test]
fn unknown_letters_abort_before_any_drawing() {
    let mut canvas = RecordingCanvas::new(1200, 1050);
    let registry = default_registry();
    let mut cfg = cfg();
    cfg.format.boxes = vec!['m', 'q'];
    let err = render_page(&mut canvas, &cfg, &registry, &photo()).unwrap_err();
    assert_eq!(err.to_string(), "unknown box type 'q'");
    assert!(canvas.calls.is_empty());
}

#[test]
fn the_plan_serializes_with_format_letters() {
    let mut canvas = RecordingCanvas::new(1200, 1050);
    let registry = default_registry();
    let plan = render_page(&mut canvas, &cfg(), &registry, &photo()).unwrap();

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["boxes"][0]["kind"], "m");
    assert_eq!(json["boxes"][0]["rect"]["x0"], 47);
    assert!(json["caption"].is_null());
    assert_eq!(json["page"]["x1"], 1200);
    assert_eq!(json["photo"]["y1"], 800);
}
