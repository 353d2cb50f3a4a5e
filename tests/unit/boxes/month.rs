use super::*;

use crate::canvas::testing::{DrawCall, RecordingCanvas};
use crate::config::model::PageSettings;
use crate::events::model::EventKinds;
use crate::foundation::core::{Orientation, Rgba8};

const CRIMSON: Rgba8 = Rgba8::opaque(0xb2, 0x22, 0x22);

fn cfg() -> ResolvedConfig {
    let mut cfg = PageSettings::default()
        .resolve(Orientation::Landscape, Vec::new())
        .unwrap();
    cfg.date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    cfg
}

fn slot() -> PageRect {
    PageRect {
        x0: 0,
        y0: 0,
        x1: 140,
        y1: 134,
    }
}

fn day_off(y: i32, m: u32, d: u32) -> Event {
    Event {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        kinds: EventKinds {
            day_off: true,
            ..EventKinds::default()
        },
        text: "off".to_string(),
    }
}

fn text_at(canvas: &RecordingCanvas, origin: (f64, f64)) -> (String, Rgba8) {
    canvas
        .calls
        .iter()
        .find_map(|c| match c {
            DrawCall::Text {
                origin: o,
                text,
                color,
                ..
            } if *o == origin => Some((text.clone(), *color)),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no text drawn at {origin:?}"))
}

fn fill_for(canvas: &RecordingCanvas, rect: PageRect) -> (Option<Rgba8>, Option<Rgba8>) {
    canvas
        .calls
        .iter()
        .find_map(|c| match c {
            DrawCall::FillRect {
                rect: r,
                fill,
                border,
            } if *r == rect => Some((*fill, *border)),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no fill for {rect:?}"))
}

#[test]
fn grid_start_walks_back_to_the_first_weekday() {
    let aug = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    assert_eq!(
        grid_start(aug, Weekday::Mon).unwrap(),
        NaiveDate::from_ymd_opt(2026, 7, 27).unwrap()
    );
    assert_eq!(
        grid_start(aug, Weekday::Sun).unwrap(),
        NaiveDate::from_ymd_opt(2026, 7, 26).unwrap()
    );
    let jun = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    assert_eq!(
        grid_start(jun, Weekday::Mon).unwrap(),
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    );
}

#[test]
fn the_cursor_consumes_events_in_date_order() {
    let events = vec![
        day_off(2026, 8, 10),
        day_off(2026, 8, 14),
        day_off(2026, 8, 20),
    ];
    let mut cursor = EventCursor::new(&events);
    assert!(!cursor.advance_to(NaiveDate::from_ymd_opt(2026, 8, 12).unwrap()));
    assert!(cursor.advance_to(NaiveDate::from_ymd_opt(2026, 8, 14).unwrap()));
    assert!(!cursor.advance_to(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()));
    assert!(cursor.advance_to(NaiveDate::from_ymd_opt(2026, 8, 20).unwrap()));
    assert!(!cursor.advance_to(NaiveDate::from_ymd_opt(2026, 8, 21).unwrap()));
}

#[test]
fn a_header_row_tops_six_weeks_of_cells() {
    let mut canvas = RecordingCanvas::new(400, 200);
    MonthBox.render(&mut canvas, &cfg(), slot()).unwrap();

    let texts = canvas.drawn_texts();
    assert_eq!(texts.len(), 49);
    assert_eq!(&texts[..7], ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    assert_eq!(texts[7], "27");
    assert_eq!(texts[12], "1");
    assert_eq!(texts[13], "2");
    assert_eq!(texts[48], "6");

    let sizes: Vec<u32> = canvas
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Text { px, .. } => Some(*px),
            _ => None,
        })
        .collect();
    assert!(sizes[..7].iter().all(|&px| px == 8));
    assert!(sizes[7..].iter().all(|&px| px == 10));

    let fills = canvas
        .calls
        .iter()
        .filter(|c| matches!(c, DrawCall::FillRect { .. }))
        .count();
    assert_eq!(fills, 49);
    let header_cell = PageRect {
        x0: 0,
        y0: 0,
        x1: 20,
        y1: 14,
    };
    assert_eq!(
        fill_for(&canvas, header_cell),
        (
            Some(Rgba8::opaque(0xc8, 0xc8, 0xc8)),
            Some(Rgba8::opaque(0x90, 0x90, 0x90))
        )
    );
}

#[test]
fn cell_styles_follow_today_weekends_and_events() {
    let mut canvas = RecordingCanvas::new(400, 200);
    let mut cfg = cfg();
    cfg.events = vec![day_off(2026, 8, 14)];
    MonthBox.render(&mut canvas, &cfg, slot()).unwrap();

    let today_cell = PageRect {
        x0: 20,
        y0: 94,
        x1: 40,
        y1: 114,
    };
    assert_eq!(fill_for(&canvas, today_cell), (Some(CRIMSON), None));
    assert_eq!(text_at(&canvas, (24.0, 99.0)), ("25".to_string(), Rgba8::WHITE));

    // A Sunday and a plain Tuesday share the background but not the ink.
    assert_eq!(text_at(&canvas, (127.0, 19.0)), ("2".to_string(), CRIMSON));
    assert_eq!(text_at(&canvas, (27.0, 39.0)), ("4".to_string(), Rgba8::BLACK));

    // Friday the 14th is a day off through the event list.
    assert_eq!(text_at(&canvas, (84.0, 59.0)), ("14".to_string(), CRIMSON));
}

#[test]
fn cell_borders_are_drawn_only_when_configured() {
    let mut canvas = RecordingCanvas::new(400, 200);
    let mut cfg = cfg();
    cfg.monthbox.cell_border = Some(Rgba8::BLACK);
    MonthBox.render(&mut canvas, &cfg, slot()).unwrap();

    let first_day_cell = PageRect {
        x0: 0,
        y0: 14,
        x1: 20,
        y1: 34,
    };
    let (_, border) = fill_for(&canvas, first_day_cell);
    assert_eq!(border, Some(Rgba8::BLACK));
}
