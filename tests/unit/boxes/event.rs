use super::*;

use chrono::NaiveDate;

use crate::canvas::testing::{DrawCall, RecordingCanvas};
use crate::config::model::PageSettings;
use crate::events::model::{Event, EventKinds};
use crate::foundation::core::Orientation;

fn generic(y: i32, m: u32, d: u32, text: &str) -> Event {
    Event {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        kinds: EventKinds {
            generic: true,
            ..EventKinds::default()
        },
        text: text.to_string(),
    }
}

fn cfg() -> ResolvedConfig {
    let mut cfg = PageSettings::default()
        .resolve(
            Orientation::Landscape,
            vec![
                generic(2026, 8, 24, "Yesterday"),
                generic(2026, 8, 25, "Dentist"),
                generic(2026, 8, 30, "Trip"),
                generic(2026, 9, 8, "Deadline"),
                generic(2026, 9, 9, "Too late"),
            ],
        )
        .unwrap();
    cfg.date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    cfg
}

fn slot() -> PageRect {
    PageRect {
        x0: 0,
        y0: 0,
        x1: 200,
        y1: 100,
    }
}

#[test]
fn a_title_band_heads_the_upcoming_events() {
    let mut canvas = RecordingCanvas::new(400, 200);
    EventBox.render(&mut canvas, &cfg(), slot()).unwrap();

    assert_eq!(
        canvas.drawn_texts(),
        ["Tuesday:", "25 Aug: Dentist", "30 Aug: Trip", "8 Sep: Deadline"]
    );
    let origins: Vec<_> = canvas
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Text { origin, px, .. } => Some((*origin, *px)),
            _ => None,
        })
        .collect();
    assert_eq!(
        origins,
        [
            ((0.0, 0.0), 10),
            ((0.0, 10.0), 10),
            ((0.0, 20.0), 10),
            ((0.0, 30.0), 10),
        ]
    );
}

#[test]
fn the_line_list_truncates_when_the_box_fills_up() {
    let mut canvas = RecordingCanvas::new(400, 200);
    let mut cfg = cfg();
    cfg.eventbox.title_size = 40.0;
    let short = PageRect {
        x0: 0,
        y0: 0,
        x1: 200,
        y1: 25,
    };
    EventBox.render(&mut canvas, &cfg, short).unwrap();
    assert_eq!(
        canvas.drawn_texts(),
        ["Tuesday:", "25 Aug: Dentist", "30 Aug: Trip"]
    );
}

#[test]
fn no_upcoming_events_leaves_just_the_title() {
    let mut canvas = RecordingCanvas::new(400, 200);
    let mut cfg = cfg();
    cfg.events.clear();
    EventBox.render(&mut canvas, &cfg, slot()).unwrap();
    assert_eq!(canvas.drawn_texts(), ["Tuesday:"]);
}

#[test]
fn a_box_too_small_for_a_line_is_an_error() {
    let mut canvas = RecordingCanvas::new(400, 200);
    let tiny = PageRect {
        x0: 0,
        y0: 0,
        x1: 200,
        y1: 5,
    };
    let err = EventBox.render(&mut canvas, &cfg(), tiny).unwrap_err();
    assert!(err.to_string().contains("too small"));
}
