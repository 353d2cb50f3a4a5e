use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::boxes::registry::BoxRenderer;
use crate::boxes::{format_date, resolve_fitted};
use crate::canvas::surface::Canvas;
use crate::config::model::ResolvedConfig;
use crate::events::model::Event;
use crate::foundation::core::PageRect;
use crate::foundation::error::{PhotocalError, PhotocalResult};
use crate::text::fit::MeasureMode;
use crate::text::place::{Position, draw_anchored};

/// The `m` box: a weekday header row over a six-week grid of day cells,
/// with cell styles keyed to the page date and the event list.
pub struct MonthBox;

impl BoxRenderer for MonthBox {
    fn render(
        &self,
        canvas: &mut dyn Canvas,
        cfg: &ResolvedConfig,
        rect: PageRect,
    ) -> PhotocalResult<()> {
        rect.validate_positive()?;
        let opts = &cfg.monthbox;
        let w0 = rect.width() / 7;
        // Always six week rows; the header row takes the remainder.
        let h0 = (f64::from(rect.height()) / 6.7).floor() as i32;
        let header_h = rect.height() - 6 * h0;

        let start = grid_start(cfg.date, opts.first_day)?;
        let mut header = Vec::with_capacity(7);
        for col in 0..7u64 {
            let day = start
                .checked_add_days(Days::new(col))
                .ok_or_else(|| PhotocalError::config("calendar grid exceeds the date range"))?;
            header.push(format_date(day, "%a", cfg.locale)?);
        }
        let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();
        let header_font = resolve_fitted(
            canvas,
            &opts.font,
            &header_refs,
            (f64::from(w0) - 4.0, f64::from(header_h) - 4.0),
            MeasureMode::BoundingBox,
        )?;
        let day_font = resolve_fitted(
            canvas,
            &opts.font,
            &["88"],
            (f64::from(w0) - 8.0, f64::from(h0) - 8.0),
            MeasureMode::BoundingBox,
        )?;

        for (col, text) in header.iter().enumerate() {
            let col = col as i32;
            let cell = PageRect::new(
                rect.x0 + w0 * col,
                rect.y0,
                rect.x0 + w0 * (col + 1),
                rect.y0 + header_h,
            );
            canvas.fill_rect(cell, Some(opts.title.bg), Some(opts.title_border))?;
            draw_anchored(
                canvas,
                cell,
                text,
                header_font,
                opts.title.color,
                Position::CENTER,
                false,
            )?;
        }

        let mut cursor = EventCursor::new(&cfg.events);
        for row in 0..6i32 {
            let cell_y0 = rect.y0 + header_h + h0 * row;
            for col in 0..7i32 {
                let day = start
                    .checked_add_days(Days::new((row * 7 + col) as u64))
                    .ok_or_else(|| PhotocalError::config("calendar grid exceeds the date range"))?;
                let day_off = cursor.advance_to(day);
                let style = if day.month() != cfg.date.month() {
                    &opts.othermonth
                } else if day == cfg.date {
                    &opts.today
                } else if day_off || opts.dayoff_weekdays.contains(&day.weekday()) {
                    &opts.dayoff
                } else {
                    &opts.workday
                };
                let cell = PageRect::new(
                    rect.x0 + w0 * col,
                    cell_y0,
                    rect.x0 + w0 * (col + 1),
                    cell_y0 + h0,
                );
                canvas.fill_rect(cell, Some(style.bg), opts.cell_border)?;
                draw_anchored(
                    canvas,
                    cell,
                    &day.day().to_string(),
                    day_font,
                    style.color,
                    Position::CENTER,
                    false,
                )?;
            }
        }
        Ok(())
    }
}

/// First cell of the grid: the first of the month walked back to the
/// configured first weekday.
fn grid_start(date: NaiveDate, first_day: Weekday) -> PhotocalResult<NaiveDate> {
    let mut day = date
        .with_day(1)
        .ok_or_else(|| PhotocalError::config("cannot derive the first day of the month"))?;
    while day.weekday() != first_day {
        day = day.pred_opt().ok_or_else(|| {
            PhotocalError::config("calendar grid starts before the supported date range")
        })?;
    }
    Ok(day)
}

/// Walks a date-sorted event list in step with the grid days.
pub(crate) struct EventCursor<'a> {
    events: &'a [Event],
    next: usize,
}

impl<'a> EventCursor<'a> {
    pub(crate) fn new(events: &'a [Event]) -> Self {
        Self { events, next: 0 }
    }

    /// Consumes every event dated `day` or earlier and reports whether an
    /// entry on `day` itself marks it as a day off.
    pub(crate) fn advance_to(&mut self, day: NaiveDate) -> bool {
        let mut day_off = false;
        while let Some(event) = self.events.get(self.next) {
            if event.date > day {
                break;
            }
            if event.date == day && event.marks_day_off() {
                day_off = true;
            }
            self.next += 1;
        }
        day_off
    }
}

#[cfg(test)]
#[path = "../../tests/unit/boxes/month.rs"]
mod tests;
