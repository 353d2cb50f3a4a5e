use chrono::Days;

use crate::boxes::registry::BoxRenderer;
use crate::boxes::{format_date, resolve_fitted};
use crate::canvas::surface::Canvas;
use crate::config::model::ResolvedConfig;
use crate::foundation::core::PageRect;
use crate::foundation::error::{PhotocalError, PhotocalResult};
use crate::text::fit::MeasureMode;
use crate::text::place::{Anchor, Position, draw_anchored};

/// The `e` box: a title band followed by one line per upcoming event,
/// truncated silently once the box is full.
pub struct EventBox;

impl BoxRenderer for EventBox {
    fn render(
        &self,
        canvas: &mut dyn Canvas,
        cfg: &ResolvedConfig,
        rect: PageRect,
    ) -> PhotocalResult<()> {
        rect.validate_positive()?;
        let opts = &cfg.eventbox;
        let sz = (opts.title_size / 100.0 * f64::from(rect.height())).trunc() as i32;
        if sz < 1 {
            return Err(PhotocalError::invalid_rect(format!(
                "event box {rect:?} is too small for a {}% line height",
                opts.title_size
            )));
        }
        let max_lines = (rect.height() / sz) as usize;

        let until = cfg
            .date
            .checked_add_days(Days::new(u64::from(opts.range_days)))
            .ok_or_else(|| PhotocalError::config("event range exceeds the supported dates"))?;
        let mut lines = Vec::new();
        for event in &cfg.events {
            if lines.len() == max_lines {
                break;
            }
            if !event.between(cfg.date, until) {
                continue;
            }
            let day = format_date(event.date, "%e %b", cfg.locale)?;
            lines.push(format!("{}: {}", day.trim(), event.text));
        }

        let w = f64::from(rect.width());
        let left = Position::new(Anchor::Low(0.0), Anchor::Center);

        let title = format_date(cfg.date, &opts.title, cfg.locale)?;
        let title_font = resolve_fitted(
            canvas,
            &opts.title_font,
            &[&title],
            (w, f64::from(sz)),
            MeasureMode::BoundingBox,
        )?;
        let title_band = PageRect::new(rect.x0, rect.y0, rect.x1, rect.y0 + sz);
        draw_anchored(canvas, title_band, &title, title_font, opts.color, left, false)?;

        if lines.is_empty() {
            return Ok(());
        }
        // One size across all lines, so the list reads as a column.
        let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let line_font = resolve_fitted(
            canvas,
            &opts.line_font,
            &line_refs,
            (w, f64::from(sz)),
            MeasureMode::BoundingBox,
        )?;
        for (i, line) in lines.iter().enumerate() {
            let i = i as i32;
            let band = PageRect::new(
                rect.x0,
                rect.y0 + sz * (i + 1),
                rect.x1,
                rect.y0 + sz * (i + 2),
            );
            draw_anchored(canvas, band, line, line_font, opts.color, left, false)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/boxes/event.rs"]
mod tests;
