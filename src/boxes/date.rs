use crate::boxes::registry::BoxRenderer;
use crate::boxes::{format_date, resolve_fitted};
use crate::canvas::surface::Canvas;
use crate::config::model::ResolvedConfig;
use crate::foundation::core::PageRect;
use crate::foundation::error::PhotocalResult;
use crate::text::fit::MeasureMode;
use crate::text::place::{Anchor, Position, draw_anchored};

/// The `d` box: the weekday on top, a large day-of-month in the middle,
/// month and year at the bottom.
pub struct DateBox;

impl BoxRenderer for DateBox {
    fn render(
        &self,
        canvas: &mut dyn Canvas,
        cfg: &ResolvedConfig,
        rect: PageRect,
    ) -> PhotocalResult<()> {
        rect.validate_positive()?;
        let opts = &cfg.datebox;
        let w = f64::from(rect.width());
        // The strips split what the middle band leaves over, with a
        // two-pixel gap against the middle.
        let sz =
            ((100.0 - opts.middle_size) / 200.0 * f64::from(rect.height())).trunc() as i32 - 4;

        let top_text = format_date(cfg.date, &opts.top, cfg.locale)?;
        let middle_text = format_date(cfg.date, &opts.middle, cfg.locale)?;
        let bottom_text = format_date(cfg.date, &opts.bottom, cfg.locale)?;

        let top_band = PageRect::new(rect.x0, rect.y0, rect.x1, rect.y0 + sz);
        let bottom_band = PageRect::new(rect.x0, rect.y1 - sz, rect.x1, rect.y1);
        let middle_band = PageRect::new(rect.x0, rect.y0 + sz + 2, rect.x1, rect.y1 - sz - 2);

        // One size for both strips, so the weekday and the month line up.
        let strip_font = resolve_fitted(
            canvas,
            &opts.top_bottom_font,
            &[&top_text, &bottom_text],
            (w, f64::from(sz)),
            MeasureMode::BoundingBox,
        )?;
        let middle_font = resolve_fitted(
            canvas,
            &opts.middle_font,
            &[&middle_text],
            (
                f64::from(middle_band.width()),
                f64::from(middle_band.height()),
            ),
            MeasureMode::Ink,
        )?;

        let strip_pos = Position::new(Anchor::Center, Anchor::Low(0.0));
        draw_anchored(
            canvas, top_band, &top_text, strip_font, opts.color, strip_pos, false,
        )?;
        draw_anchored(
            canvas,
            middle_band,
            &middle_text,
            middle_font,
            opts.color,
            Position::CENTER,
            true,
        )?;
        draw_anchored(
            canvas,
            bottom_band,
            &bottom_text,
            strip_font,
            opts.color,
            strip_pos,
            false,
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/boxes/date.rs"]
mod tests;
