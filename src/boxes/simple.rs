use crate::boxes::registry::BoxRenderer;
use crate::boxes::{format_date, resolve_fitted};
use crate::canvas::surface::Canvas;
use crate::config::model::{ResolvedConfig, SimpleBoxOptions};
use crate::foundation::core::PageRect;
use crate::foundation::error::PhotocalResult;
use crate::text::fit::{FittedFont, MeasureMode};
use crate::text::place::{Anchor, Position, draw_anchored};

/// The `s` box: a large centered figure with smaller flanking texts on
/// whichever axis keeps more room once the figure is measured.
pub struct SimpleBox;

impl BoxRenderer for SimpleBox {
    fn render(
        &self,
        canvas: &mut dyn Canvas,
        cfg: &ResolvedConfig,
        rect: PageRect,
    ) -> PhotocalResult<()> {
        rect.validate_positive()?;
        let opts = &cfg.simplebox;
        let inner = rect.inset(4, 4);

        let middle_text = format_date(cfg.date, &opts.middle, cfg.locale)?;
        let left_text = format_date(cfg.date, &opts.left, cfg.locale)?;
        let right_text = format_date(cfg.date, &opts.right, cfg.locale)?;

        let middle_font = resolve_fitted(
            canvas,
            &opts.font,
            &[&middle_text],
            inner.size(),
            MeasureMode::Ink,
        )?;
        draw_anchored(
            canvas,
            inner,
            &middle_text,
            middle_font,
            opts.color,
            Position::CENTER,
            true,
        )?;

        let ink = canvas.measure_ink(&middle_text, middle_font);
        let (inner_w, inner_h) = inner.size();
        let side_w = ((inner_w - ink.w) / 2.0).floor();
        let side_h = ((inner_h - ink.h) / 2.0).floor();
        if side_w.max(side_h) < 1.0 {
            return Ok(());
        }

        if side_w >= side_h {
            let bounds = (side_w, inner_h);
            let font = flank_font(canvas, opts, &[&left_text, &right_text], bounds, middle_font)?;
            let sw = side_w as i32;
            let left = PageRect::new(inner.x0, inner.y0, inner.x0 + sw, inner.y1);
            let right = PageRect::new(inner.x1 - sw, inner.y0, inner.x1, inner.y1);
            let at_left = Position::new(Anchor::Low(0.0), Anchor::Center);
            let at_right = Position::new(Anchor::High(0.0), Anchor::Center);
            draw_anchored(canvas, left, &left_text, font, opts.color, at_left, false)?;
            draw_anchored(canvas, right, &right_text, font, opts.color, at_right, false)?;
        } else {
            let bounds = (inner_w, side_h);
            let font = flank_font(canvas, opts, &[&left_text, &right_text], bounds, middle_font)?;
            let sh = side_h as i32;
            let top = PageRect::new(inner.x0, inner.y0, inner.x1, inner.y0 + sh);
            let bottom = PageRect::new(inner.x0, inner.y1 - sh, inner.x1, inner.y1);
            draw_anchored(canvas, top, &left_text, font, opts.color, Position::CENTER, false)?;
            draw_anchored(canvas, bottom, &right_text, font, opts.color, Position::CENTER, false)?;
        }
        Ok(())
    }
}

/// Flanking text never outgrows half the middle figure.
fn flank_font(
    canvas: &mut dyn Canvas,
    opts: &SimpleBoxOptions,
    texts: &[&str],
    bounds: (f64, f64),
    middle: FittedFont,
) -> PhotocalResult<FittedFont> {
    let fitted = resolve_fitted(canvas, &opts.font, texts, bounds, MeasureMode::BoundingBox)?;
    let cap = (middle.px / 2).max(1);
    Ok(FittedFont {
        handle: fitted.handle,
        px: fitted.px.min(cap),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/boxes/simple.rs"]
mod tests;
