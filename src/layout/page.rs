use tracing::debug;

use crate::canvas::photo::Photo;
use crate::canvas::surface::Canvas;
use crate::config::model::ResolvedConfig;
use crate::foundation::core::PageRect;
use crate::foundation::error::{PhotocalError, PhotocalResult};
use crate::text::fit::FittedFont;
use crate::text::place::{Anchor, Position, draw_anchored};

/// Where the photo pass left its marks on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoLayout {
    /// Band covered by the photo.
    pub photo: PageRect,
    /// Caption strip, when a caption was drawn.
    pub caption: Option<PageRect>,
    /// Area left over for the calendar boxes.
    pub content: PageRect,
}

/// Paste the photo band (and caption, when configured) and return the
/// remaining content area.
///
/// A portrait photo is laid out by rotating photo and canvas together a
/// quarter turn, running the landscape path, and rotating back; the
/// returned rectangles are mapped back into the upright frame.
pub fn place_photo(
    canvas: &mut dyn Canvas,
    cfg: &ResolvedConfig,
    photo: &Photo,
) -> PhotocalResult<PhotoLayout> {
    place_oriented(canvas, cfg, photo, cfg.format.photo_top)
}

fn place_oriented(
    canvas: &mut dyn Canvas,
    cfg: &ResolvedConfig,
    photo: &Photo,
    photo_top: bool,
) -> PhotocalResult<PhotoLayout> {
    if photo.orientation().is_landscape() {
        return place_landscape(canvas, cfg, photo, photo_top);
    }
    debug!("portrait photo, rotating the layout");
    if photo_top {
        let upright = photo.rotated_cw();
        canvas.rotate_cw()?;
        let rotated_w = canvas.width() as i32;
        let laid = place_oriented(canvas, cfg, &upright, photo_top)?;
        canvas.rotate_ccw()?;
        Ok(PhotoLayout {
            photo: laid.photo.rotated_ccw(rotated_w),
            caption: laid.caption.map(|c| c.rotated_ccw(rotated_w)),
            content: laid.content.rotated_ccw(rotated_w),
        })
    } else {
        // Bottom placement rotates the other way and lays out as a top
        // band, so the photo ends up against the bottom edge when the
        // canvas comes back upright.
        let upright = photo.rotated_ccw();
        canvas.rotate_ccw()?;
        let rotated_h = canvas.height() as i32;
        let laid = place_oriented(canvas, cfg, &upright, true)?;
        canvas.rotate_cw()?;
        Ok(PhotoLayout {
            photo: laid.photo.rotated_cw(rotated_h),
            caption: laid.caption.map(|c| c.rotated_cw(rotated_h)),
            content: laid.content.rotated_cw(rotated_h),
        })
    }
}

fn place_landscape(
    canvas: &mut dyn Canvas,
    cfg: &ResolvedConfig,
    photo: &Photo,
    photo_top: bool,
) -> PhotocalResult<PhotoLayout> {
    let w = canvas.width() as i32;
    let page_h = canvas.height() as i32;
    let band_h = (f64::from(w) / cfg.ratio).trunc() as i32;
    if band_h < 1 || band_h >= page_h {
        return Err(PhotocalError::invalid_rect(format!(
            "photo band height {band_h} does not fit a {w}x{page_h} page (ratio {})",
            cfg.ratio
        )));
    }

    let photo_rect = if photo_top {
        PageRect::new(0, 0, w, band_h)
    } else {
        PageRect::new(0, page_h - band_h, w, page_h)
    };
    let cropped = photo.cropped_to((w as u32, band_h as u32), false);
    canvas.paste_photo(&cropped, (photo_rect.x0, photo_rect.y0))?;

    let outer = cfg.margin_outer;
    let inner = cfg.margin_inner;
    let caption = match cfg.caption.as_deref() {
        Some(text) if !text.is_empty() => {
            let th = cfg
                .caption_font
                .size
                .map(|s| i32::try_from(s).unwrap_or(i32::MAX))
                .unwrap_or(inner as i32);
            let strip = if photo_top {
                PageRect::from_f64(
                    outer,
                    f64::from(band_h),
                    f64::from(w) - outer,
                    f64::from(band_h) + f64::from(th),
                )
            } else {
                let y = page_h - band_h;
                PageRect::from_f64(
                    outer,
                    f64::from(y) - f64::from(th),
                    f64::from(w) - outer,
                    f64::from(y),
                )
            };
            let handle = canvas.resolve_font(&cfg.caption_font)?;
            let font = FittedFont {
                handle,
                px: (th.saturating_mul(2) / 3).max(1) as u32,
            };
            draw_anchored(
                canvas,
                strip,
                text,
                font,
                cfg.caption_color,
                Position::new(Anchor::High(1.0), Anchor::Center),
                false,
            )?;
            Some(strip)
        }
        _ => None,
    };

    // Content clears the band by the inner margin or by the caption strip,
    // whichever is taller.
    let sep = f64::from(caption.map_or(0, PageRect::height)).max(inner);
    let content = if photo_top {
        PageRect::from_f64(
            outer,
            f64::from(band_h) + sep,
            f64::from(w) - outer,
            f64::from(page_h) - outer,
        )
    } else {
        PageRect::from_f64(
            outer,
            outer,
            f64::from(w) - outer,
            f64::from(page_h - band_h) - sep,
        )
    };
    content.validate_positive()?;
    debug!("photo band {photo_rect:?}, content {content:?}");

    Ok(PhotoLayout {
        photo: photo_rect,
        caption,
        content,
    })
}

/// Split `content` into one slot per format letter, separated by the inner
/// margin. Slots run left to right when the content area is wider than
/// tall, top to bottom otherwise.
pub fn partition(
    content: PageRect,
    kinds: &[char],
    margin_inner: f64,
) -> PhotocalResult<Vec<(char, PageRect)>> {
    content.validate()?;
    if kinds.is_empty() {
        return Err(PhotocalError::EmptyFormat);
    }
    let count = kinds.len() as f64;
    let (w, h) = content.size();
    let horizontal = w > h;
    let span = if horizontal { w } else { h };
    let step = (span - margin_inner * (count - 1.0)) / count;

    let mut out = Vec::with_capacity(kinds.len());
    for (i, &kind) in kinds.iter().enumerate() {
        let lo = (step + margin_inner) * i as f64;
        let rect = if horizontal {
            PageRect::from_f64(
                f64::from(content.x0) + lo,
                f64::from(content.y0),
                f64::from(content.x0) + lo + step,
                f64::from(content.y1),
            )
        } else {
            PageRect::from_f64(
                f64::from(content.x0),
                f64::from(content.y0) + lo,
                f64::from(content.x1),
                f64::from(content.y0) + lo + step,
            )
        };
        rect.validate_positive()?;
        out.push((kind, rect));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/page.rs"]
mod tests;
