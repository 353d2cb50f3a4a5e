use crate::canvas::surface::Canvas;
use crate::fonts::catalog::FontHandle;

/// A face resolved to a concrete pixel size, ready to measure or draw with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FittedFont {
    /// Face to draw with.
    pub handle: FontHandle,
    /// Size in pixels.
    pub px: u32,
}

/// Which extent [`fit`] holds against the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    /// Nominal line box: widest advance by summed line heights.
    BoundingBox,
    /// Tight bounds of the inked pixels.
    Ink,
}

/// Largest pixel size at which every string in `texts` fits inside `bounds`,
/// searched over `1..=2*height`.
///
/// The search never fails: when nothing fits the size degrades to 1, and an
/// empty `texts` slice yields the search ceiling unconstrained.
pub fn fit(
    canvas: &mut dyn Canvas,
    handle: FontHandle,
    texts: &[&str],
    bounds: (f64, f64),
    mode: MeasureMode,
) -> FittedFont {
    let ceiling = ((bounds.1 * 2.0) as u32).max(1);
    if texts.is_empty() {
        return FittedFont {
            handle,
            px: ceiling,
        };
    }

    let mut lo = 1u32;
    let mut hi = ceiling;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if all_fit(canvas, texts, FittedFont { handle, px: mid }, bounds, mode) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    FittedFont { handle, px: lo }
}

fn all_fit(
    canvas: &mut dyn Canvas,
    texts: &[&str],
    font: FittedFont,
    bounds: (f64, f64),
    mode: MeasureMode,
) -> bool {
    texts.iter().all(|text| {
        let (w, h) = match mode {
            MeasureMode::BoundingBox => {
                let e = canvas.measure_text(text, font);
                (e.w, e.h)
            }
            MeasureMode::Ink => {
                let e = canvas.measure_ink(text, font);
                (e.w, e.h)
            }
        };
        w <= bounds.0 && h <= bounds.1
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
