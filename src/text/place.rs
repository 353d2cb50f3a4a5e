use crate::canvas::surface::Canvas;
use crate::foundation::core::{PageRect, Rgba8};
use crate::foundation::error::PhotocalResult;
use crate::text::fit::FittedFont;

/// Placement of one axis of a text run within a box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Centered between the box edges.
    Center,
    /// Offset from the low (left or top) edge.
    Low(f64),
    /// Gap between the end of the text and the high (right or bottom) edge.
    High(f64),
}

/// Horizontal and vertical anchors for one text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// Horizontal anchor.
    pub x: Anchor,
    /// Vertical anchor.
    pub y: Anchor,
}

impl Position {
    /// Centered on both axes.
    pub const CENTER: Self = Self {
        x: Anchor::Center,
        y: Anchor::Center,
    };

    /// Position from per-axis anchors.
    pub const fn new(x: Anchor, y: Anchor) -> Self {
        Self { x, y }
    }
}

/// Resolve `pos` for a run of extent `(w, h)` inside `rect`, returning the
/// top-left drawing origin.
pub fn place(rect: PageRect, extent: (f64, f64), pos: Position) -> (f64, f64) {
    (
        place_axis(f64::from(rect.x0), f64::from(rect.x1), extent.0, pos.x),
        place_axis(f64::from(rect.y0), f64::from(rect.y1), extent.1, pos.y),
    )
}

fn place_axis(lo: f64, hi: f64, len: f64, anchor: Anchor) -> f64 {
    let span = hi - lo;
    match anchor {
        Anchor::Center => lo + (span - len) / 2.0,
        Anchor::Low(offset) => lo + offset,
        Anchor::High(gap) => lo + span - gap - len,
    }
}

/// Draw `text` anchored inside `rect`.
///
/// With `squeezed` set, the tight ink bounds are placed instead of the
/// nominal text box, and the drawing origin is shifted by the ink offset so
/// the inked pixels themselves land at the resolved spot.
pub fn draw_anchored(
    canvas: &mut dyn Canvas,
    rect: PageRect,
    text: &str,
    font: FittedFont,
    color: Rgba8,
    pos: Position,
    squeezed: bool,
) -> PhotocalResult<()> {
    if squeezed {
        let ink = canvas.measure_ink(text, font);
        let (x, y) = place(rect, (ink.w, ink.h), pos);
        canvas.draw_text((x - ink.dx, y - ink.dy), text, font, color)
    } else {
        let extent = canvas.measure_text(text, font);
        let (x, y) = place(rect, (extent.w, extent.h), pos);
        canvas.draw_text((x, y), text, font, color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/place.rs"]
mod tests;
