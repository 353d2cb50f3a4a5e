use serde::Serialize;

use crate::boxes::registry::BoxRegistry;
use crate::canvas::photo::Photo;
use crate::canvas::surface::Canvas;
use crate::config::model::ResolvedConfig;
use crate::foundation::core::PageRect;
use crate::foundation::error::PhotocalResult;
use crate::layout::page::{partition, place_photo};

/// One format letter with the slot it renders into.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BoxSlot {
    /// Format letter.
    pub kind: char,
    /// Slot on the page.
    pub rect: PageRect,
}

/// Geometry of a finished page, as reported by `--dump-layout`.
#[derive(Clone, Debug, Serialize)]
pub struct LayoutPlan {
    /// Whole page.
    pub page: PageRect,
    /// Band covered by the photo.
    pub photo: PageRect,
    /// Caption strip, when a caption was drawn.
    pub caption: Option<PageRect>,
    /// Area handed to the box partition.
    pub content: PageRect,
    /// Rendered boxes in format order.
    pub boxes: Vec<BoxSlot>,
}

/// Finished page pixels.
pub struct RenderedPage {
    /// Page width in pixels.
    pub width: u32,
    /// Page height in pixels.
    pub height: u32,
    /// Row-major RGBA8 with straight alpha.
    pub rgba: Vec<u8>,
}

/// Render one calendar page onto `canvas` and report its geometry.
///
/// The format letters are resolved up front, so an unknown letter aborts
/// before anything is drawn.
#[tracing::instrument(skip(canvas, cfg, registry, photo))]
pub fn render_page(
    canvas: &mut dyn Canvas,
    cfg: &ResolvedConfig,
    registry: &BoxRegistry,
    photo: &Photo,
) -> PhotocalResult<LayoutPlan> {
    for &kind in &cfg.format.boxes {
        registry.resolve(kind)?;
    }

    let page = PageRect::new(0, 0, canvas.width() as i32, canvas.height() as i32);
    canvas.fill_rect(page, Some(cfg.bgcolor), None)?;

    let laid = place_photo(canvas, cfg, photo)?;
    let slots = partition(laid.content, &cfg.format.boxes, cfg.margin_inner)?;

    let mut boxes = Vec::with_capacity(slots.len());
    for (kind, rect) in slots {
        registry.resolve(kind)?.render(canvas, cfg, rect)?;
        boxes.push(BoxSlot { kind, rect });
    }
    Ok(LayoutPlan {
        page,
        photo: laid.photo,
        caption: laid.caption,
        content: laid.content,
        boxes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
