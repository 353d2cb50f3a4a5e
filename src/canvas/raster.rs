use std::path::Path;
use std::sync::Arc;

use crate::canvas::photo::Photo;
use crate::canvas::surface::Canvas;
use crate::config::model::FontSpec;
use crate::fonts::catalog::{FontCatalog, FontHandle};
use crate::foundation::core::{InkExtent, PageRect, Rgba8, TextExtent};
use crate::foundation::error::{PhotocalError, PhotocalResult};
use crate::render::pipeline::RenderedPage;
use crate::text::engine::{TextBrush, TextEngine};
use crate::text::fit::FittedFont;

/// Padding around the scratch surface ink measurement renders into. Glyphs
/// can ink outside their nominal box, through bearings and overshoot.
const INK_PAD: u16 = 8;

/// CPU raster canvas: a premultiplied RGBA page built up pass by pass.
///
/// Every drawing call renders into a transparent scratch surface first and
/// is then composited over the page, so one call never disturbs pixels it
/// does not cover.
pub struct RasterCanvas {
    page: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
    engine: TextEngine,
    catalog: FontCatalog,
}

impl std::fmt::Debug for RasterCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterCanvas")
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

impl RasterCanvas {
    /// A transparent canvas of the given size. Both dimensions must be in
    /// `1..=65535`.
    pub fn new(width: u32, height: u32) -> PhotocalResult<Self> {
        let limit = u32::from(u16::MAX);
        if width == 0 || height == 0 || width > limit || height > limit {
            return Err(PhotocalError::canvas(format!(
                "page size {width}x{height} is outside 1..={limit}"
            )));
        }
        Ok(Self {
            page: vello_cpu::Pixmap::new(width as u16, height as u16),
            ctx: None,
            engine: TextEngine::new(),
            catalog: FontCatalog::new(),
        })
    }

    /// Load every font file in `dir`, returning the number of faces loaded.
    pub fn load_fonts_dir(&mut self, dir: &Path) -> PhotocalResult<usize> {
        self.catalog.load_dir(&mut self.engine, dir)
    }

    /// Load a single font file.
    pub fn load_font_file(&mut self, path: &Path) -> PhotocalResult<()> {
        self.catalog.load_file(&mut self.engine, path)
    }

    /// The loaded faces.
    pub fn fonts(&self) -> &FontCatalog {
        &self.catalog
    }

    /// Unpremultiply the page into straight RGBA output pixels.
    pub fn into_page(self) -> RenderedPage {
        let width = u32::from(self.page.width());
        let height = u32::from(self.page.height());
        let src = self.page.data_as_u8_slice();
        let mut rgba = Vec::with_capacity(src.len());
        for chunk in src.chunks_exact(4) {
            let a = chunk[3];
            if a == 0 {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                let un = |c: u8| {
                    (((u32::from(c) * 255) + u32::from(a) / 2) / u32::from(a)).min(255) as u8
                };
                rgba.extend_from_slice(&[un(chunk[0]), un(chunk[1]), un(chunk[2]), a]);
            }
        }
        RenderedPage {
            width,
            height,
            rgba,
        }
    }

    fn composite_pass(
        &mut self,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> PhotocalResult<()>,
    ) -> PhotocalResult<()> {
        let width = self.page.width();
        let height = self.page.height();
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        f(self, &mut ctx)?;
        ctx.flush();

        let mut pass = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pass);
        premul_over_in_place(self.page.data_as_u8_slice_mut(), pass.data_as_u8_slice())?;
        self.ctx = Some(ctx);
        Ok(())
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        u32::from(self.page.width())
    }

    fn height(&self) -> u32 {
        u32::from(self.page.height())
    }

    fn resolve_font(&mut self, spec: &FontSpec) -> PhotocalResult<FontHandle> {
        self.catalog.resolve(&spec.family).ok_or_else(|| {
            PhotocalError::font(format!(
                "font '{}' not found ({} faces loaded)",
                spec.family,
                self.catalog.len()
            ))
        })
    }

    fn measure_text(&mut self, text: &str, font: FittedFont) -> TextExtent {
        let family = self.catalog.family(font.handle);
        self.engine.measure(text, family, font.px as f32)
    }

    fn measure_ink(&mut self, text: &str, font: FittedFont) -> InkExtent {
        let family = self.catalog.family(font.handle).to_string();
        let extent = self.engine.measure(text, &family, font.px as f32);
        let pad = u32::from(INK_PAD);
        let sw = (extent.w.ceil() as u32 + 2 * pad).min(u32::from(u16::MAX)) as u16;
        let sh = (extent.h.ceil() as u32 + 2 * pad).min(u32::from(u16::MAX)) as u16;

        let layout = self.engine.layout(
            text,
            &family,
            font.px as f32,
            TextBrush {
                r: 255,
                g: 255,
                b: 255,
                a: 255,
            },
        );
        let mut ctx = vello_cpu::RenderContext::new(sw, sh);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(pad),
            f64::from(pad),
        )));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        let data = self.catalog.data(font.handle);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();
        let mut scratch = vello_cpu::Pixmap::new(sw, sh);
        ctx.render_to_pixmap(&mut scratch);

        let px = scratch.data_as_u8_slice();
        let row = usize::from(sw);
        let mut min_x = 0usize;
        let mut min_y = 0usize;
        let mut max_x = 0usize;
        let mut max_y = 0usize;
        let mut inked = false;
        for (i, chunk) in px.chunks_exact(4).enumerate() {
            if chunk[3] == 0 {
                continue;
            }
            let (x, y) = (i % row, i / row);
            if inked {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                max_y = y;
            } else {
                (min_x, max_x, min_y, max_y) = (x, x, y, y);
                inked = true;
            }
        }
        if !inked {
            return InkExtent {
                w: 0.0,
                h: 0.0,
                dx: 0.0,
                dy: 0.0,
            };
        }
        InkExtent {
            w: (max_x - min_x + 1) as f64,
            h: (max_y - min_y + 1) as f64,
            dx: min_x as f64 - f64::from(pad),
            dy: min_y as f64 - f64::from(pad),
        }
    }

    fn fill_rect(
        &mut self,
        rect: PageRect,
        fill: Option<Rgba8>,
        border: Option<Rgba8>,
    ) -> PhotocalResult<()> {
        if fill.is_none() && border.is_none() {
            return Ok(());
        }
        rect.validate()?;
        let (x0, y0) = (f64::from(rect.x0), f64::from(rect.y0));
        let (x1, y1) = (f64::from(rect.x1), f64::from(rect.y1));
        self.composite_pass(|_, ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            if let Some(c) = fill {
                ctx.set_paint(paint_color(c));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(x0, y0, x1, y1));
            }
            if let Some(c) = border {
                ctx.set_paint(paint_color(c));
                for edge in [
                    vello_cpu::kurbo::Rect::new(x0, y0, x1, y0 + 1.0),
                    vello_cpu::kurbo::Rect::new(x0, y1 - 1.0, x1, y1),
                    vello_cpu::kurbo::Rect::new(x0, y0, x0 + 1.0, y1),
                    vello_cpu::kurbo::Rect::new(x1 - 1.0, y0, x1, y1),
                ] {
                    ctx.fill_rect(&edge);
                }
            }
            Ok(())
        })
    }

    fn draw_text(
        &mut self,
        origin: (f64, f64),
        text: &str,
        font: FittedFont,
        color: Rgba8,
    ) -> PhotocalResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let family = self.catalog.family(font.handle).to_string();
        let layout = self
            .engine
            .layout(text, &family, font.px as f32, TextBrush::from(color));
        self.composite_pass(|canvas, ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.0, origin.1)));
            let data = canvas.catalog.data(font.handle);
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));
                    let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(data)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
            Ok(())
        })
    }

    fn paste_photo(&mut self, photo: &Photo, origin: (i32, i32)) -> PhotocalResult<()> {
        let (w, h) = (photo.width(), photo.height());
        if w == 0 || h == 0 {
            return Ok(());
        }
        if w > u32::from(u16::MAX) || h > u32::from(u16::MAX) {
            return Err(PhotocalError::canvas(format!(
                "photo {w}x{h} exceeds the raster surface limit"
            )));
        }
        let mut pixels = Vec::with_capacity(w as usize * h as usize);
        for chunk in photo.image().as_raw().chunks_exact(4) {
            let a = u16::from(chunk[3]);
            pixels.push(vello_cpu::peniko::color::PremulRgba8 {
                r: mul_div255_u8(u16::from(chunk[0]), a),
                g: mul_div255_u8(u16::from(chunk[1]), a),
                b: mul_div255_u8(u16::from(chunk[2]), a),
                a: chunk[3],
            });
        }
        let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w as u16, h as u16, true);
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.composite_pass(|_, ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                f64::from(origin.0),
                f64::from(origin.1),
            )));
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));
            Ok(())
        })
    }

    fn rotate_cw(&mut self) -> PhotocalResult<()> {
        let w = usize::from(self.page.width());
        let h = usize::from(self.page.height());
        let src = self.page.data_as_u8_slice();
        let mut pixels = Vec::with_capacity(w * h);
        for dy in 0..w {
            for dx in 0..h {
                let s = ((h - 1 - dx) * w + dy) * 4;
                pixels.push(vello_cpu::peniko::color::PremulRgba8 {
                    r: src[s],
                    g: src[s + 1],
                    b: src[s + 2],
                    a: src[s + 3],
                });
            }
        }
        self.page = vello_cpu::Pixmap::from_parts_with_opacity(pixels, h as u16, w as u16, true);
        Ok(())
    }

    fn rotate_ccw(&mut self) -> PhotocalResult<()> {
        let w = usize::from(self.page.width());
        let h = usize::from(self.page.height());
        let src = self.page.data_as_u8_slice();
        let mut pixels = Vec::with_capacity(w * h);
        for dy in 0..w {
            for dx in 0..h {
                let s = (dx * w + (w - 1 - dy)) * 4;
                pixels.push(vello_cpu::peniko::color::PremulRgba8 {
                    r: src[s],
                    g: src[s + 1],
                    b: src[s + 2],
                    a: src[s + 3],
                });
            }
        }
        self.page = vello_cpu::Pixmap::from_parts_with_opacity(pixels, h as u16, w as u16, true);
        Ok(())
    }
}

fn paint_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> PhotocalResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PhotocalError::canvas(
            "compositing expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = s[3];
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - u16::from(sa);
        d[3] = add_sat_u8(sa, mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            d[c] = add_sat_u8(s[c], mul_div255_u8(u16::from(d[c]), inv));
        }
    }
    Ok(())
}

fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/raster.rs"]
mod tests;
