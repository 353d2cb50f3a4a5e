use crate::foundation::core::{Rgba8, TextExtent};
use crate::foundation::error::{PhotocalError, PhotocalResult};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrush {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Stateful helper for shaping text with Parley.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Construct an engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register raw font bytes with the shaper, returning the primary
    /// family name the bytes declare.
    pub fn register(&mut self, font_bytes: &[u8]) -> PhotocalResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| PhotocalError::font("no font families registered from font bytes"))?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PhotocalError::font("registered font family has no name"))?
            .to_string();
        Ok(name)
    }

    /// Shape and lay out `text` in `family` at `size_px`, unwrapped.
    pub fn layout(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
        brush: TextBrush,
    ) -> parley::Layout<TextBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Nominal extent of `text`: widest line advance by summed line heights,
    /// each at least one pixel.
    pub fn measure(&mut self, text: &str, family: &str, size_px: f32) -> TextExtent {
        let layout = self.layout(text, family, size_px, TextBrush::default());
        let mut w = 0.0f32;
        let mut h = 0.0f32;
        for line in layout.lines() {
            let m = line.metrics();
            w = w.max(m.advance);
            h += m.ascent + m.descent + m.leading;
        }
        TextExtent {
            w: f64::from(w.max(1.0)),
            h: f64::from(h.max(1.0)),
        }
    }
}
