use crate::canvas::photo::Photo;
use crate::config::model::FontSpec;
use crate::fonts::catalog::FontHandle;
use crate::foundation::core::{InkExtent, PageRect, Rgba8, TextExtent};
use crate::foundation::error::PhotocalResult;
use crate::text::fit::FittedFont;

/// The drawing surface a page is rendered onto.
///
/// Layout and box code draw exclusively through this trait, so the same
/// logic runs against the raster backend and against the recording surface
/// the tests use. Measurement lives here too: sizes chosen by the fit
/// search must come from the surface that later draws the text.
pub trait Canvas {
    /// Current width in pixels. Swaps with the height while the canvas is
    /// rotated.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Resolve a font option to a loaded face.
    fn resolve_font(&mut self, spec: &FontSpec) -> PhotocalResult<FontHandle>;

    /// Nominal extent of `text`: widest line advance by summed line heights.
    fn measure_text(&mut self, text: &str, font: FittedFont) -> TextExtent;

    /// Tight extent of the inked pixels of `text`, with the offset from the
    /// nominal drawing origin to the first inked pixel.
    fn measure_ink(&mut self, text: &str, font: FittedFont) -> InkExtent;

    /// Fill `rect`, optionally stroking a one-pixel border inside its edges.
    fn fill_rect(
        &mut self,
        rect: PageRect,
        fill: Option<Rgba8>,
        border: Option<Rgba8>,
    ) -> PhotocalResult<()>;

    /// Draw `text` with its nominal top-left corner at `origin`.
    fn draw_text(
        &mut self,
        origin: (f64, f64),
        text: &str,
        font: FittedFont,
        color: Rgba8,
    ) -> PhotocalResult<()>;

    /// Composite `photo` with its top-left corner at `origin`.
    fn paste_photo(&mut self, photo: &Photo, origin: (i32, i32)) -> PhotocalResult<()>;

    /// Rotate the whole surface a quarter turn clockwise, swapping its
    /// dimensions.
    fn rotate_cw(&mut self) -> PhotocalResult<()>;

    /// Rotate the whole surface a quarter turn counter-clockwise.
    fn rotate_ccw(&mut self) -> PhotocalResult<()>;
}
