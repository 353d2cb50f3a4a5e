//! The calendar boxes drawn into the content slots, and the registry that
//! maps format letters to them.

pub mod date;
pub mod event;
pub mod month;
pub mod registry;
pub mod simple;

use chrono::NaiveDate;

use crate::canvas::surface::Canvas;
use crate::config::model::FontSpec;
use crate::foundation::error::{PhotocalError, PhotocalResult};
use crate::text::fit::{FittedFont, MeasureMode, fit};

/// Format `date` with a strftime pattern in the configured locale.
///
/// chrono validates patterns only while formatting, so the write runs
/// through `fmt::Write` and a bad pattern surfaces as a configuration
/// error.
pub(crate) fn format_date(
    date: NaiveDate,
    pattern: &str,
    locale: chrono::Locale,
) -> PhotocalResult<String> {
    use std::fmt::Write as _;

    let mut out = String::new();
    write!(out, "{}", date.format_localized(pattern, locale))
        .map_err(|_| PhotocalError::config(format!("invalid date pattern '{pattern}'")))?;
    Ok(out)
}

/// Resolve a font option against the canvas: at its explicit size when one
/// was given, through the fit search otherwise.
pub(crate) fn resolve_fitted(
    canvas: &mut dyn Canvas,
    spec: &FontSpec,
    texts: &[&str],
    bounds: (f64, f64),
    mode: MeasureMode,
) -> PhotocalResult<FittedFont> {
    let handle = canvas.resolve_font(spec)?;
    Ok(match spec.size {
        Some(px) => FittedFont { handle, px },
        None => fit(canvas, handle, texts, bounds, mode),
    })
}
