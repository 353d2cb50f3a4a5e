//! Photocal renders a single photo-calendar page to pixels.
//!
//! A page is a user photo plus an ordered row (or column) of pluggable
//! calendar boxes, arranged by a compact format string such as `tmde`
//! (photo on top, then a month grid, a date box and an event list).
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: CLI options (with `landscape~portrait` dual values) plus the
//!    photo's orientation produce an immutable [`ResolvedConfig`]
//! 2. **Place**: [`place_photo`] pastes the photo (rotating the whole page for
//!    portrait photos) and returns the remaining content rectangle
//! 3. **Partition**: [`partition`] splits the content rectangle into equal
//!    boxes, one per format letter
//! 4. **Render**: every letter is dispatched through [`BoxRegistry`], and each
//!    box renderer draws through the [`Canvas`] capability
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single render call**: a page render is one blocking, single-threaded
//!   call; the canvas is exclusively owned by it and mutated in place.
//! - **Immutable configuration**: dual-valued options are collapsed exactly
//!   once, before any layout; nothing re-resolves mid-render.
//! - **Premultiplied RGBA8** on the canvas end-to-end; PNG export converts
//!   back to straight alpha.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boxes;
mod canvas;
mod config;
mod events;
mod fonts;
mod foundation;
mod layout;
mod render;
mod text;

pub use boxes::registry::{BoxRegistry, BoxRenderer, default_registry};
pub use canvas::photo::Photo;
pub use canvas::raster::RasterCanvas;
pub use canvas::surface::Canvas;
pub use config::format::PageFormat;
pub use config::model::{
    DateBoxOptions, Dual, EventBoxOptions, FontSpec, MonthBoxOptions, PageSettings, PageSize,
    ResolvedConfig, SimpleBoxOptions, StylePair, parse_locale, parse_weekday, parse_weekday_set,
};
pub use events::model::{Event, EventKinds};
pub use events::parse::{MAX_YEAR, MIN_YEAR, easter_sunday, parse_events, read_events_files};
pub use fonts::catalog::{FontCatalog, FontHandle};
pub use foundation::core::{InkExtent, Orientation, PageRect, Rgba8, TextExtent};
pub use foundation::error::{PhotocalError, PhotocalResult};
pub use layout::page::{PhotoLayout, partition, place_photo};
pub use render::pipeline::{BoxSlot, LayoutPlan, RenderedPage, render_page};
pub use text::engine::{TextBrush, TextEngine};
pub use text::fit::{FittedFont, MeasureMode, fit};
pub use text::place::{Anchor, Position, draw_anchored, place};
