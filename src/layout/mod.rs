//! Page geometry: the photo band, the caption strip, the content area and
//! the per-box slots cut out of it.

pub mod page;
