//! Text shaping and placement: the Parley-backed layout engine, the size
//! fit search, and anchored drawing inside a rectangle.

pub mod engine;
pub mod fit;
pub mod place;
