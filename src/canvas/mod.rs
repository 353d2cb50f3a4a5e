//! Drawing surfaces: the canvas abstraction the layout and box code draw
//! through, the CPU raster implementation, and photo handling.

pub mod photo;
pub mod raster;
pub mod surface;
