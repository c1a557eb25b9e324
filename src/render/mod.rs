//! Presentation surfaces and the primitive vocabulary they draw.

pub(crate) mod primitive;
pub(crate) mod raster;
pub(crate) mod recording;
pub(crate) mod surface;
