//! CPU software canvas.
//!
//! A [`RasterSurface`](crate::render::RasterSurface) over an `image::RgbaImage`.
//! Pixels are straight-alpha RGBA8. Sampling is nearest-neighbour: each covered
//! destination pixel centre is mapped back through the current transform into
//! the source rect, so a negative scale mirrors the image.

mod affine;
mod composite;
mod config;
mod error;
mod surface;

pub use affine::Affine;
pub use config::CanvasConfig;
pub use error::CanvasError;
pub use surface::Canvas;
