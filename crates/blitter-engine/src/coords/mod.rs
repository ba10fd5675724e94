//! Coordinate and geometry types shared by the dispatcher and the surfaces.
//!
//! Canonical space:
//! - Pixels, `f32`, no rounding before the surface rasterizes
//! - Origin top-left
//! - +X right, +Y down

mod color;
mod rect;
mod vec2;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
