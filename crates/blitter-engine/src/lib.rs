//! Blitter engine crate.
//!
//! Draws the bobs of a [`blitter::Blitter`] container onto any
//! [`render::RasterSurface`], one container per call, camera-relative, in
//! creation order. Unflipped bobs take a single fast blit; mirrored bobs go
//! through a scoped transform.

pub mod atlas;
pub mod blitter;
pub mod camera;
pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;

pub use blitter::{Blitter, Bob, BobId};
pub use camera::Camera;
pub use render::{render_blitter, DrawStats, RasterSurface};
