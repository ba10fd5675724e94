//! Blitter containers and their bobs.
//!
//! Responsibilities:
//! - own bobs in a contiguous arena (creation order = draw order)
//! - expose the render list as a borrowed, ordered view
//! - track the container-level render flags and camera filter

mod bob;
mod container;
mod flags;

pub use bob::Bob;
pub use container::{Blitter, BobId};
pub use flags::RenderFlags;
