//! Atlas references.
//!
//! A [`Frame`] names a region of a source image and where that region lands
//! relative to a sprite's anchor. Resolving names to frames is the atlas
//! owner's job; this crate only carries the resolved values.

mod frame;

pub use frame::{Frame, ImageHandle};
