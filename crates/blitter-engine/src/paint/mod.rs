//! Paint state shared between containers and surfaces.
//!
//! Scope is the blend mode a container asks the surface to composite with.
//! Pixel math lives with the surface that implements it (see `canvas`).

mod blend;

pub use blend::BlendMode;
