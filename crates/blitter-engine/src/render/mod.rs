//! Immediate-mode draw dispatch.
//!
//! Surfaces implement [`RasterSurface`]; [`render_blitter`] walks one
//! container's render list and issues exactly one draw per bob.
//!
//! Convention:
//! - positions are pixels, top-left origin, +Y down
//! - every `push_transform` is matched by a `pop_transform` before a call returns

mod dispatch;
mod mode;
mod recording;
mod surface;

pub use dispatch::{render_blitter, resolve_origin, will_render, DrawStats};
pub(crate) use dispatch::draw_bob;
pub use mode::DrawMode;
pub use recording::{RecordingSurface, SurfaceCall};
pub use surface::{RasterSurface, TransformGuard};
