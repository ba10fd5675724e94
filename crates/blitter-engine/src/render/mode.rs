use crate::atlas::Frame;
use crate::blitter::Bob;
use crate::coords::Vec2;

/// Draw route for one bob.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawMode {
    /// Unflipped. One `blit_fast`, no transform ops.
    Direct,
    /// Mirrored about the sprite's own edges via a scoped scale of `(fx, fy)`.
    ///
    /// Each factor is `-1.0` (mirrored) or `1.0`.
    Mirrored { fx: f32, fy: f32 },
}

impl DrawMode {
    pub fn from_flip(flip_x: bool, flip_y: bool) -> Self {
        if !(flip_x || flip_y) {
            return DrawMode::Direct;
        }
        DrawMode::Mirrored {
            fx: if flip_x { -1.0 } else { 1.0 },
            fy: if flip_y { -1.0 } else { 1.0 },
        }
    }

    #[inline]
    pub fn for_bob(bob: &Bob) -> Self {
        Self::from_flip(bob.flip_x, bob.flip_y)
    }

    /// Destination offset to draw at inside the mirrored transform.
    ///
    /// A mirrored axis shifts by the full destination extent *before* the scale
    /// is applied, so the image flips about its own edge and not the origin.
    pub fn adjusted_offset(self, frame: &Frame) -> Vec2 {
        let mut offset = frame.dst_offset;
        if let DrawMode::Mirrored { fx, fy } = self {
            if fx < 0.0 {
                offset.x -= frame.dst_size.x;
            }
            if fy < 0.0 {
                offset.y -= frame.dst_size.y;
            }
        }
        offset
    }
}
