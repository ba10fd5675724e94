use std::fmt;

use crate::atlas::ImageHandle;
use crate::coords::Rect;

/// Failures raised by [`Canvas`](super::Canvas).
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// The handle was not issued by this canvas.
    UnknownImage(ImageHandle),
    /// Target dimensions must be non-zero.
    InvalidSize { width: u32, height: u32 },
    /// The source rect reaches outside the source image.
    SourceOutOfBounds { image: ImageHandle, source: Rect },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::UnknownImage(h) => write!(f, "unknown image handle {}", h.0),
            CanvasError::InvalidSize { width, height } => {
                write!(f, "invalid canvas size {width}x{height}")
            }
            CanvasError::SourceOutOfBounds { image, source } => write!(
                f,
                "source rect ({}, {}, {}, {}) outside image {}",
                source.origin.x, source.origin.y, source.size.x, source.size.y, image.0
            ),
        }
    }
}

impl std::error::Error for CanvasError {}
