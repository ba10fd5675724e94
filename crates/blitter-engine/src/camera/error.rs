use std::fmt;

use super::MAX_CAMERAS;

/// A camera index that does not fit in a `u32` filter mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraIdError {
    pub index: u32,
}

impl fmt::Display for CameraIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "camera index {} out of range (max {})", self.index, MAX_CAMERAS - 1)
    }
}

impl std::error::Error for CameraIdError {}
