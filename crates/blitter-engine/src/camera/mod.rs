//! Camera view consumed by the dispatcher.
//!
//! Only the two things a container needs are modelled: the scroll offset and
//! the identity bit tested against a container's camera filter. Zoom, rotation
//! and viewport placement belong to whoever owns the camera.

mod error;

pub use error::CameraIdError;

use crate::coords::Vec2;

/// Number of distinct camera identities a `u32` filter mask can hold.
pub const MAX_CAMERAS: u32 = u32::BITS;

/// Single-bit camera identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CameraId(u32);

impl CameraId {
    /// Identity for the camera at `index` (`0..MAX_CAMERAS`).
    pub fn from_index(index: u32) -> Result<Self, CameraIdError> {
        if index >= MAX_CAMERAS {
            return Err(CameraIdError { index });
        }
        Ok(Self(1 << index))
    }

    /// The identity as a mask with exactly one bit set.
    #[inline]
    pub const fn bit(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0.trailing_zeros()
    }
}

/// A 2D camera: scroll position plus identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    id: CameraId,
    pub scroll: Vec2,
}

impl Camera {
    /// Camera at `index` with zero scroll.
    pub fn new(index: u32) -> Result<Self, CameraIdError> {
        Ok(Self {
            id: CameraId::from_index(index)?,
            scroll: Vec2::zero(),
        })
    }

    #[inline]
    pub fn with_scroll(mut self, x: f32, y: f32) -> Self {
        self.scroll = Vec2::new(x, y);
        self
    }

    #[inline]
    pub fn set_scroll(&mut self, x: f32, y: f32) {
        self.scroll = Vec2::new(x, y);
    }

    #[inline]
    pub fn id(&self) -> CameraId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_single_bit() {
        let id = CameraId::from_index(5).unwrap();
        assert_eq!(id.bit(), 0b10_0000);
        assert_eq!(id.index(), 5);
    }

    #[test]
    fn last_index_is_high_bit() {
        assert_eq!(CameraId::from_index(31).unwrap().bit(), 1 << 31);
    }

    #[test]
    fn index_out_of_range_is_rejected() {
        let err = Camera::new(32).unwrap_err();
        assert_eq!(err.index, 32);
    }

    #[test]
    fn scroll_builder() {
        let cam = Camera::new(0).unwrap().with_scroll(10.0, -4.0);
        assert_eq!(cam.scroll, Vec2::new(10.0, -4.0));
    }
}
