use crate::coords::{Rect, Vec2};

/// Opaque handle to a source image owned by a surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ImageHandle(pub u32);

/// Resolved atlas frame.
///
/// Frames are plain values: copying one copies the reference into the atlas,
/// not pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub image: ImageHandle,
    /// Region of the source image, in source pixels.
    pub source: Rect,
    /// Offset of the drawn region from the sprite anchor.
    pub dst_offset: Vec2,
    /// Size of the drawn region. Equals `source.size` unless the atlas scales it.
    pub dst_size: Vec2,
}

impl Frame {
    /// Frame drawn 1:1 at the anchor.
    pub fn new(image: ImageHandle, source: Rect) -> Self {
        Self {
            image,
            source,
            dst_offset: Vec2::zero(),
            dst_size: source.size,
        }
    }

    #[inline]
    pub fn with_dst_offset(mut self, x: f32, y: f32) -> Self {
        self.dst_offset = Vec2::new(x, y);
        self
    }

    #[inline]
    pub fn with_dst_size(mut self, w: f32, h: f32) -> Self {
        self.dst_size = Vec2::new(w, h);
        self
    }

    /// Destination region relative to the anchor.
    #[inline]
    pub fn dst_rect(&self) -> Rect {
        Rect::from_origin_size(self.dst_offset, self.dst_size)
    }

    /// False for frames that would draw nothing.
    #[inline]
    pub fn has_area(&self) -> bool {
        !self.source.is_empty() && !self.dst_rect().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draws_source_size_at_anchor() {
        let f = Frame::new(ImageHandle(1), Rect::new(32.0, 0.0, 16.0, 24.0));
        assert_eq!(f.dst_rect(), Rect::new(0.0, 0.0, 16.0, 24.0));
        assert!(f.has_area());
    }

    #[test]
    fn zero_sized_frame_has_no_area() {
        let f = Frame::new(ImageHandle(1), Rect::new(0.0, 0.0, 16.0, 16.0)).with_dst_size(0.0, 16.0);
        assert!(!f.has_area());
    }
}
