use crate::atlas::Frame;
use crate::coords::Vec2;

/// A single sprite instance owned by a [`Blitter`](super::Blitter).
///
/// Position is local to the container.
#[derive(Debug, Clone, PartialEq)]
pub struct Bob {
    pub position: Vec2,
    pub frame: Frame,
    pub flip_x: bool,
    pub flip_y: bool,
    pub visible: bool,
    alpha: f32,
}

impl Bob {
    pub fn new(x: f32, y: f32, frame: Frame) -> Self {
        Self {
            position: Vec2::new(x, y),
            frame,
            flip_x: false,
            flip_y: false,
            visible: true,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_flip_x(mut self, flip: bool) -> Self {
        self.flip_x = flip;
        self
    }

    #[inline]
    pub fn with_flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.set_alpha(alpha);
        self
    }

    #[inline]
    pub fn set_flip(&mut self, x: bool, y: bool) {
        self.flip_x = x;
        self.flip_y = y;
    }

    #[inline]
    pub fn reset_flip(&mut self) {
        self.set_flip(false, false);
    }

    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Alpha in `[0, 1]`. Out-of-range values are clamped.
    #[inline]
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// True if this bob belongs in the render list.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.visible && self.alpha > 0.0
    }
}
