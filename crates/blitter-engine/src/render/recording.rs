use std::convert::Infallible;

use crate::atlas::{Frame, ImageHandle};
use crate::coords::{Rect, Vec2};
use crate::paint::BlendMode;

use super::RasterSurface;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetBlendMode(BlendMode),
    BlitFast {
        x: f32,
        y: f32,
        frame: Frame,
    },
    DrawTransformed {
        image: ImageHandle,
        source: Rect,
        dst_offset: Vec2,
        dst_size: Vec2,
    },
    PushTransform,
    PopTransform,
    Translate {
        x: f32,
        y: f32,
    },
    Scale {
        x: f32,
        y: f32,
    },
}

/// Surface that draws nothing and records every call in order.
///
/// Useful for inspecting what a container would draw, and as a test double.
/// Recording never fails.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    depth: usize,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls in the order they were received.
    #[inline]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Current transform stack depth. Zero when every push has been popped.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the recorded calls and resets the log.
    pub fn take(&mut self) -> Vec<SurfaceCall> {
        self.depth = 0;
        std::mem::take(&mut self.calls)
    }
}

impl RasterSurface for RecordingSurface {
    type Error = Infallible;

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.calls.push(SurfaceCall::SetBlendMode(mode));
    }

    fn blit_fast(&mut self, x: f32, y: f32, frame: &Frame) -> Result<(), Infallible> {
        self.calls.push(SurfaceCall::BlitFast { x, y, frame: *frame });
        Ok(())
    }

    fn draw_transformed(
        &mut self,
        image: ImageHandle,
        source: Rect,
        dst_offset: Vec2,
        dst_size: Vec2,
    ) -> Result<(), Infallible> {
        self.calls.push(SurfaceCall::DrawTransformed { image, source, dst_offset, dst_size });
        Ok(())
    }

    fn push_transform(&mut self) {
        self.depth += 1;
        self.calls.push(SurfaceCall::PushTransform);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    fn pop_transform(&mut self) {
        debug_assert!(self.depth > 0, "pop_transform called without matching push_transform");
        self.depth = self.depth.saturating_sub(1);
        self.calls.push(SurfaceCall::PopTransform);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.calls.push(SurfaceCall::Translate { x, y });
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.calls.push(SurfaceCall::Scale { x: sx, y: sy });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_resets_log() {
        let mut s = RecordingSurface::new();
        s.set_blend_mode(BlendMode::Multiply);
        s.push_transform();
        let calls = s.take();
        assert_eq!(calls.len(), 2);
        assert!(s.calls().is_empty());
        assert_eq!(s.depth(), 0);
    }
}
