use core::ops::{Deref, DerefMut};

use crate::atlas::{Frame, ImageHandle};
use crate::coords::{Rect, Vec2};
use crate::paint::BlendMode;

/// A 2D raster target with a transform stack.
///
/// Modelled on an HTML-canvas style context: drawing primitives are affected by
/// the current transform, and `push_transform`/`pop_transform` save and restore it.
pub trait RasterSurface {
    /// Failure raised by the draw primitives (bad image handle, lost target, ...).
    type Error;

    /// Sets the blend mode for subsequent draws. Stays in effect until changed.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Draws `frame` unmirrored with its destination region placed at `(x, y)`.
    fn blit_fast(&mut self, x: f32, y: f32, frame: &Frame) -> Result<(), Self::Error>;

    /// Draws `source` of `image` into the rect `dst_offset`/`dst_size`, in the
    /// current transform's space.
    fn draw_transformed(
        &mut self,
        image: ImageHandle,
        source: Rect,
        dst_offset: Vec2,
        dst_size: Vec2,
    ) -> Result<(), Self::Error>;

    /// Saves the current transform.
    fn push_transform(&mut self);

    /// Restores the most recently saved transform.
    fn pop_transform(&mut self);

    /// Post-multiplies a translation onto the current transform.
    fn translate(&mut self, x: f32, y: f32);

    /// Post-multiplies a scale onto the current transform.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Saves the transform and returns a guard that restores it on drop.
    fn save_transform(&mut self) -> TransformGuard<'_, Self>
    where
        Self: Sized,
    {
        TransformGuard::new(self)
    }
}

/// Scoped transform save.
///
/// Created by [`RasterSurface::save_transform`]. Dereferences to the surface so
/// draws go through the guard; dropping it pops the transform on every exit
/// path, including `?` and panics.
pub struct TransformGuard<'a, S: RasterSurface> {
    surface: &'a mut S,
}

impl<'a, S: RasterSurface> TransformGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.push_transform();
        Self { surface }
    }
}

impl<S: RasterSurface> Deref for TransformGuard<'_, S> {
    type Target = S;

    #[inline]
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: RasterSurface> DerefMut for TransformGuard<'_, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: RasterSurface> Drop for TransformGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.pop_transform();
    }
}
