use image::{Rgba, RgbaImage};

use crate::atlas::{Frame, ImageHandle};
use crate::coords::{Rect, Vec2};
use crate::paint::BlendMode;
use crate::render::RasterSurface;

use super::composite::blend_pixel;
use super::{Affine, CanvasConfig, CanvasError};

/// Software raster surface.
///
/// Source images are registered up front with [`add_image`](Self::add_image);
/// frames refer to them by [`ImageHandle`].
#[derive(Debug)]
pub struct Canvas {
    target: RgbaImage,
    clear: [u8; 4],

    images: Vec<RgbaImage>,

    transform: Affine,
    saved: Vec<Affine>,
    blend_mode: BlendMode,

    warned_collapsed: bool,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        let CanvasConfig { width, height, clear } = config;
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidSize { width, height });
        }

        let clear = clear.to_rgba8();
        Ok(Self {
            target: RgbaImage::from_pixel(width, height, Rgba(clear)),
            clear,
            images: Vec::new(),
            transform: Affine::IDENTITY,
            saved: Vec::new(),
            blend_mode: BlendMode::Normal,
            warned_collapsed: false,
        })
    }

    /// Registers a source image and returns its handle.
    pub fn add_image(&mut self, image: RgbaImage) -> ImageHandle {
        let handle = ImageHandle(self.images.len() as u32);
        log::debug!(
            "canvas: image {} registered ({}x{})",
            handle.0,
            image.width(),
            image.height()
        );
        self.images.push(image);
        handle
    }

    #[inline]
    pub fn image(&self, handle: ImageHandle) -> Option<&RgbaImage> {
        self.images.get(handle.0 as usize)
    }

    /// Fills the target with the clear color. Transform and blend state are kept.
    pub fn clear(&mut self) {
        let clear = Rgba(self.clear);
        self.target.pixels_mut().for_each(|p| *p = clear);
    }

    #[inline]
    pub fn target(&self) -> &RgbaImage {
        &self.target
    }

    #[inline]
    pub fn into_target(self) -> RgbaImage {
        self.target
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    #[inline]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of saved transforms not yet restored.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Resamples `source` of `image` into the local rect `dst`.
    fn draw_region(&mut self, image: ImageHandle, source: Rect, dst: Rect) -> Result<(), CanvasError> {
        let src_img = self
            .images
            .get(image.0 as usize)
            .ok_or(CanvasError::UnknownImage(image))?;

        let src_bounds = Rect::new(0.0, 0.0, src_img.width() as f32, src_img.height() as f32);
        if !src_bounds.contains_rect(source) {
            return Err(CanvasError::SourceOutOfBounds { image, source });
        }

        if source.is_empty() || dst.is_empty() {
            return Ok(());
        }

        let t = self.transform;
        if t.invert(Vec2::zero()).is_none() {
            if !self.warned_collapsed {
                log::debug!("canvas: draw under zero scale ignored");
                self.warned_collapsed = true;
            }
            return Ok(());
        }

        let device = Rect::from_corners(t.apply(dst.min()), t.apply(dst.max()));
        let target_bounds =
            Rect::new(0.0, 0.0, self.target.width() as f32, self.target.height() as f32);
        let Some(covered) = device.intersect(target_bounds) else {
            return Ok(());
        };

        // Whole-texel sampling bounds. A sub-texel source still covers one texel.
        let texel_min = Vec2::new(source.min().x.floor(), source.min().y.floor());
        let texel_max = Vec2::new(
            (source.max().x.ceil() - 1.0).max(texel_min.x),
            (source.max().y.ceil() - 1.0).max(texel_min.y),
        );
        let x_first = covered.origin.x.floor() as u32;
        let y_first = covered.origin.y.floor() as u32;
        let x_end = (covered.max().x.ceil() as u32).min(self.target.width());
        let y_end = (covered.max().y.ceil() as u32).min(self.target.height());

        for py in y_first..y_end {
            let cy = py as f32 + 0.5;
            if cy < device.origin.y || cy >= device.max().y {
                continue;
            }
            for px in x_first..x_end {
                let cx = px as f32 + 0.5;
                if cx < device.origin.x || cx >= device.max().x {
                    continue;
                }

                let Some(local) = t.invert(Vec2::new(cx, cy)) else { continue };
                let u = (local.x - dst.origin.x) / dst.size.x;
                let v = (local.y - dst.origin.y) / dst.size.y;

                let sx = (source.origin.x + u * source.size.x).floor().clamp(texel_min.x, texel_max.x);
                let sy = (source.origin.y + v * source.size.y).floor().clamp(texel_min.y, texel_max.y);

                let src_px = src_img.get_pixel(sx as u32, sy as u32).0;
                let dst_px = self.target.get_pixel_mut(px, py);
                dst_px.0 = blend_pixel(src_px, dst_px.0, self.blend_mode);
            }
        }

        Ok(())
    }
}

impl RasterSurface for Canvas {
    type Error = CanvasError;

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    fn blit_fast(&mut self, x: f32, y: f32, frame: &Frame) -> Result<(), CanvasError> {
        let dst = Rect::from_origin_size(Vec2::new(x, y), frame.dst_size);
        self.draw_region(frame.image, frame.source, dst)
    }

    fn draw_transformed(
        &mut self,
        image: ImageHandle,
        source: Rect,
        dst_offset: Vec2,
        dst_size: Vec2,
    ) -> Result<(), CanvasError> {
        self.draw_region(image, source, Rect::from_origin_size(dst_offset, dst_size))
    }

    fn push_transform(&mut self) {
        self.saved.push(self.transform);
    }

    fn pop_transform(&mut self) {
        match self.saved.pop() {
            Some(t) => self.transform = t,
            None => log::debug!("canvas: pop_transform with empty stack ignored"),
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.transform.translate(x, y);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform.scale(sx, sy);
    }
}
