use crate::coords::ColorRgba;

/// Canvas construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Target width in pixels. Must be non-zero.
    pub width: u32,
    /// Target height in pixels. Must be non-zero.
    pub height: u32,
    /// Color the target is filled with on creation and by `Canvas::clear`.
    pub clear: ColorRgba,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            clear: ColorRgba::transparent(),
        }
    }
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    #[inline]
    pub fn with_clear(mut self, clear: ColorRgba) -> Self {
        self.clear = clear;
        self
    }
}
