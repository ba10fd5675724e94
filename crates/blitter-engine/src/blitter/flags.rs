bitflags::bitflags! {
    /// Container render state bits.
    ///
    /// A container renders only when every bit is set (see [`RenderFlags::RENDER_MASK`]).
    /// Each bit is cleared by the property that makes the container draw nothing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u8 {
        /// Cleared by `set_visible(false)`.
        const VISIBLE = 1;
        /// Cleared by an alpha of 0.
        const ALPHA = 1 << 1;
        /// Cleared by a scale of 0 on either axis.
        const SCALE = 1 << 2;
        /// Cleared by a default frame with no area.
        const FRAME = 1 << 3;
    }
}

impl RenderFlags {
    /// The fully-visible state.
    pub const RENDER_MASK: RenderFlags = RenderFlags::all();
}
