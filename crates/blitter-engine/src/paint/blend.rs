use core::fmt;

/// How source pixels combine with what is already on the surface.
///
/// This is the subset of blend modes an immediate-mode raster surface can
/// express without a GPU pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Source-over alpha blending.
    #[default]
    Normal,
    /// Additive (lighter). Used for glows and particles.
    Add,
    /// Channel-wise product. Darkens.
    Multiply,
    /// Inverse product of inverses. Lightens.
    Screen,
    /// Removes destination alpha where the source is opaque.
    Erase,
}

impl BlendMode {
    pub const ALL: [BlendMode; 5] = [
        BlendMode::Normal,
        BlendMode::Add,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Erase,
    ];

    /// Name used by HTML-canvas style `globalCompositeOperation`.
    pub const fn composite_op(self) -> &'static str {
        match self {
            BlendMode::Normal => "source-over",
            BlendMode::Add => "lighter",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Erase => "destination-out",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.composite_op())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert_eq!(BlendMode::default(), BlendMode::Normal);
    }

    #[test]
    fn composite_op_names_are_distinct() {
        let mut names: Vec<_> = BlendMode::ALL.iter().map(|m| m.composite_op()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BlendMode::ALL.len());
    }
}
