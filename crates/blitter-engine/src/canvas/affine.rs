use crate::coords::Vec2;

/// Axis-aligned 2D transform: per-axis scale followed by translation.
///
/// `device = (sx * x + tx, sy * y + ty)`. This is the subset of a canvas matrix
/// that translate/scale calls can produce.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Affine {
    pub const IDENTITY: Affine = Affine { sx: 1.0, sy: 1.0, tx: 0.0, ty: 0.0 };

    /// Post-multiplies a translation (applied before the existing transform).
    #[inline]
    pub fn translate(&mut self, x: f32, y: f32) {
        self.tx += self.sx * x;
        self.ty += self.sy * y;
    }

    /// Post-multiplies a scale (applied before the existing transform).
    #[inline]
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.sx *= sx;
        self.sy *= sy;
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(self.sx * p.x + self.tx, self.sy * p.y + self.ty)
    }

    /// Maps a device point back to local space. `None` if an axis is collapsed.
    #[inline]
    pub fn invert(self, p: Vec2) -> Option<Vec2> {
        if self.sx == 0.0 || self.sy == 0.0 {
            return None;
        }
        Some(Vec2::new((p.x - self.tx) / self.sx, (p.y - self.ty) / self.sy))
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_then_mirror() {
        let mut t = Affine::IDENTITY;
        t.translate(95.0, 45.0);
        t.scale(-1.0, 1.0);
        assert_eq!(t.apply(Vec2::new(-16.0, 0.0)), Vec2::new(111.0, 45.0));
        assert_eq!(t.apply(Vec2::new(0.0, 16.0)), Vec2::new(95.0, 61.0));
    }

    #[test]
    fn translate_is_scaled_by_existing_transform() {
        let mut t = Affine::IDENTITY;
        t.scale(2.0, -1.0);
        t.translate(3.0, 4.0);
        assert_eq!(t, Affine { sx: 2.0, sy: -1.0, tx: 6.0, ty: -4.0 });
    }

    #[test]
    fn invert_roundtrips_and_rejects_collapsed_axis() {
        let mut t = Affine::IDENTITY;
        t.translate(10.0, 20.0);
        t.scale(-2.0, 0.5);
        let p = Vec2::new(3.0, -8.0);
        assert_eq!(t.invert(t.apply(p)), Some(p));

        t.scale(0.0, 1.0);
        assert_eq!(t.invert(p), None);
    }
}
