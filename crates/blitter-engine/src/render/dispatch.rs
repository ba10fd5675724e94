use crate::blitter::{Blitter, Bob, RenderFlags};
use crate::camera::Camera;
use crate::coords::Vec2;

use super::{DrawMode, RasterSurface};

/// Per-call draw counts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Bobs drawn with `blit_fast`.
    pub direct: usize,
    /// Bobs drawn through the transform stack.
    pub mirrored: usize,
}

impl DrawStats {
    #[inline]
    pub fn total(self) -> usize {
        self.direct + self.mirrored
    }
}

// ── visibility gate ───────────────────────────────────────────────────────

/// True if `blitter` should draw anything for `camera`.
///
/// Requires the full render mask, and that the camera is not listed in the
/// container's camera filter.
pub fn will_render(blitter: &Blitter, camera: &Camera) -> bool {
    let filter = blitter.camera_filter();
    blitter.render_flags() == RenderFlags::RENDER_MASK
        && !(filter != 0 && filter & camera.id().bit() != 0)
}

// ── origin ────────────────────────────────────────────────────────────────

/// Screen-space translation shared by every bob of `blitter` this frame.
///
/// A scroll factor of 0 pins the container to the screen; 1 follows the
/// camera 1:1. No rounding.
#[inline]
pub fn resolve_origin(blitter: &Blitter, camera: &Camera) -> Vec2 {
    blitter.position - camera.scroll.mul_components(blitter.scroll_factor)
}

// ── draw ──────────────────────────────────────────────────────────────────

/// Draws one bob relative to `origin` using `mode`.
///
/// `Mirrored` saves the transform and restores it before returning, including
/// when the draw fails. Callers outside the crate go through [`render_blitter`],
/// which always derives `mode` from the bob's flip flags.
pub(crate) fn draw_bob<S: RasterSurface>(
    surface: &mut S,
    bob: &Bob,
    origin: Vec2,
    mode: DrawMode,
) -> Result<(), S::Error> {
    let frame = &bob.frame;
    let anchor = bob.position + origin;

    match mode {
        DrawMode::Direct => {
            let dst = frame.dst_offset + anchor;
            surface.blit_fast(dst.x, dst.y, frame)
        }
        DrawMode::Mirrored { fx, fy } => {
            let offset = mode.adjusted_offset(frame);

            let mut scoped = surface.save_transform();
            scoped.translate(anchor.x, anchor.y);
            scoped.scale(fx, fy);
            scoped.draw_transformed(frame.image, frame.source, offset, frame.dst_size)
        }
    }
}

/// Renders every bob in `blitter`'s render list onto `surface`.
///
/// Issues no surface calls at all when the visibility gate fails. Otherwise sets
/// the container's blend mode once, then draws bobs in render-list order. The
/// first draw error aborts the loop and is returned unchanged.
pub fn render_blitter<S: RasterSurface>(
    surface: &mut S,
    blitter: &Blitter,
    camera: &Camera,
) -> Result<DrawStats, S::Error> {
    if !will_render(blitter, camera) {
        log::trace!(
            "blitter skipped for camera {}: flags {:?}, filter {:#x}",
            camera.id().index(),
            blitter.render_flags(),
            blitter.camera_filter()
        );
        return Ok(DrawStats::default());
    }

    surface.set_blend_mode(blitter.blend_mode);

    let origin = resolve_origin(blitter, camera);
    let mut stats = DrawStats::default();

    for bob in blitter.render_list() {
        let mode = DrawMode::for_bob(bob);
        draw_bob(surface, bob, origin, mode)?;

        match mode {
            DrawMode::Direct => stats.direct += 1,
            DrawMode::Mirrored { .. } => stats.mirrored += 1,
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::{Frame, ImageHandle};
    use crate::blitter::BobId;
    use crate::coords::Rect;
    use crate::paint::BlendMode;
    use crate::render::{RecordingSurface, SurfaceCall};

    fn frame16() -> Frame {
        Frame::new(ImageHandle(7), Rect::new(0.0, 0.0, 16.0, 16.0))
    }

    fn camera(scroll_x: f32, scroll_y: f32) -> Camera {
        Camera::new(0).unwrap().with_scroll(scroll_x, scroll_y)
    }

    /// Container at (100, 50), factor (1, 1), one bob at (5, 5).
    fn example_blitter() -> Blitter {
        example_with_bob().0
    }

    fn example_with_bob() -> (Blitter, BobId) {
        let mut b = Blitter::new(100.0, 50.0, frame16());
        let id = b.create(5.0, 5.0);
        (b, id)
    }

    fn render(blitter: &Blitter, cam: &Camera) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        render_blitter(&mut surface, blitter, cam).unwrap();
        surface
    }

    // ── visibility gate ───────────────────────────────────────────────────

    #[test]
    fn hidden_container_issues_no_calls() {
        let mut b = example_blitter();
        b.set_visible(false);
        assert!(render(&b, &camera(0.0, 0.0)).calls().is_empty());
    }

    #[test]
    fn any_cleared_flag_issues_no_calls() {
        let cam = camera(0.0, 0.0);

        let mut b = example_blitter();
        b.set_alpha(0.0);
        assert!(render(&b, &cam).calls().is_empty());

        let mut b = example_blitter();
        b.set_scale(0.0, 1.0);
        assert!(render(&b, &cam).calls().is_empty());

        let mut b = example_blitter();
        b.set_frame(frame16().with_dst_size(0.0, 0.0));
        assert!(render(&b, &cam).calls().is_empty());
    }

    #[test]
    fn filtered_camera_issues_no_calls() {
        let cam = Camera::new(2).unwrap();
        let mut b = example_blitter();
        b.ignore_camera(&cam);
        assert!(!will_render(&b, &cam));
        assert!(render(&b, &cam).calls().is_empty());
    }

    #[test]
    fn filter_for_other_camera_still_renders() {
        let cam = Camera::new(2).unwrap();
        let other = Camera::new(1).unwrap();
        let mut b = example_blitter();
        b.ignore_camera(&other);
        assert!(will_render(&b, &cam));
        assert_eq!(render(&b, &cam).calls().len(), 2);
    }

    #[test]
    fn empty_container_sets_blend_mode_only() {
        let b = Blitter::new(0.0, 0.0, frame16()).with_blend_mode(BlendMode::Add);
        let surface = render(&b, &camera(0.0, 0.0));
        assert_eq!(surface.calls(), &[SurfaceCall::SetBlendMode(BlendMode::Add)]);
    }

    // ── origin ────────────────────────────────────────────────────────────

    #[test]
    fn zero_scroll_factor_pins_to_screen() {
        let b = example_blitter().with_scroll_factor(0.0, 0.0);
        for (sx, sy) in [(0.0, 0.0), (10.0, 10.0), (-250.5, 1e6)] {
            assert_eq!(resolve_origin(&b, &camera(sx, sy)), Vec2::new(100.0, 50.0));
        }
    }

    #[test]
    fn unit_scroll_factor_follows_camera() {
        let b = example_blitter();
        assert_eq!(resolve_origin(&b, &camera(10.0, 10.0)), Vec2::new(90.0, 40.0));
        assert_eq!(resolve_origin(&b, &camera(-3.5, 7.25)), Vec2::new(103.5, 42.75));
    }

    #[test]
    fn fractional_scroll_factor_is_not_rounded() {
        let b = example_blitter().with_scroll_factor(0.5, 0.25);
        assert_eq!(resolve_origin(&b, &camera(3.0, 3.0)), Vec2::new(98.5, 49.25));
    }

    // ── draw dispatch ─────────────────────────────────────────────────────

    #[test]
    fn unflipped_bob_takes_fast_path() {
        let b = example_blitter().with_blend_mode(BlendMode::Screen);
        let surface = render(&b, &camera(10.0, 10.0));
        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::SetBlendMode(BlendMode::Screen),
                SurfaceCall::BlitFast { x: 95.0, y: 45.0, frame: frame16() },
            ]
        );
    }

    #[test]
    fn fast_path_includes_frame_offset() {
        let mut b = Blitter::new(0.0, 0.0, frame16().with_dst_offset(3.0, -2.0));
        b.create(10.0, 20.0);
        let surface = render(&b, &camera(0.0, 0.0));
        let SurfaceCall::BlitFast { x, y, .. } = surface.calls()[1] else {
            panic!("expected fast blit, got {:?}", surface.calls()[1]);
        };
        assert_eq!((x, y), (13.0, 18.0));
    }

    #[test]
    fn flip_x_takes_transform_path() {
        let (mut b, id) = example_with_bob();
        b.bob_mut(id).unwrap().flip_x = true;

        let surface = render(&b, &camera(10.0, 10.0));
        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::SetBlendMode(BlendMode::Normal),
                SurfaceCall::PushTransform,
                SurfaceCall::Translate { x: 95.0, y: 45.0 },
                SurfaceCall::Scale { x: -1.0, y: 1.0 },
                SurfaceCall::DrawTransformed {
                    image: ImageHandle(7),
                    source: Rect::new(0.0, 0.0, 16.0, 16.0),
                    dst_offset: Vec2::new(-16.0, 0.0),
                    dst_size: Vec2::new(16.0, 16.0),
                },
                SurfaceCall::PopTransform,
            ]
        );
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn flip_y_adjusts_height_only() {
        let (mut b, id) = example_with_bob();
        b.bob_mut(id).unwrap().flip_y = true;

        let surface = render(&b, &camera(10.0, 10.0));
        assert!(surface.calls().contains(&SurfaceCall::Scale { x: 1.0, y: -1.0 }));
        assert!(surface.calls().iter().any(|c| matches!(
            c,
            SurfaceCall::DrawTransformed { dst_offset, .. } if *dst_offset == Vec2::new(0.0, -16.0)
        )));
    }

    #[test]
    fn draw_order_matches_render_list() {
        let mut b = Blitter::new(0.0, 0.0, frame16());
        for i in 0..5 {
            let id = b.create(i as f32 * 10.0, 0.0);
            b.bob_mut(id).unwrap().flip_x = i % 2 == 1;
        }

        let surface = render(&b, &camera(0.0, 0.0));
        let xs: Vec<f32> = surface
            .calls()
            .iter()
            .filter_map(|c| match *c {
                SurfaceCall::BlitFast { x, .. } => Some(x),
                SurfaceCall::Translate { x, .. } => Some(x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn stats_count_each_path() {
        let mut b = Blitter::new(0.0, 0.0, frame16());
        b.create(0.0, 0.0);
        let flipped = b.create(0.0, 0.0);
        b.bob_mut(flipped).unwrap().set_flip(true, true);
        let hidden = b.create(0.0, 0.0);
        b.bob_mut(hidden).unwrap().visible = false;

        let mut surface = RecordingSurface::new();
        let stats = render_blitter(&mut surface, &b, &camera(0.0, 0.0)).unwrap();
        assert_eq!(stats, DrawStats { direct: 1, mirrored: 1 });
        assert_eq!(stats.total(), 2);
    }

    // ── failure ───────────────────────────────────────────────────────────

    /// Recording surface whose transformed draws always fail.
    struct FailingSurface(RecordingSurface);

    impl RasterSurface for FailingSurface {
        type Error = &'static str;

        fn set_blend_mode(&mut self, mode: BlendMode) {
            self.0.set_blend_mode(mode);
        }

        fn blit_fast(&mut self, x: f32, y: f32, frame: &Frame) -> Result<(), Self::Error> {
            self.0.blit_fast(x, y, frame).map_err(|never| match never {})
        }

        fn draw_transformed(
            &mut self,
            _image: ImageHandle,
            _source: Rect,
            _dst_offset: Vec2,
            _dst_size: Vec2,
        ) -> Result<(), Self::Error> {
            Err("image gone")
        }

        fn push_transform(&mut self) {
            self.0.push_transform();
        }

        fn pop_transform(&mut self) {
            self.0.pop_transform();
        }

        fn translate(&mut self, x: f32, y: f32) {
            self.0.translate(x, y);
        }

        fn scale(&mut self, sx: f32, sy: f32) {
            self.0.scale(sx, sy);
        }
    }

    #[test]
    fn failed_mirrored_draw_restores_transform_and_stops() {
        let mut b = Blitter::new(0.0, 0.0, frame16());
        let first = b.create(0.0, 0.0);
        b.bob_mut(first).unwrap().flip_x = true;
        b.create(32.0, 0.0);

        let mut surface = FailingSurface(RecordingSurface::new());
        let err = render_blitter(&mut surface, &b, &camera(0.0, 0.0)).unwrap_err();

        assert_eq!(err, "image gone");
        assert_eq!(surface.0.depth(), 0);
        assert_eq!(surface.0.calls().last(), Some(&SurfaceCall::PopTransform));
        assert!(!surface.0.calls().iter().any(|c| matches!(c, SurfaceCall::BlitFast { .. })));
    }
}
