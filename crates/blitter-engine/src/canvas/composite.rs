//! Per-pixel blending for straight-alpha RGBA8.

use crate::paint::BlendMode;

#[inline]
fn unit(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Composites `src` over `dst` with `mode`.
pub(super) fn blend_pixel(src: [u8; 4], dst: [u8; 4], mode: BlendMode) -> [u8; 4] {
    let src_a = unit(src[3]);
    if src_a <= 0.0 {
        return dst;
    }

    match mode {
        BlendMode::Normal => {
            if src[3] == u8::MAX {
                return src;
            }
            let dst_a = unit(dst[3]);
            let out_a = src_a + dst_a * (1.0 - src_a);
            if out_a <= 0.0 {
                return [0, 0, 0, 0];
            }
            let mix = |s: u8, d: u8| byte((unit(s) * src_a + unit(d) * dst_a * (1.0 - src_a)) / out_a);
            [mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), byte(out_a)]
        }

        BlendMode::Add => {
            let add = |s: u8, d: u8| byte(unit(d) + unit(s) * src_a);
            [add(src[0], dst[0]), add(src[1], dst[1]), add(src[2], dst[2]), dst[3].max(src[3])]
        }

        BlendMode::Multiply => {
            let mul = |s: u8, d: u8| {
                let d = unit(d);
                byte(d * (1.0 - src_a) + unit(s) * d * src_a)
            };
            [mul(src[0], dst[0]), mul(src[1], dst[1]), mul(src[2], dst[2]), dst[3]]
        }

        BlendMode::Screen => {
            let screen = |s: u8, d: u8| {
                let d = unit(d);
                let m = 1.0 - (1.0 - unit(s)) * (1.0 - d);
                byte(d * (1.0 - src_a) + m * src_a)
            };
            [screen(src[0], dst[0]), screen(src[1], dst[1]), screen(src[2], dst[2]), dst[3]]
        }

        BlendMode::Erase => [dst[0], dst[1], dst[2], byte(unit(dst[3]) * (1.0 - src_a))],
    }
}
