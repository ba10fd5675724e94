//! Procedural sprite sheet for the demo.
//!
//! Cells are 16x16. Every sprite is asymmetric so mirroring is visible.

use blitter_engine::atlas::{Frame, ImageHandle};
use blitter_engine::coords::Rect;
use image::{Rgba, RgbaImage};

pub const CELL: u32 = 16;

/// Frames cut from the sheet, in cell order.
pub struct Sheet {
    pub arrow: Frame,
    pub flag: Frame,
    pub glow: Frame,
}

/// Draws the sheet: arrow pointing right, flag on a pole, soft radial glow.
pub fn build() -> RgbaImage {
    RgbaImage::from_fn(CELL * 3, CELL, |x, y| {
        let (cell, cx, cy) = (x / CELL, (x % CELL) as i32, y as i32);
        match cell {
            0 => arrow(cx, cy),
            1 => flag(cx, cy),
            _ => glow(cx, cy),
        }
    })
}

pub fn frames(image: ImageHandle) -> Sheet {
    let cell = |i: u32| Frame::new(image, Rect::new((i * CELL) as f32, 0.0, CELL as f32, CELL as f32));
    Sheet { arrow: cell(0), flag: cell(1), glow: cell(2) }
}

fn arrow(x: i32, y: i32) -> Rgba<u8> {
    let shaft = (6..10).contains(&y) && x < 10;
    let head = x >= 9 && (y - 8).abs() <= 15 - x;
    if shaft || head { Rgba([240, 200, 40, 255]) } else { Rgba([0, 0, 0, 0]) }
}

fn flag(x: i32, y: i32) -> Rgba<u8> {
    if x == 2 {
        Rgba([180, 180, 180, 255])
    } else if (3..14).contains(&x) && (1..8).contains(&y) {
        Rgba([200, 40, 60, 255])
    } else {
        Rgba([0, 0, 0, 0])
    }
}

fn glow(x: i32, y: i32) -> Rgba<u8> {
    let d = (((x - 8).pow(2) + (y - 8).pow(2)) as f32).sqrt();
    let a = (1.0 - d / 8.0).clamp(0.0, 1.0);
    Rgba([80, 160, 255, (a * 255.0) as u8])
}
