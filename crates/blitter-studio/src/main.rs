//! Renders a small scene of blitter containers to a PNG sequence.
//!
//! Each frame scrolls the camera; the HUD container has a zero scroll factor
//! and stays pinned while the world containers move.

mod config;
mod sheet;

use std::fs;

use anyhow::{Context, Result};
use blitter_engine::canvas::{Canvas, CanvasConfig};
use blitter_engine::coords::ColorRgba;
use blitter_engine::logging::{init_logging, LoggingConfig};
use blitter_engine::paint::BlendMode;
use blitter_engine::{render_blitter, Blitter, Bob, Camera};
use clap::Parser;

use config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::parse();
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;

    let mut canvas = Canvas::new(
        CanvasConfig::new(config.width, config.height).with_clear(ColorRgba::new(0.08, 0.08, 0.12, 1.0)),
    )?;
    let sheet = sheet::frames(canvas.add_image(sheet::build()));

    let mut world = Blitter::new(0.0, 40.0, sheet.arrow);
    for i in 0..12 {
        let bob = Bob::new(i as f32 * 20.0, (i % 3) as f32 * 18.0, sheet.arrow)
            .with_flip_x(i % 2 == 1)
            .with_flip_y(i % 4 == 3);
        world.push(bob);
    }
    for i in 0..4 {
        world.create_from(i as f32 * 64.0 + 8.0, 70.0, sheet.flag);
    }

    let mut glows = Blitter::new(0.0, 40.0, sheet.glow)
        .with_blend_mode(BlendMode::Add)
        .with_scroll_factor(0.5, 1.0);
    for i in 0..10 {
        glows.create(i as f32 * 30.0, (i % 2) as f32 * 40.0);
    }

    let mut hud = Blitter::new(4.0, 4.0, sheet.flag).with_scroll_factor(0.0, 0.0);
    hud.create(0.0, 0.0);
    hud.push(Bob::new(18.0, 0.0, sheet.flag).with_flip_x(true));

    let mut camera = Camera::new(0)?;

    log::info!(
        "rendering {} frame(s) of {}x{} to {}",
        config.frames,
        config.width,
        config.height,
        config.out_dir.display()
    );

    for frame in 0..config.frames {
        camera.set_scroll(frame as f32 * 12.0, 0.0);
        canvas.clear();

        for (name, blitter) in [("glows", &glows), ("world", &world), ("hud", &hud)] {
            let stats = render_blitter(&mut canvas, blitter, &camera)
                .with_context(|| format!("drawing {name} on frame {frame}"))?;
            log::debug!("frame {frame} {name}: {} direct, {} mirrored", stats.direct, stats.mirrored);
        }

        let path = config.out_dir.join(format!("frame_{frame:03}.png"));
        canvas
            .target()
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    log::info!("done");
    Ok(())
}
