use std::path::PathBuf;

use clap::Parser;

/// Demo settings, read from the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "blitter-studio", about = "Renders a scrolling Blitter demo to a PNG sequence")]
pub struct StudioConfig {
    /// Directory the frames are written to
    #[arg(default_value = "blitter-out")]
    pub out_dir: PathBuf,

    /// Number of frames to render
    #[arg(default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 144, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
}
