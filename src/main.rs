use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use raylib::core::window::WindowState;
use raylib::prelude::*;
use tracing::info;

mod constants;
mod engine;
mod fade;
mod image_bank;
mod image_loader;
mod layout;
mod state;
mod tile_grid;
#[cfg(test)]
mod test_support;

use crate::constants::*;
use crate::fade::{FadeAnimator, RandomIndices};
use crate::image_bank::ImageBank;
use crate::image_loader::load_tile_images;
use crate::layout::ScreenGeometry;
use crate::tile_grid::TileGrid;

/// Full-screen wall of image tiles that slowly cross-fade into each other.
#[derive(Parser, Debug)]
#[command(name = "tile-screensaver", version)]
struct Cli {
    /// Directory holding the images to show.
    #[arg(default_value = DEFAULT_IMAGE_DIR)]
    image_dir: PathBuf,
}

fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();
    info!(dir = %cli.image_dir.display(), "starting screensaver");

    // A 0x0 request makes raylib size the window to the current monitor
    let (mut rl, thread) = raylib::init()
        .size(0, 0)
        .title("Tile Screensaver")
        .undecorated()
        .vsync()
        .build();
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_window_state(
        WindowState::default()
            .set_window_topmost(true)
            .set_window_maximized(true),
    );
    rl.set_target_fps(FPS);

    let geometry = ScreenGeometry::compute(
        rl.get_screen_width().max(0) as u32,
        rl.get_screen_height().max(0) as u32,
        ROW_COUNT,
    )
    .context("unusable screen geometry")?;
    info!(
        width = geometry.width,
        height = geometry.height,
        tile_size = geometry.tile_size,
        columns = geometry.columns,
        side_margin = geometry.side_margin,
        "computed tile layout"
    );

    // --- Load Images ---
    let images = load_tile_images(&cli.image_dir, geometry.tile_size)
        .with_context(|| format!("cannot load images from {}", cli.image_dir.display()))?;
    let bank = ImageBank::replicate(images, geometry.tile_count())
        .ok_or_else(|| anyhow!("no images to show"))?;

    let mut grid = TileGrid::new(&mut rl, &thread, geometry)?;
    let mut animator = FadeAnimator::new(bank, geometry.tile_count(), RandomIndices(rand::rng()));
    info!(
        tiles = animator.tile_count(),
        bank = animator.bank().len(),
        distinct = animator.bank().distinct_len(),
        "image bank ready"
    );
    animator.render_initial(&mut grid)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::try_from_secs_f32(rl.get_frame_time()).unwrap_or_default();
        animator.advance(dt, &mut grid)?;

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        grid.draw(&mut d);
    }

    info!(elapsed = ?animator.elapsed(), "window closed");
    Ok(())
}
