use anyhow::{Context, Result, anyhow};
use image::RgbaImage;
use raylib::prelude::*;
use crate::engine::TileCanvas;
use crate::layout::{Rect, ScreenGeometry};

/// One GPU texture per tile, laid out on the centered grid.
pub struct TileGrid {
    geometry: ScreenGeometry,
    tiles: Vec<Texture2D>,
}

impl TileGrid {
    /// Allocates a blank `tile_size` square texture for every tile.
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, geometry: ScreenGeometry) -> Result<Self> {
        let size = geometry.tile_size as i32;
        let blank = Image::gen_image_color(size, size, Color::BLANK);

        let mut tiles = Vec::with_capacity(geometry.tile_count());
        for i in 0..geometry.tile_count() {
            let texture = rl
                .load_texture_from_image(thread, &blank)
                .map_err(|e| anyhow!("{e}"))
                .with_context(|| format!("failed to create texture for tile {i}"))?;
            tiles.push(texture);
        }

        Ok(Self { geometry, tiles })
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        fill(d, self.geometry.left_strip());
        fill(d, self.geometry.right_strip());

        for (i, texture) in self.tiles.iter().enumerate() {
            let rect = self.geometry.tile_rect(i);
            d.draw_texture(texture, rect.x as i32, rect.y as i32, Color::WHITE);
        }
    }
}

fn fill(d: &mut RaylibDrawHandle, rect: Rect) {
    if rect.width > 0 {
        d.draw_rectangle(rect.x as i32, rect.y as i32, rect.width as i32, rect.height as i32, Color::BLACK);
    }
}

impl TileCanvas for TileGrid {
    fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    fn set_tile_image(&mut self, tile: usize, image: &RgbaImage) -> Result<()> {
        let size = self.geometry.tile_size;
        if image.dimensions() != (size, size) {
            return Err(anyhow!(
                "tile {tile} expects a {size}x{size} image, got {:?}",
                image.dimensions()
            ));
        }

        let texture = self
            .tiles
            .get_mut(tile)
            .ok_or_else(|| anyhow!("tile {tile} is outside the grid"))?;
        texture
            .update_texture(image.as_raw())
            .map_err(|e| anyhow!("failed to upload tile {tile}: {e}"))
    }
}
