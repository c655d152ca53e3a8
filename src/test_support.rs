use std::collections::VecDeque;
use image::{Rgba, RgbaImage};
use crate::engine::TileCanvas;
use crate::fade::IndexSource;

pub fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// In-memory canvas keeping the latest image of every tile and the write order.
pub struct RecordingCanvas {
    pub tiles: Vec<Option<RgbaImage>>,
    pub writes: Vec<usize>,
}

impl RecordingCanvas {
    pub fn new(tile_count: usize) -> Self {
        Self { tiles: vec![None; tile_count], writes: Vec::new() }
    }

    pub fn tile(&self, tile: usize) -> &RgbaImage {
        self.tiles[tile].as_ref().expect("tile was never written")
    }
}

impl TileCanvas for RecordingCanvas {
    fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    fn set_tile_image(&mut self, tile: usize, image: &RgbaImage) -> anyhow::Result<()> {
        self.tiles[tile] = Some(image.clone());
        self.writes.push(tile);
        Ok(())
    }
}

/// Hands out a fixed sequence of indices.
pub struct ScriptedIndices(pub VecDeque<usize>);

impl ScriptedIndices {
    pub fn new(indices: &[usize]) -> Self {
        Self(indices.iter().copied().collect())
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, bound: usize) -> usize {
        let index = self.0.pop_front().expect("scripted indices exhausted");
        assert!(index < bound, "scripted index {index} out of 0..{bound}");
        index
    }
}
