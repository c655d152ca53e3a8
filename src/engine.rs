use image::RgbaImage;

/// Something that shows one raster per tile.
///
/// The fade animator only talks to the grid through this trait so it can be
/// driven without a window.
pub trait TileCanvas {
    fn tile_count(&self) -> usize;
    fn set_tile_image(&mut self, tile: usize, image: &RgbaImage) -> anyhow::Result<()>;
}
