use std::rc::Rc;
use image::RgbaImage;

/// Tile-sized images available to the grid, repeated until every tile has one.
///
/// Repetitions share the same pixel buffers.
pub struct ImageBank {
    images: Vec<Rc<RgbaImage>>,
    distinct: usize,
}

impl ImageBank {
    /// Returns `None` when `decoded` is empty, there is nothing to repeat.
    pub fn replicate(decoded: Vec<RgbaImage>, tile_count: usize) -> Option<Self> {
        if decoded.is_empty() {
            return None;
        }

        let distinct = decoded.len();
        let multiple = tile_count.div_ceil(distinct).max(1);
        let decoded: Vec<Rc<RgbaImage>> = decoded.into_iter().map(Rc::new).collect();

        let mut images = Vec::with_capacity(distinct * multiple);
        for _ in 0..multiple {
            images.extend(decoded.iter().cloned());
        }

        Some(Self { images, distinct })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn distinct_len(&self) -> usize {
        self.distinct
    }

    pub fn get(&self, index: usize) -> Option<&Rc<RgbaImage>> {
        self.images.get(index)
    }
}
