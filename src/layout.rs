use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("screen height {height} is too small for {rows} rows of tiles")]
    ZeroTileSize { height: u32, rows: u32 },
    #[error("screen width {width} cannot hold a single {tile_size}px tile")]
    ZeroColumns { width: u32, tile_size: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Tile grid geometry derived once from the screen size.
///
/// Tiles are square. Whatever does not fit horizontally is split into two
/// black side strips; what does not fit vertically stays unused at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
    pub rows: u32,
    pub columns: u32,
    pub tile_size: u32,
    pub side_margin: u32,
}

impl ScreenGeometry {
    pub fn compute(width: u32, height: u32, rows: u32) -> Result<Self, LayoutError> {
        let tile_size = if rows == 0 { 0 } else { height / rows };
        if tile_size == 0 {
            return Err(LayoutError::ZeroTileSize { height, rows });
        }

        let columns = width / tile_size;
        if columns == 0 {
            return Err(LayoutError::ZeroColumns { width, tile_size });
        }

        let side_margin = (width - tile_size * columns) / 2;

        Ok(Self {
            width,
            height,
            rows,
            columns,
            tile_size,
            side_margin,
        })
    }

    pub fn tile_count(&self) -> usize {
        (self.rows * self.columns) as usize
    }

    pub fn left_strip(&self) -> Rect {
        Rect::new(0, 0, self.side_margin, self.height)
    }

    pub fn right_strip(&self) -> Rect {
        Rect::new(self.side_margin + self.grid_width(), 0, self.side_margin, self.height)
    }

    pub fn grid(&self) -> Rect {
        Rect::new(self.side_margin, 0, self.grid_width(), self.tile_size * self.rows)
    }

    /// Screen rectangle of tile `index`, filled row by row.
    pub fn tile_rect(&self, index: usize) -> Rect {
        let grid = self.grid();
        let column = index as u32 % self.columns;
        let row = index as u32 / self.columns;
        Rect::new(
            grid.x + column * self.tile_size,
            grid.y + row * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    fn grid_width(&self) -> u32 {
        self.tile_size * self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hd_screen_with_five_rows() {
        let geometry = ScreenGeometry::compute(1920, 1080, 5).unwrap();

        assert_eq!(geometry.tile_size, 216);
        assert_eq!(geometry.columns, 8);
        assert_eq!(geometry.tile_count(), 40);
        assert_eq!(geometry.side_margin, 96);

        assert_eq!(geometry.left_strip(), Rect::new(0, 0, 96, 1080));
        assert_eq!(geometry.grid(), Rect::new(96, 0, 1728, 1080));
        assert_eq!(geometry.right_strip(), Rect::new(1824, 0, 96, 1080));
    }

    #[test]
    fn margins_and_grid_span_the_width() {
        let screens = [
            (1920, 1080),
            (1366, 768),
            (2560, 1440),
            (1280, 1024),
            (3440, 1440),
            (801, 601),
            (100, 100),
        ];
        for rows in 1..=9 {
            for &(width, height) in &screens {
                let g = ScreenGeometry::compute(width, height, rows).unwrap();
                let used = 2 * g.side_margin + g.columns * g.tile_size;
                assert!(g.columns * g.tile_size <= width);
                assert!(used <= width && width - used <= 1, "{width}x{height}/{rows}");
                assert!(g.rows * g.tile_size <= height);
            }
        }
    }

    #[test]
    fn tiles_fill_rows_left_to_right() {
        let g = ScreenGeometry::compute(1920, 1080, 5).unwrap();

        assert_eq!(g.tile_rect(0), Rect::new(96, 0, 216, 216));
        assert_eq!(g.tile_rect(7), Rect::new(96 + 7 * 216, 0, 216, 216));
        assert_eq!(g.tile_rect(8), Rect::new(96, 216, 216, 216));
        assert_eq!(g.tile_rect(39), Rect::new(96 + 7 * 216, 4 * 216, 216, 216));
    }

    #[test]
    fn degenerate_screens_are_rejected() {
        assert_eq!(
            ScreenGeometry::compute(1920, 4, 5),
            Err(LayoutError::ZeroTileSize { height: 4, rows: 5 })
        );
        assert_eq!(
            ScreenGeometry::compute(1920, 1080, 0),
            Err(LayoutError::ZeroTileSize { height: 1080, rows: 0 })
        );
        assert_eq!(
            ScreenGeometry::compute(100, 1080, 5),
            Err(LayoutError::ZeroColumns { width: 100, tile_size: 216 })
        );
    }
}
