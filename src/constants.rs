use std::time::Duration;

pub const ROW_COUNT: u32 = 5;                                         // Rows of tiles on screen
pub const FPS: u32 = 60;                                              // Frames per second

pub const TILE_SELECT_INTERVAL: Duration = Duration::from_millis(2000); // Time between two tile selections
pub const FADE_INTERVAL: Duration = Duration::from_millis(100);        // Time between two fade ticks
pub const FADE_STEP: f32 = 0.1;                                       // Opacity added on every fade tick

pub const DEFAULT_IMAGE_DIR: &str = "images";                         // Used when no directory is given
