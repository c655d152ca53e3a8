use std::rc::Rc;
use std::time::Duration;
use image::RgbaImage;
use crate::constants::FADE_STEP;
use crate::fade::composite::cross_fade;
use crate::state::FadeState;

/// One running transition of a single tile from `source` to `target`.
pub struct FadeSession {
    pub tile: usize,
    pub target_index: usize,
    source: Rc<RgbaImage>,
    target: Rc<RgbaImage>,
    ticks: u32,
    opacity: f32,
    state: FadeState,
    // Scheduler bookkeeping
    pub(crate) due: Duration,
    pub(crate) seq: u64,
}

impl FadeSession {
    pub fn new(tile: usize, target_index: usize, source: Rc<RgbaImage>, target: Rc<RgbaImage>) -> Self {
        Self {
            tile,
            target_index,
            source,
            target,
            ticks: 0,
            opacity: 0.0,
            state: FadeState::Fading,
            due: Duration::ZERO,
            seq: 0,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == FadeState::Idle
    }

    /// Advances one tick and returns the frame to show on the tile.
    ///
    /// The tick that reaches full opacity still renders, then the session goes idle.
    pub fn step(&mut self) -> RgbaImage {
        if self.state == FadeState::Fading {
            self.ticks += 1;
            self.opacity = self.ticks as f32 * FADE_STEP;
            if self.opacity >= 1.0 {
                self.opacity = 1.0;
                self.state = FadeState::Idle;
            }
        }
        cross_fade(&self.source, &self.target, self.opacity)
    }
}
