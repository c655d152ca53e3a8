use std::time::Duration;
use anyhow::Result;
use tracing::{debug, trace};
use crate::constants::{FADE_INTERVAL, TILE_SELECT_INTERVAL};
use crate::engine::TileCanvas;
use crate::fade::IndexSource;
use crate::fade::session::FadeSession;
use crate::image_bank::ImageBank;

/// Picks a random tile every [`TILE_SELECT_INTERVAL`] and cross-fades it into
/// another bank image, one tick every [`FADE_INTERVAL`].
///
/// Time only moves through [`FadeAnimator::advance`]. Every due event runs in
/// order of its due time, ties in the order they were scheduled, so several
/// sessions may be fading at once and each tick renders before the next one
/// is scheduled. Two sessions on the same tile are not merged: the most recent
/// tick wins.
pub struct FadeAnimator<S: IndexSource> {
    bank: ImageBank,
    indices: S,
    tile_images: Vec<usize>,
    sessions: Vec<FadeSession>,
    clock: Duration,
    next_selection: Duration,
    selection_seq: u64,
    next_seq: u64,
}

enum Event {
    Select,
    Tick(usize),
}

impl<S: IndexSource> FadeAnimator<S> {
    /// Tile `i` starts out showing bank entry `i`.
    pub fn new(bank: ImageBank, tile_count: usize, indices: S) -> Self {
        debug_assert!(bank.len() >= tile_count);
        Self {
            bank,
            indices,
            tile_images: (0..tile_count).collect(),
            sessions: Vec::new(),
            clock: Duration::ZERO,
            next_selection: TILE_SELECT_INTERVAL,
            selection_seq: 0,
            next_seq: 1,
        }
    }

    pub fn bank(&self) -> &ImageBank {
        &self.bank
    }

    pub fn tile_count(&self) -> usize {
        self.tile_images.len()
    }

    /// Bank index of the image `tile` shows, updated when a fade completes.
    pub fn image_index(&self, tile: usize) -> usize {
        self.tile_images[tile]
    }

    pub fn sessions(&self) -> &[FadeSession] {
        &self.sessions
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    /// Pushes every tile's initial image to `canvas`.
    pub fn render_initial(&self, canvas: &mut impl TileCanvas) -> Result<()> {
        debug_assert_eq!(canvas.tile_count(), self.tile_count());
        for (tile, &index) in self.tile_images.iter().enumerate() {
            if let Some(image) = self.bank.get(index) {
                canvas.set_tile_image(tile, image)?;
            }
        }
        Ok(())
    }

    /// Moves the clock forward by `dt`, running every selection and fade tick
    /// that falls due on the way.
    pub fn advance(&mut self, dt: Duration, canvas: &mut impl TileCanvas) -> Result<()> {
        let until = self.clock + dt;
        loop {
            let (due, event) = self.next_event();
            if due > until {
                break;
            }
            self.clock = due;
            match event {
                Event::Select => self.select(),
                Event::Tick(slot) => self.tick(slot, canvas)?,
            }
        }
        self.clock = until;
        Ok(())
    }

    fn next_event(&self) -> (Duration, Event) {
        let mut best = (self.next_selection, self.selection_seq, Event::Select);
        for (slot, session) in self.sessions.iter().enumerate() {
            if (session.due, session.seq) < (best.0, best.1) {
                best = (session.due, session.seq, Event::Tick(slot));
            }
        }
        (best.0, best.2)
    }

    fn schedule_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn select(&mut self) {
        let tile_count = self.tile_count();
        let tile = self.indices.next_index(tile_count);
        let target_index = self.indices.next_index(tile_count);

        // Both rasters are captured now; later bank reads never change a running fade
        if let (Some(source), Some(target)) = (self.bank.get(tile).cloned(), self.bank.get(target_index).cloned()) {
            let mut session = FadeSession::new(tile, target_index, source, target);
            session.due = self.clock + FADE_INTERVAL;
            session.seq = self.schedule_seq();
            debug!(tile, target_index, active = self.sessions.len() + 1, "starting fade");
            self.sessions.push(session);
        }

        self.next_selection = self.clock + TILE_SELECT_INTERVAL;
        self.selection_seq = self.schedule_seq();
    }

    fn tick(&mut self, slot: usize, canvas: &mut impl TileCanvas) -> Result<()> {
        let frame = self.sessions[slot].step();
        let session = &self.sessions[slot];
        trace!(tile = session.tile, opacity = session.opacity(), state = ?session.state(), "fade tick");
        canvas.set_tile_image(session.tile, &frame)?;

        if session.is_finished() {
            let session = self.sessions.remove(slot);
            self.tile_images[session.tile] = session.target_index;
            debug!(tile = session.tile, image = session.target_index, "fade finished");
        } else {
            let due = self.clock + FADE_INTERVAL;
            let seq = self.schedule_seq();
            let session = &mut self.sessions[slot];
            session.due = due;
            session.seq = seq;
        }
        Ok(())
    }
}
