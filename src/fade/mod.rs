pub mod animator;
pub mod composite;
pub mod session;

use rand::Rng;

pub use animator::FadeAnimator;

/// Source of uniformly drawn indices in `0..bound`.
pub trait IndexSource {
    fn next_index(&mut self, bound: usize) -> usize;
}

/// [`IndexSource`] backed by any `rand` generator.
pub struct RandomIndices<R>(pub R);

impl<R: Rng> IndexSource for RandomIndices<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}
