//! Index sources for the random-move opponent.
//!
//! The engine never calls an RNG directly. It asks an [`IndexSource`] for
//! an index into the list of empty squares, so tests can script the AI.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Supplies indices in `0..bound`.
pub trait IndexSource {
    /// Returns an index in `0..bound`. Callers guarantee `bound > 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Uniform index source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct RngIndexSource {
    inner: ChaCha8Rng,
}

impl RngIndexSource {
    /// Seeds from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic source; same seed, same choices.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RngIndexSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl IndexSource for RngIndexSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Replays a fixed list of indices, then returns 0.
///
/// Out-of-range values are clamped to `bound - 1`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIndexSource {
    script: VecDeque<usize>,
}

impl ScriptedIndexSource {
    /// Creates a source that yields `script` in order.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Indices not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl IndexSource for ScriptedIndexSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let next = self.script.pop_front().unwrap_or(0);
        next.min(bound.saturating_sub(1))
    }
}
