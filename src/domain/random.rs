//! Injectable sources of (non-cryptographic) randomness.

use rand::Rng;
use std::sync::Arc;

/// Source of uniformly distributed integers.
pub trait RandomSource: Send + Sync + 'static {
    // ---
    /// Returns a value drawn uniformly from `[0, bound)`.
    ///
    /// A `bound` of zero yields zero.
    fn next_below(&self, bound: u64) -> u64;
}

/// Type alias for any shared random source.
pub type RandomPtr = Arc<dyn RandomSource>;

/// Random source backed by the thread-local generator from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Random source that always yields the same value, clamped to the bound.
///
/// Used to force a specific catalog index or sleep duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub u64);

impl RandomSource for FixedRandom {
    fn next_below(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.0.min(bound - 1)
    }
}
