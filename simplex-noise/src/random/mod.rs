//! Uniform random sources consumed when building permutation tables.
//!
//! - [`Xoroshiro`] - Seedable xoroshiro128++ generator, used by `from_seed`
//! - [`FnRandom`] - Adapts any `FnMut() -> f64` closure into a [`Random`]

mod fn_random;
mod xoroshiro;

pub use fn_random::FnRandom;
pub use xoroshiro::Xoroshiro;

/// A source of uniformly distributed values in `[0, 1)`.
///
/// Noise generators draw from it only while shuffling their permutation table.
/// The quality of the resulting noise depends on the source being uniform; this
/// is not checked.
pub trait Random {
    /// Returns the next value, expected to be uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns `floor(next_f64() * bound)`, clamped into `0..bound`.
    ///
    /// Draws outside `[0, 1)` (including NaN) are clamped instead of producing
    /// an out-of-range index. `bound` must be non-zero.
    fn next_bounded(&mut self, bound: usize) -> usize {
        let scaled = (self.next_f64() * bound as f64).floor();
        // Float-to-int casts saturate, and NaN becomes 0.
        (scaled as usize).min(bound - 1)
    }
}

/// Returns a seed taken from the process-wide random generator.
///
/// Used when a generator is created without an explicit random source.
#[must_use]
pub fn system_seed() -> u64 {
    rand::random()
}
