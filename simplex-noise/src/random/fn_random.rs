//! Closure-backed random source.

use super::Random;

/// Wraps a closure returning uniform values in `[0, 1)`.
///
/// The closure is called exactly once per draw and its value is used as-is,
/// so a caller-supplied stream is reproduced faithfully.
///
/// ```
/// use simplex_noise::noise::SimplexNoise2D;
/// use simplex_noise::random::FnRandom;
///
/// let mut state = 0.0_f64;
/// let mut source = FnRandom::new(move || {
///     state = (state + 0.618_033_988_749_895) % 1.0;
///     state
/// });
/// let noise = SimplexNoise2D::new(&mut source);
/// assert!(noise.get_value(1.5, 2.5).is_finite());
/// ```
pub struct FnRandom<F> {
    source: F,
}

impl<F: FnMut() -> f64> FnRandom<F> {
    /// Wraps `source`.
    pub const fn new(source: F) -> Self {
        Self { source }
    }
}

impl<F: FnMut() -> f64> Random for FnRandom<F> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.source)()
    }
}
