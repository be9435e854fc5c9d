//! Two-dimensional simplex noise over a triangular grid.

use crate::math::floor;
use crate::noise::gradient_cache::GradientCache;
use crate::noise::permutation::PermutationTable;
use crate::noise::{GRADIENT_2D, corner_noise};
use crate::random::{Random, Xoroshiro, system_seed};

#[allow(clippy::unreadable_literal)]
const SQRT_3: f64 = 1.7320508075688772;
/// Skewing factor for 2D simplex: `0.5 * (sqrt(3) - 1)`
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: f64 = (3.0 - SQRT_3) / 6.0;
/// Squared falloff radius of a corner.
const RADIUS_SQ: f64 = 0.5;
/// Keeps the peak magnitude close to 1.
const SCALE: f64 = 70.0;

/// 2D simplex noise generator.
///
/// Immutable after construction; evaluation never allocates and can run from
/// many threads at once.
#[derive(Debug, Clone)]
pub struct SimplexNoise2D {
    permutation: PermutationTable,
    gradients: GradientCache<2>,
}

impl SimplexNoise2D {
    /// Create a new generator, shuffling its permutation table with `random`.
    pub fn new<R: Random + ?Sized>(random: &mut R) -> Self {
        let permutation = PermutationTable::new(random);
        let gradients = GradientCache::new(&permutation, &GRADIENT_2D);
        tracing::debug!(
            head = ?&permutation.as_bytes()[..4],
            "built 2D simplex permutation table"
        );
        Self {
            permutation,
            gradients,
        }
    }

    /// Create a generator seeded with a [`Xoroshiro`] stream.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut Xoroshiro::from_seed(seed))
    }

    /// The permutation table this generator hashes lattice points with.
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    /// Sample 2D simplex noise at the given coordinates.
    ///
    /// Returns a value nominally in `[-1, 1]`; rare inputs can land slightly
    /// outside. NaN coordinates give NaN.
    #[must_use]
    pub fn get_value(&self, x: f64, y: f64) -> f64 {
        let [n0, n1, n2] = self.corner_contributions(x, y);
        SCALE * (n0 + n1 + n2)
    }

    /// Unscaled contribution of each simplex corner, origin corner first.
    #[inline]
    fn corner_contributions(&self, xin: f64, yin: f64) -> [f64; 3] {
        let s = (xin + yin) * F2;
        let i = floor(xin + s);
        let j = floor(yin + s);
        let t = (f64::from(i) + f64::from(j)) * G2;
        let x0 = xin - (f64::from(i) - t);
        let y0 = yin - (f64::from(j) - t);

        // Lower triangle walks +x first; ties take the upper triangle
        let (i1, j1) = triangle_corner(x0, y0);

        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 0xFF) as usize;
        let jj = (j & 0xFF) as usize;
        let (i1, j1) = (usize::from(i1), usize::from(j1));
        let p = &self.permutation;
        let gi0 = ii + p.get(jj);
        let gi1 = ii + i1 + p.get(jj + j1);
        let gi2 = ii + 1 + p.get(jj + 1);

        [
            corner_noise(RADIUS_SQ, [x0, y0], self.gradients.get(gi0)),
            corner_noise(RADIUS_SQ, [x1, y1], self.gradients.get(gi1)),
            corner_noise(RADIUS_SQ, [x2, y2], self.gradients.get(gi2)),
        ]
    }
}

impl Default for SimplexNoise2D {
    /// Seeds from the process random generator.
    fn default() -> Self {
        Self::from_seed(system_seed())
    }
}

/// Offset of the middle corner of the triangle containing `(x0, y0)`.
#[inline]
fn triangle_corner(x0: f64, y0: f64) -> (u8, u8) {
    if x0 > y0 { (1, 0) } else { (0, 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FnRandom;

    #[test]
    fn test_simplex_2d_deterministic() {
        let noise1 = SimplexNoise2D::from_seed(42);
        let noise2 = SimplexNoise2D::from_seed(42);

        for i in 0..10 {
            let x = f64::from(i) * 13.7;
            let y = f64::from(i) * 7.3;
            #[allow(clippy::float_cmp)]
            // Determinism test: identical inputs must produce identical outputs
            {
                assert_eq!(noise1.get_value(x, y), noise2.get_value(x, y));
                assert_eq!(noise1.get_value(x, y), noise1.get_value(x, y));
            }
        }
    }

    #[test]
    fn test_simplex_2d_known_values() {
        let noise = SimplexNoise2D::from_seed(42);
        let cases = [
            ((0.37, 0.81), 0.356_020_203_157_081_77),
            ((12.5, -7.25), 0.228_003_910_259_943_32),
            ((-103.7, 55.1), -0.267_000_429_401_506_15),
        ];
        for ((x, y), expected) in cases {
            let actual = noise.get_value(x, y);
            assert!(
                (actual - expected).abs() < 1e-12,
                "({x}, {y}): expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn test_simplex_2d_tie_takes_upper_triangle() {
        assert_eq!(triangle_corner(0.3, 0.3), (0, 1));
        assert_eq!(triangle_corner(0.31, 0.3), (1, 0));
        assert_eq!(triangle_corner(0.3, 0.31), (0, 1));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_simplex_2d_lattice_vertex() {
        let noise = SimplexNoise2D::from_seed(42);

        // Zero offset from the origin corner: the gradient dot product vanishes
        let [n0, n1, n2] = noise.corner_contributions(0.0, 0.0);
        assert_eq!(n0, 0.0);
        // The other two corners sit at squared distance 2/3, beyond the radius
        assert_eq!(n1, 0.0);
        assert_eq!(n2, 0.0);
        assert_eq!(noise.get_value(0.0, 0.0), 0.0);

        // Away from a vertex the origin corner carries signal
        let [n0, _, _] = noise.corner_contributions(3.0, -2.0);
        assert!(n0.abs() > 1e-6);
    }

    #[test]
    fn test_simplex_2d_not_periodic_on_lattice() {
        let noise = SimplexNoise2D::from_seed(42);
        let origin = noise.get_value(0.0, 0.0);
        let diagonal = noise.get_value(1.0, 1.0);
        assert!(
            (origin - diagonal).abs() > 1e-6,
            "noise(0,0) = {origin}, noise(1,1) = {diagonal}"
        );
    }

    #[test]
    fn test_simplex_2d_spatial_variation() {
        let noise = SimplexNoise2D::from_seed(0);

        let values: Vec<f64> = (0..20)
            .map(|i| noise.get_value(f64::from(i) * 50.0, f64::from(i) * 30.0))
            .collect();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.01, "2D simplex should have spatial variation");
    }

    #[test]
    fn test_simplex_2d_closure_source() {
        // A constant source is degenerate but must still build a usable generator
        let noise = SimplexNoise2D::new(&mut FnRandom::new(|| 0.5));
        assert!(noise.get_value(4.2, -1.3).is_finite());
    }

    #[test]
    fn test_simplex_2d_nan_propagates() {
        let noise = SimplexNoise2D::from_seed(1);
        assert!(noise.get_value(f64::NAN, 0.5).is_nan());
    }
}
