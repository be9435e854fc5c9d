//! Four-dimensional simplex noise over a pentatope grid.
//!
//! The corner walk is derived from the rank of each axis in the local offset
//! rather than a lookup table: an axis that beats more of the others is
//! stepped along earlier.

use std::array;

use crate::math::floor;
use crate::noise::gradient_cache::GradientCache;
use crate::noise::permutation::PermutationTable;
use crate::noise::{GRADIENT_4D, corner_noise};
use crate::random::{Random, Xoroshiro, system_seed};

#[allow(clippy::unreadable_literal)]
const SQRT_5: f64 = 2.23606797749979;
/// Skewing factor for 4D simplex: `(sqrt(5) - 1) / 4`
const F4: f64 = (SQRT_5 - 1.0) / 4.0;
/// Unskewing factor for 4D simplex: `(5 - sqrt(5)) / 20`
const G4: f64 = (5.0 - SQRT_5) / 20.0;
const RADIUS_SQ: f64 = 0.6;
const SCALE: f64 = 27.0;

/// 4D simplex noise generator.
#[derive(Debug, Clone)]
pub struct SimplexNoise4D {
    permutation: PermutationTable,
    gradients: GradientCache<4>,
}

impl SimplexNoise4D {
    /// Create a new generator, shuffling its permutation table with `random`.
    pub fn new<R: Random + ?Sized>(random: &mut R) -> Self {
        let permutation = PermutationTable::new(random);
        let gradients = GradientCache::new(&permutation, &GRADIENT_4D);
        tracing::debug!(
            head = ?&permutation.as_bytes()[..4],
            "built 4D simplex permutation table"
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

    /// Sample 4D simplex noise at the given coordinates.
    ///
    /// Returns a value typically in the range `[-1, 1]` (scaled by 27).
    #[must_use]
    pub fn get_value(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [n0, n1, n2, n3, n4] = self.corner_contributions([x, y, z, w]);
        SCALE * (n0 + n1 + n2 + n3 + n4)
    }

    #[inline]
    fn corner_contributions(&self, point: [f64; 4]) -> [f64; 5] {
        let s = point.iter().sum::<f64>() * F4;
        let cell = point.map(|c| floor(c + s));
        let t = cell.iter().map(|&c| f64::from(c)).sum::<f64>() * G4;
        let origin: [f64; 4] = array::from_fn(|axis| point[axis] - (f64::from(cell[axis]) - t));

        let ranks = axis_ranks(origin);
        let steps = [
            [0; 4],
            corner_step(ranks, 3),
            corner_step(ranks, 2),
            corner_step(ranks, 1),
            [1; 4],
        ];

        let [ii, jj, kk, ll] = cell.map(|c| (c & 0xFF) as usize);
        let p = &self.permutation;

        let mut contributions = [0.0; 5];
        for (corner, (&step, out)) in steps.iter().zip(&mut contributions).enumerate() {
            let unskew = corner as f64 * G4;
            let offset: [f64; 4] =
                array::from_fn(|axis| origin[axis] - f64::from(step[axis]) + unskew);
            let [a, b, c, d] = step.map(usize::from);
            let gi = ii + a + p.get(jj + b + p.get(kk + c + p.get(ll + d)));
            *out = corner_noise(RADIUS_SQ, offset, self.gradients.get(gi));
        }
        contributions
    }
}

impl Default for SimplexNoise4D {
    /// Seeds from the process random generator.
    fn default() -> Self {
        Self::from_seed(system_seed())
    }
}

/// Counts, for every axis, how many of the other axes it strictly exceeds.
///
/// Pairs are compared in the order `(x,y) (x,z) (x,w) (y,z) (y,w) (z,w)`; on a
/// tie the later axis of the pair takes the point.
#[inline]
fn axis_ranks(offset: [f64; 4]) -> [u8; 4] {
    let mut ranks = [0u8; 4];
    for a in 0..4 {
        for b in a + 1..4 {
            if offset[a] > offset[b] {
                ranks[a] += 1;
            } else {
                ranks[b] += 1;
            }
        }
    }
    ranks
}

/// Lattice step of the corner visited after `4 - threshold` moves: every axis
/// ranked at least `threshold` has been stepped along.
#[inline]
fn corner_step(ranks: [u8; 4], threshold: u8) -> [u8; 4] {
    ranks.map(|rank| u8::from(rank >= threshold))
}
