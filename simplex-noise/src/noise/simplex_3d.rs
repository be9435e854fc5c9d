//! Three-dimensional simplex noise over a tetrahedral grid.

use crate::math::floor;
use crate::noise::gradient_cache::GradientCache;
use crate::noise::permutation::PermutationTable;
use crate::noise::{GRADIENT_3D, corner_noise};
use crate::random::{Random, Xoroshiro, system_seed};

/// Skewing factor for 3D simplex: `1/3`
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: f64 = 1.0 / 6.0;
const RADIUS_SQ: f64 = 0.6;
const SCALE: f64 = 32.0;

/// Lattice step of one simplex corner relative to the cell origin.
type Step = [u8; 3];

/// 3D simplex noise generator.
#[derive(Debug, Clone)]
pub struct SimplexNoise3D {
    permutation: PermutationTable,
    gradients: GradientCache<3>,
}

impl SimplexNoise3D {
    /// Create a new generator, shuffling its permutation table with `random`.
    pub fn new<R: Random + ?Sized>(random: &mut R) -> Self {
        let permutation = PermutationTable::new(random);
        let gradients = GradientCache::new(&permutation, &GRADIENT_3D);
        tracing::debug!(
            head = ?&permutation.as_bytes()[..4],
            "built 3D simplex permutation table"
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

    /// Sample 3D simplex noise at the given coordinates.
    ///
    /// Returns a value typically in the range `[-1, 1]` (scaled by 32).
    #[must_use]
    pub fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let [n0, n1, n2, n3] = self.corner_contributions(x, y, z);
        SCALE * (n0 + n1 + n2 + n3)
    }

    #[inline]
    #[allow(clippy::many_single_char_names)]
    fn corner_contributions(&self, xin: f64, yin: f64, zin: f64) -> [f64; 4] {
        let s = (xin + yin + zin) * F3;
        let i = floor(xin + s);
        let j = floor(yin + s);
        let k = floor(zin + s);
        let t = (f64::from(i) + f64::from(j) + f64::from(k)) * G3;
        let x0 = xin - (f64::from(i) - t);
        let y0 = yin - (f64::from(j) - t);
        let z0 = zin - (f64::from(k) - t);

        let (first, second) = tetrahedron_steps(x0, y0, z0);

        let offset = |step: Step, unskew: f64| {
            [
                x0 - f64::from(step[0]) + unskew,
                y0 - f64::from(step[1]) + unskew,
                z0 - f64::from(step[2]) + unskew,
            ]
        };

        let ii = (i & 0xFF) as usize;
        let jj = (j & 0xFF) as usize;
        let kk = (k & 0xFF) as usize;
        let hash = |step: Step| {
            let [a, b, c] = step.map(usize::from);
            let p = &self.permutation;
            ii + a + p.get(jj + b + p.get(kk + c))
        };

        let last = [1, 1, 1];
        [
            corner_noise(
                RADIUS_SQ,
                [x0, y0, z0],
                self.gradients.get(hash([0, 0, 0])),
            ),
            corner_noise(RADIUS_SQ, offset(first, G3), self.gradients.get(hash(first))),
            corner_noise(
                RADIUS_SQ,
                offset(second, 2.0 * G3),
                self.gradients.get(hash(second)),
            ),
            corner_noise(
                RADIUS_SQ,
                offset(last, 3.0 * G3),
                self.gradients.get(hash(last)),
            ),
        ]
    }
}

impl Default for SimplexNoise3D {
    /// Seeds from the process random generator.
    fn default() -> Self {
        Self::from_seed(system_seed())
    }
}

/// Steps to the second and third corner of the tetrahedron containing the
/// local offset. Ties fall through to the branch their comparison selects.
#[inline]
fn tetrahedron_steps(x0: f64, y0: f64, z0: f64) -> (Step, Step) {
    if x0 >= y0 {
        if y0 >= z0 {
            ([1, 0, 0], [1, 1, 0])
        } else if x0 >= z0 {
            ([1, 0, 0], [1, 0, 1])
        } else {
            ([0, 0, 1], [1, 0, 1])
        }
    } else if y0 < z0 {
        ([0, 0, 1], [0, 1, 1])
    } else if x0 < z0 {
        ([0, 1, 0], [0, 1, 1])
    } else {
        ([0, 1, 0], [1, 1, 0])
    }
}
