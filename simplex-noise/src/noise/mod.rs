//! Simplex noise generators.
//!
//! - [`SimplexNoise2D`] - Triangle grid, three corners per sample
//! - [`SimplexNoise3D`] - Tetrahedral grid, four corners per sample
//! - [`SimplexNoise4D`] - Pentatope grid, five corners per sample
//!
//! Every generator owns a [`PermutationTable`] and a [`GradientCache`] derived
//! from it. Both are built in the constructor and never change afterwards.

mod gradient_cache;
mod permutation;
mod simplex_2d;
mod simplex_3d;
mod simplex_4d;

pub use gradient_cache::GradientCache;
pub use permutation::{PERMUTATION_SIZE, PermutationTable};
pub use simplex_2d::SimplexNoise2D;
pub use simplex_3d::SimplexNoise3D;
pub use simplex_4d::SimplexNoise4D;

use crate::random::Random;

/// Gradient vectors for 2D noise: the four diagonals followed by the axes.
pub const GRADIENT_2D: [[i32; 2]; 12] = [
    [1, 1],
    [-1, 1],
    [1, -1],
    [-1, -1],
    [1, 0],
    [-1, 0],
    [1, 0],
    [-1, 0],
    [0, 1],
    [0, -1],
    [0, 1],
    [0, -1],
];

/// Gradient vectors for 3D noise.
///
/// Mostly cube-edge midpoints, but the set is not symmetric: index 7 is a
/// single axis, index 8 is a cube corner, and two directions appear twice.
/// Changing any entry changes every 3D value.
pub const GRADIENT_3D: [[i32; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [-1, 0, -1],
    [0, -1, 0],
    [1, 1, 1],
    [0, 1, 1],
    [-1, 0, 1],
    [-1, 1, 0],
];

/// Gradient vectors for 4D noise: every sign combination with exactly one zero
/// coordinate, grouped by the position of the zero.
pub const GRADIENT_4D: [[i32; 4]; 32] = [
    [0, 1, 1, 1],
    [0, 1, 1, -1],
    [0, 1, -1, 1],
    [0, 1, -1, -1],
    [0, -1, 1, 1],
    [0, -1, 1, -1],
    [0, -1, -1, 1],
    [0, -1, -1, -1],
    [1, 0, 1, 1],
    [1, 0, 1, -1],
    [1, 0, -1, 1],
    [1, 0, -1, -1],
    [-1, 0, 1, 1],
    [-1, 0, 1, -1],
    [-1, 0, -1, 1],
    [-1, 0, -1, -1],
    [1, 1, 0, 1],
    [1, 1, 0, -1],
    [1, -1, 0, 1],
    [1, -1, 0, -1],
    [-1, 1, 0, 1],
    [-1, 1, 0, -1],
    [-1, -1, 0, 1],
    [-1, -1, 0, -1],
    [1, 1, 1, 0],
    [1, 1, -1, 0],
    [1, -1, 1, 0],
    [1, -1, -1, 0],
    [-1, 1, 1, 0],
    [-1, 1, -1, 0],
    [-1, -1, 1, 0],
    [-1, -1, -1, 0],
];

/// Contribution of one simplex corner.
///
/// `radius_sq` is the squared falloff radius; corners farther away than that
/// contribute nothing. Otherwise the result is `t^4 * (gradient . offset)` with
/// `t = radius_sq - |offset|^2`. A NaN offset propagates to the result.
#[inline]
fn corner_noise<const N: usize>(radius_sq: f64, offset: [f64; N], gradient: [f64; N]) -> f64 {
    let mut t = radius_sq;
    for component in offset {
        t -= component * component;
    }
    if t < 0.0 {
        return 0.0;
    }

    let mut dot = 0.0;
    for (g, d) in gradient.iter().zip(offset) {
        dot += g * d;
    }
    let t = t * t;
    t * t * dot
}

/// Creates a 2D generator, shuffling its permutation table with `random`.
pub fn create_noise_2d<R: Random + ?Sized>(random: &mut R) -> SimplexNoise2D {
    SimplexNoise2D::new(random)
}

/// Creates a 3D generator, shuffling its permutation table with `random`.
pub fn create_noise_3d<R: Random + ?Sized>(random: &mut R) -> SimplexNoise3D {
    SimplexNoise3D::new(random)
}

/// Creates a 4D generator, shuffling its permutation table with `random`.
pub fn create_noise_4d<R: Random + ?Sized>(random: &mut R) -> SimplexNoise4D {
    SimplexNoise4D::new(random)
}
