//! Per-axis gradient lookup derived from a permutation table.

use std::array;

use super::permutation::{PERMUTATION_SIZE, PermutationTable};

/// Gradient components resolved for every permutation entry.
///
/// Entry `i` holds `gradients[p[i] % gradients.len()]`, split into one array
/// per axis so evaluation reads each component with a single indexed load and
/// no modulo.
#[derive(Debug, Clone)]
pub struct GradientCache<const N: usize> {
    /// Boxed because the 4D cache is 16 KiB.
    axes: Box<[[f64; PERMUTATION_SIZE]; N]>,
}

impl<const N: usize> GradientCache<N> {
    /// Resolves `gradients` through `permutation`.
    ///
    /// # Panics
    ///
    /// Panics if `gradients` is empty.
    #[must_use]
    pub fn new(permutation: &PermutationTable, gradients: &[[i32; N]]) -> Self {
        assert!(!gradients.is_empty(), "gradient set must not be empty");

        let mut axes = Box::new([[0.0; PERMUTATION_SIZE]; N]);
        for index in 0..PERMUTATION_SIZE {
            let gradient = &gradients[permutation.get(index) % gradients.len()];
            for (axis, &component) in axes.iter_mut().zip(gradient) {
                axis[index] = f64::from(component);
            }
        }

        Self { axes }
    }

    /// Returns the gradient cached for the lattice hash `index` (`0..512`).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> [f64; N] {
        array::from_fn(|axis| self.axes[axis][index])
    }
}
