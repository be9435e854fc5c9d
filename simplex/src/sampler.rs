//! Dimension-erased access to the simplex generators.

use rayon::prelude::*;
use simplex_noise::{SimplexNoise2D, SimplexNoise3D, SimplexNoise4D};
use thiserror::Error;

use crate::config::Dimension;

/// An error that can occur while sampling a batch of points.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// A point has the wrong number of coordinates for the generator.
    #[error("Point has {found} coordinates, generator expects {expected}")]
    Arity {
        /// Coordinates the generator takes.
        expected: usize,
        /// Coordinates the point has.
        found: usize,
    },
}

/// One generator of any supported dimension.
#[derive(Debug, Clone)]
pub enum Sampler {
    /// 2D generator.
    Two(SimplexNoise2D),
    /// 3D generator.
    Three(SimplexNoise3D),
    /// 4D generator.
    Four(SimplexNoise4D),
}

impl Sampler {
    /// Builds the generator for `dimension` from `seed`.
    #[must_use]
    pub fn new(dimension: Dimension, seed: u64) -> Self {
        match dimension {
            Dimension::Two => Self::Two(SimplexNoise2D::from_seed(seed)),
            Dimension::Three => Self::Three(SimplexNoise3D::from_seed(seed)),
            Dimension::Four => Self::Four(SimplexNoise4D::from_seed(seed)),
        }
    }

    /// Dimension of the wrapped generator.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Two(_) => Dimension::Two,
            Self::Three(_) => Dimension::Three,
            Self::Four(_) => Dimension::Four,
        }
    }

    /// Samples one point.
    pub fn sample(&self, point: &[f64]) -> Result<f64, SampleError> {
        match (self, point) {
            (Self::Two(noise), &[x, y]) => Ok(noise.get_value(x, y)),
            (Self::Three(noise), &[x, y, z]) => Ok(noise.get_value(x, y, z)),
            (Self::Four(noise), &[x, y, z, w]) => Ok(noise.get_value(x, y, z, w)),
            _ => Err(SampleError::Arity {
                expected: self.dimension().axes(),
                found: point.len(),
            }),
        }
    }

    /// Samples every point in parallel, keeping input order.
    pub fn sample_all(&self, points: &[Vec<f64>]) -> Result<Vec<f64>, SampleError> {
        points.par_iter().map(|point| self.sample(point)).collect()
    }
}
