//! Seedable simplex noise in two, three and four dimensions.
//!
//! A generator is built once from a uniform random source, which is consumed to
//! shuffle its permutation table. After construction every generator is
//! immutable, so a shared reference can be sampled from any number of threads.
//!
//! ```
//! use simplex_noise::noise::SimplexNoise2D;
//!
//! let noise = SimplexNoise2D::from_seed(42);
//! let value = noise.get_value(0.37, 0.81);
//! assert!(value.abs() <= 1.0);
//! ```

pub mod math;
pub mod noise;
pub mod random;

pub use noise::{
    SimplexNoise2D, SimplexNoise3D, SimplexNoise4D, create_noise_2d, create_noise_3d,
    create_noise_4d,
};
pub use random::Random;
