//! Configuration for the batch sampler, read from a JSON5 file.
//!
//! Every field has a default, so an empty file (or no file at all) samples a
//! small 2D lattice around the origin with a random seed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use simplex_noise::random::system_seed;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "simplex.json5";

/// Upper bound on the number of points a lattice may expand to.
pub const MAX_LATTICE_POINTS: usize = 1_000_000;

/// An error that can occur while loading or validating the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The config file is not valid JSON5 for [`SimplexConfig`].
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json5::Error,
    },
    /// The requested dimension has no generator.
    #[error("Unsupported dimension {0}, expected 2, 3 or 4")]
    InvalidDimension(u8),
    /// A query point has the wrong number of coordinates.
    #[error("Point {index} has {found} coordinates, expected {expected}")]
    PointArity {
        /// Position of the point in `points`.
        index: usize,
        /// Coordinates required by the dimension.
        expected: usize,
        /// Coordinates actually given.
        found: usize,
    },
    /// A query point contains NaN or an infinity.
    #[error("Point {index} has a non-finite coordinate")]
    NonFinite {
        /// Position of the point in `points`.
        index: usize,
    },
    /// The lattice origin has the wrong number of coordinates.
    #[error("Lattice origin has {found} coordinates, expected {expected}")]
    OriginArity {
        /// Coordinates required by the dimension.
        expected: usize,
        /// Coordinates actually given.
        found: usize,
    },
    /// The lattice has zero points per axis or a non-finite step or origin.
    #[error("Lattice needs a positive count and a finite origin and step")]
    EmptyLattice,
    /// The lattice would expand to more points than allowed.
    #[error("Lattice expands to {points} points, limit is {limit}")]
    LatticeTooLarge {
        /// Number of points requested, saturated at `usize::MAX`.
        points: usize,
        /// [`MAX_LATTICE_POINTS`].
        limit: usize,
    },
}

/// How sampled values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma separated, one header row then one row per point.
    #[default]
    Csv,
    /// A JSON array of `{ "point": [..], "value": .. }` objects.
    Json,
}

/// Logging options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Install a subscriber at all.
    pub enabled: bool,
    /// Print thread names.
    pub threads: bool,
    /// Use ANSI colors.
    pub color: bool,
    /// Prefix lines with a timestamp.
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threads: false,
            color: true,
            timestamp: true,
        }
    }
}

/// A regular grid of query points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    /// First point of the grid. Empty means the origin.
    pub origin: Vec<f64>,
    /// Spacing along every axis.
    pub step: f64,
    /// Number of points along every axis.
    pub count: usize,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            origin: Vec::new(),
            step: 0.1,
            count: 16,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplexConfig {
    /// Seed for the permutation table.
    ///
    /// Empty picks a random seed, an integer is used as-is and any other
    /// string is hashed.
    pub seed: String,
    /// Number of coordinates per point: 2, 3 or 4.
    pub dimension: u8,
    /// Explicit query points, sampled before the lattice.
    pub points: Vec<Vec<f64>>,
    /// Optional regular grid of query points.
    pub lattice: Option<LatticeConfig>,
    /// Output encoding.
    pub format: OutputFormat,
    /// Output file. Standard output when absent.
    pub output: Option<PathBuf>,
    /// Logging options.
    pub logging: LoggingConfig,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            dimension: 2,
            points: Vec::new(),
            lattice: Some(LatticeConfig::default()),
            format: OutputFormat::default(),
            output: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Number of noise dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// `(x, y)`
    Two,
    /// `(x, y, z)`
    Three,
    /// `(x, y, z, w)`
    Four,
}

impl Dimension {
    /// Number of coordinates in a point.
    #[must_use]
    pub const fn axes(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for Dimension {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(ConfigError::InvalidDimension(other)),
        }
    }
}

/// A validated configuration, ready to sample.
#[derive(Debug, Clone)]
pub struct SamplingJob {
    /// Number of noise dimensions.
    pub dimension: Dimension,
    /// Resolved seed.
    pub seed: u64,
    /// Explicit points followed by the expanded lattice.
    pub points: Vec<Vec<f64>>,
    /// Output encoding.
    pub format: OutputFormat,
    /// Output file. Standard output when absent.
    pub output: Option<PathBuf>,
}

impl SimplexConfig {
    /// Reads the config at `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist, so callers can fall back
    /// to defaults.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json5::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Validates the config and expands the lattice.
    pub fn into_job(self) -> Result<SamplingJob, ConfigError> {
        let dimension = Dimension::try_from(self.dimension)?;
        let axes = dimension.axes();

        for (index, point) in self.points.iter().enumerate() {
            if point.len() != axes {
                return Err(ConfigError::PointArity {
                    index,
                    expected: axes,
                    found: point.len(),
                });
            }
            if !point.iter().all(|c| c.is_finite()) {
                return Err(ConfigError::NonFinite { index });
            }
        }

        let mut points = self.points;
        if let Some(lattice) = &self.lattice {
            points.extend(lattice.expand(axes)?);
        }

        Ok(SamplingJob {
            dimension,
            seed: resolve_seed(&self.seed),
            points,
            format: self.format,
            output: self.output,
        })
    }
}

impl LatticeConfig {
    /// Expands the grid into `count^axes` points, last axis varying fastest.
    pub fn expand(&self, axes: usize) -> Result<Vec<Vec<f64>>, ConfigError> {
        let origin = if self.origin.is_empty() {
            vec![0.0; axes]
        } else if self.origin.len() == axes {
            self.origin.clone()
        } else {
            return Err(ConfigError::OriginArity {
                expected: axes,
                found: self.origin.len(),
            });
        };

        if self.count == 0 || !self.step.is_finite() || !origin.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::EmptyLattice);
        }

        let total = u32::try_from(axes)
            .ok()
            .and_then(|exp| self.count.checked_pow(exp))
            .unwrap_or(usize::MAX);
        if total > MAX_LATTICE_POINTS {
            return Err(ConfigError::LatticeTooLarge {
                points: total,
                limit: MAX_LATTICE_POINTS,
            });
        }

        let points = (0..total)
            .map(|index| {
                let mut point = origin.clone();
                let mut rest = index;
                for coordinate in point.iter_mut().rev() {
                    *coordinate += self.step * (rest % self.count) as f64;
                    rest /= self.count;
                }
                point
            })
            .collect();
        Ok(points)
    }
}

/// Turns the configured seed string into a numeric seed.
///
/// Empty picks a random seed. Integers in the `u64` or `i64` range are taken
/// as-is (negative values wrap), anything else goes through a Java-style
/// string hash.
#[must_use]
pub fn resolve_seed(seed: &str) -> u64 {
    if seed.is_empty() {
        return system_seed();
    }
    if let Ok(seed) = seed.parse::<u64>() {
        return seed;
    }
    let seed: i64 = seed.parse().unwrap_or_else(|_| {
        let mut hash: i64 = 0;
        for byte in seed.bytes() {
            hash = hash.wrapping_mul(31).wrapping_add(i64::from(byte));
        }
        hash
    });
    seed as u64
}
