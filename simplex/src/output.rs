//! Writers for sampled values.

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::config::{Dimension, OutputFormat};

/// Coordinate column names, in axis order.
const AXIS_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// An error that can occur while writing samples.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The destination rejected a write.
    #[error("Failed to write samples: {0}")]
    Io(#[from] io::Error),
    /// Samples could not be encoded as JSON.
    #[error("Failed to encode samples as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Sample<'a> {
    point: &'a [f64],
    value: f64,
}

/// Writes `points` and their `values` to `out` in `format`.
///
/// `points` and `values` are paired up by index.
pub fn write_samples<W: Write>(
    out: &mut W,
    format: OutputFormat,
    dimension: Dimension,
    points: &[Vec<f64>],
    values: &[f64],
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Csv => write_csv(out, dimension, points, values)?,
        OutputFormat::Json => {
            let rows: Vec<Sample<'_>> = points
                .iter()
                .zip(values)
                .map(|(point, &value)| Sample { point, value })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_csv<W: Write>(
    out: &mut W,
    dimension: Dimension,
    points: &[Vec<f64>],
    values: &[f64],
) -> io::Result<()> {
    for name in &AXIS_NAMES[..dimension.axes()] {
        write!(out, "{name},")?;
    }
    writeln!(out, "value")?;

    for (point, value) in points.iter().zip(values) {
        for coordinate in point {
            write!(out, "{coordinate},")?;
        }
        writeln!(out, "{value}")?;
    }
    Ok(())
}
