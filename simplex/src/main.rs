//! Batch simplex noise sampler.
//!
//! Reads a JSON5 config (`simplex.json5`, or the path given as the first
//! argument), samples every configured point and writes the values as CSV or
//! JSON to stdout or a file.

mod config;
mod logging;
mod output;
mod sampler;

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, anyhow};
use config::{DEFAULT_CONFIG_PATH, SimplexConfig};
use sampler::Sampler;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    let config_path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let loaded = SimplexConfig::load(&config_path)?;
    let found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    logging::init(&config.logging).map_err(|e| anyhow!(e).context("Failed to set up logging"))?;
    if !found {
        log::warn!("No config at {}, using defaults", config_path.display());
    }

    let job = config.into_job().context("Invalid configuration")?;
    log::info!(
        "Sampling {} points in {}D with seed {}",
        job.points.len(),
        job.dimension.axes(),
        job.seed
    );

    let start = Instant::now();
    let sampler = Sampler::new(job.dimension, job.seed);
    log::debug!("Generator built in {:?}", start.elapsed());

    let start = Instant::now();
    let values = {
        let _span = tracing::info_span!("sample", points = job.points.len()).entered();
        sampler.sample_all(&job.points)?
    };
    log::info!("Sampled {} points in {:?}", values.len(), start.elapsed());

    match &job.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            output::write_samples(
                &mut BufWriter::new(file),
                job.format,
                job.dimension,
                &job.points,
                &values,
            )?;
            log::info!("Wrote samples to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            output::write_samples(
                &mut BufWriter::new(stdout.lock()),
                job.format,
                job.dimension,
                &job.points,
                &values,
            )?;
        }
    }

    Ok(())
}
