//! Package processing loop
//!
//! Reads each sensor package in order and writes one summary line per
//! package. The first failing package stops the run.

use std::io::Write;
use tracing::{info, instrument, warn};

use crate::config::PackageEntry;
use crate::dispatch::read_package;
use crate::error::Result;
use crate::export::{write_summary, OutputFormat};
use crate::models::InfoMessage;

/// Compute the summary of a single raw package
pub fn summarize(code: &str, data: &[f64]) -> Result<InfoMessage> {
    let training = read_package(code, data)?;
    training.show_training_info()
}

/// Process packages in order, writing one line per package.
///
/// Returns the number of summaries written.
#[instrument(skip_all, fields(packages = packages.len()))]
pub fn process_packages<W: Write>(
    packages: &[PackageEntry],
    writer: &mut W,
    format: OutputFormat,
) -> Result<usize> {
    for (index, package) in packages.iter().enumerate() {
        let info = summarize(&package.code, &package.data).map_err(|e| {
            warn!(index, code = %package.code, error = %e, "Package rejected");
            e
        })?;

        info!(
            index,
            training_type = %info.training_type,
            distance_km = info.distance,
            calories = info.calories,
            "Workout summarized"
        );

        write_summary(writer, &info, format)?;
    }

    writer.flush()?;
    Ok(packages.len())
}
