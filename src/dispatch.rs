//! Sensor package dispatch
//!
//! A raw package is a workout code plus a flat list of numbers. The code is
//! resolved first, then the values are checked against the arity of that
//! workout kind and moved into its typed argument struct.

use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{RunningArgs, SwimmingArgs, WalkingArgs, WorkoutKind, WorkoutPackage};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::Training;
use crate::walking::SportsWalking;

impl WorkoutPackage {
    /// Build a typed package from a workout code and its sensor values
    pub fn from_raw(code: &str, data: &[f64]) -> Result<Self> {
        let kind: WorkoutKind = code.parse()?;

        if data.len() != kind.arity() {
            return Err(TrackerError::ArgumentCount {
                code: code.to_string(),
                expected: kind.arity(),
                actual: data.len(),
            });
        }

        let action = action_count(kind, data[0])?;
        let package = match kind {
            WorkoutKind::Running => WorkoutPackage::Running(RunningArgs {
                action,
                duration_h: data[1],
                weight_kg: data[2],
            }),
            WorkoutKind::SportsWalking => WorkoutPackage::SportsWalking(WalkingArgs {
                action,
                duration_h: data[1],
                weight_kg: data[2],
                height_cm: data[3],
            }),
            WorkoutKind::Swimming => WorkoutPackage::Swimming(SwimmingArgs {
                action,
                duration_h: data[1],
                weight_kg: data[2],
                length_pool_m: data[3],
                count_pool: data[4],
            }),
        };

        Ok(package)
    }

    /// Construct the workout this package describes
    pub fn into_training(self) -> Box<dyn Training> {
        match self {
            WorkoutPackage::Running(args) => Box::new(Running::from(args)),
            WorkoutPackage::SportsWalking(args) => Box::new(SportsWalking::from(args)),
            WorkoutPackage::Swimming(args) => Box::new(Swimming::from(args)),
        }
    }
}

/// Read a raw sensor package into a workout
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let package = WorkoutPackage::from_raw(code, data)?;
    debug!(code, values = data.len(), "Sensor package read");
    Ok(package.into_training())
}

/// Sensor step and stroke counts are whole numbers; sign and size are not checked.
fn action_count(kind: WorkoutKind, value: f64) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(TrackerError::InvalidArgument {
            code: kind.code().to_string(),
            field: "action".to_string(),
            value,
        });
    }
    Ok(value as i64)
}
