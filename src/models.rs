use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TrackerError;

/// Workout kinds the tracker can read from a sensor package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Short code used by the sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in the workout summary
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of sensor values a package of this kind carries
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            _ => Err(TrackerError::unrecognized(s)),
        }
    }
}

/// Sensor readings of a running workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningArgs {
    /// Steps taken
    pub action: i64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

/// Sensor readings of a race walking workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingArgs {
    /// Steps taken
    pub action: i64,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Sensor readings of a pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingArgs {
    /// Strokes taken
    pub action: i64,
    pub duration_h: f64,
    pub weight_kg: f64,
    /// Pool length in meters
    pub length_pool_m: f64,
    /// Number of pool lengths swum
    pub count_pool: f64,
}

/// A typed sensor package, one variant per workout code
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutPackage {
    Running(RunningArgs),
    SportsWalking(WalkingArgs),
    Swimming(SwimmingArgs),
}

impl WorkoutPackage {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutPackage::Running(_) => WorkoutKind::Running,
            WorkoutPackage::SportsWalking(_) => WorkoutKind::SportsWalking,
            WorkoutPackage::Swimming(_) => WorkoutKind::Swimming,
        }
    }
}

/// Informational message about a completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Display name of the workout kind
    pub training_type: String,

    /// Duration in hours
    pub duration: f64,

    /// Distance covered in kilometers
    pub distance: f64,

    /// Mean speed in km/h
    pub speed: f64,

    /// Calories burned in kcal
    pub calories: f64,
}
