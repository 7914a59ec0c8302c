//! Pool swimming workout
//!
//! Strokes are longer than steps, and the mean speed comes from the pool
//! length and lap count rather than from the stroke count.

use crate::error::Result;
use crate::models::{SwimmingArgs, WorkoutKind};
use crate::training::{Training, TrainingReadings, M_IN_KM};

/// Distance covered by one stroke, in meters
pub const LEN_STROKE: f64 = 1.38;
pub const APPROACH_MAX_SPEED: f64 = 1.1;
pub const ACTUAL_EFFECT_SWIM_WEIGHT: f64 = 2.0;

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    readings: TrainingReadings,
    /// Pool length in meters
    pub length_pool_m: f64,
    /// Number of pool lengths swum
    pub count_pool: f64,
}

impl Swimming {
    pub fn new(
        action: i64,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            readings: TrainingReadings::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
        }
    }
}

impl From<SwimmingArgs> for Swimming {
    fn from(args: SwimmingArgs) -> Self {
        Swimming::new(
            args.action,
            args.duration_h,
            args.weight_kg,
            args.length_pool_m,
            args.count_pool,
        )
    }
}

impl Training for Swimming {
    fn readings(&self) -> &TrainingReadings {
        &self.readings
    }

    fn training_type(&self) -> &'static str {
        WorkoutKind::Swimming.display_name()
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool_m * self.count_pool / M_IN_KM / self.readings.duration_h
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed() + APPROACH_MAX_SPEED)
            * ACTUAL_EFFECT_SWIM_WEIGHT
            * self.readings.weight_kg)
    }
}
