//! Race walking workout

use crate::error::Result;
use crate::models::{WalkingArgs, WorkoutKind};
use crate::training::{Training, TrainingReadings, MIN_IN_HR};

pub const LESS_IMPACT_WEIGHT_CALORIE: f64 = 0.035;
pub const MAIN_INFLUENCE_WEIGHT_CALORIE: f64 = 0.029;
pub const EXPONENT: i32 = 2;

/// Race walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    readings: TrainingReadings,
    /// Athlete height in centimeters
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: i64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            readings: TrainingReadings::new(action, duration_h, weight_kg),
            height_cm,
        }
    }
}

impl From<WalkingArgs> for SportsWalking {
    fn from(args: WalkingArgs) -> Self {
        SportsWalking::new(args.action, args.duration_h, args.weight_kg, args.height_cm)
    }
}

impl Training for SportsWalking {
    fn readings(&self) -> &TrainingReadings {
        &self.readings
    }

    fn training_type(&self) -> &'static str {
        WorkoutKind::SportsWalking.display_name()
    }

    fn spent_calories(&self) -> Result<f64> {
        let weight = self.readings.weight_kg;
        // Speed term is floored before weighting.
        let speed_term = (self.mean_speed().powi(EXPONENT) / self.height_cm).floor();

        Ok((LESS_IMPACT_WEIGHT_CALORIE * weight
            + speed_term * MAIN_INFLUENCE_WEIGHT_CALORIE * weight)
            * self.readings.duration_h
            * MIN_IN_HR)
    }
}
