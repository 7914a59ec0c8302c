//! Base workout abstraction
//!
//! [`Training`] is implemented by every workout kind. It provides the shared
//! distance and speed formulas and assembles the [`InfoMessage`]; each kind
//! supplies its own calorie formula and may override the step length or the
//! speed calculation.

use crate::error::{Result, TrackerError};
use crate::models::InfoMessage;

/// Default distance covered by one step, in meters
pub const LEN_STEP: f64 = 0.65;
/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_HR: f64 = 60.0;

/// Readings every workout carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingReadings {
    /// Steps or strokes counted by the sensor
    pub action: i64,
    /// Duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl TrainingReadings {
    pub fn new(action: i64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

/// Metrics a workout can compute from its readings
pub trait Training: std::fmt::Debug {
    /// Shared readings of this workout
    fn readings(&self) -> &TrainingReadings;

    /// Name used in the workout summary
    fn training_type(&self) -> &'static str;

    /// Distance covered by one step or stroke, in meters
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        self.readings().action as f64 * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.readings().duration_h
    }

    /// Calories burned in kcal
    fn spent_calories(&self) -> Result<f64> {
        Err(TrackerError::not_implemented(
            self.training_type(),
            "spent_calories",
        ))
    }

    /// Summary of the completed workout
    fn show_training_info(&self) -> Result<InfoMessage> {
        Ok(InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.readings().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories()?,
        })
    }
}

/// The bare readings record has no calorie formula of its own.
impl Training for TrainingReadings {
    fn readings(&self) -> &TrainingReadings {
        self
    }

    fn training_type(&self) -> &'static str {
        "Training"
    }
}
