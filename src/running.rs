//! Running workout
//!
//! Calories grow linearly with mean speed, scaled by weight and time.

use crate::error::Result;
use crate::models::{RunningArgs, WorkoutKind};
use crate::training::{Training, TrainingReadings, MIN_IN_HR, M_IN_KM};

/// Calories per km/h of mean speed
pub const SPEED_MAIN_CALORIE_COEFFICIENT: f64 = 18.0;
/// Offset subtracted from the speed term
pub const SPEED_MEAN_CALORIE_DEDUCTED: f64 = 20.0;

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    readings: TrainingReadings,
}

impl Running {
    pub fn new(action: i64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            readings: TrainingReadings::new(action, duration_h, weight_kg),
        }
    }
}

impl From<RunningArgs> for Running {
    fn from(args: RunningArgs) -> Self {
        Running::new(args.action, args.duration_h, args.weight_kg)
    }
}

impl Training for Running {
    fn readings(&self) -> &TrainingReadings {
        &self.readings
    }

    fn training_type(&self) -> &'static str {
        WorkoutKind::Running.display_name()
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((SPEED_MAIN_CALORIE_COEFFICIENT * self.mean_speed() - SPEED_MEAN_CALORIE_DEDUCTED)
            * self.readings.weight_kg
            / M_IN_KM
            * self.readings.duration_h
            * MIN_IN_HR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_metrics() {
        let run = Running::new(15000, 1.0, 75.0);
        assert!((run.distance() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed() - 9.75).abs() < 1e-9);
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!((run.spent_calories().unwrap() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_running_half_hour() {
        let run = Running::new(6000, 0.5, 60.0);
        // 3.9 km in half an hour
        assert!((run.mean_speed() - 7.8).abs() < 1e-9);
        let expected = (18.0 * 7.8 - 20.0) * 60.0 / 1000.0 * 0.5 * 60.0;
        assert!((run.spent_calories().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_slow_running_can_go_negative() {
        // Below 20/18 km/h the formula yields a negative value; it is reported as is.
        let run = Running::new(100, 1.0, 70.0);
        assert!(run.spent_calories().unwrap() < 0.0);
    }

    #[test]
    fn test_summary() {
        let info = Running::new(15000, 1.0, 75.0).show_training_info().unwrap();
        assert_eq!(info.training_type, "Running");
        assert_eq!(info.duration, 1.0);
    }
}
