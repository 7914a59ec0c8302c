use crate::models::InfoMessage;

impl InfoMessage {
    /// Human-readable one-line summary, every number with three decimals
    pub fn get_message(&self) -> String {
        format!(
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
