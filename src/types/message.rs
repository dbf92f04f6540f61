use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
