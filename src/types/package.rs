use serde::{Deserialize, Serialize};

/// One raw sensor reading: a workout code plus its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
