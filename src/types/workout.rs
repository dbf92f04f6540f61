use std::fmt;
use std::str::FromStr;

use crate::error::PackageError;
use crate::types::message::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;
pub const LEN_STEP: f64 = 0.65;

/// Metrics shared by every workout kind.
///
/// `spent_calories` has no generic formula, so each kind supplies its own.
pub trait WorkoutRecord: fmt::Debug + Send + Sync {
    fn kind(&self) -> WorkoutKind;
    fn action(&self) -> f64;
    fn duration(&self) -> f64;
    fn weight(&self) -> f64;

    /// Distance covered per unit of `action`, in meters.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        self.action() * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().label().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    Walking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = PackageError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| PackageError::UnknownWorkoutType(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl WorkoutRecord for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
    height_m: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    /// `height_cm` is converted to meters here; the record never holds centimeters.
    pub fn new(action: f64, duration: f64, weight: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height_m: height_cm / Self::CM_IN_M,
        }
    }

    pub fn height(&self) -> f64 {
        self.height_m
    }
}

impl WorkoutRecord for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed() * Self::KMH_IN_MSEC;
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_ms.powi(2) / self.height_m * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * self.duration
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
    pub length_pool: f64,
    pub count_pool: u32,
}

impl Swimming {
    const LEN_STROKE: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_SPEED_MULTIPLIER: f64 = 2.0;

    pub fn new(action: f64, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

impl WorkoutRecord for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn step_length(&self) -> f64 {
        Self::LEN_STROKE
    }

    // Pool laps, not strokes.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_SPEED_MULTIPLIER
            * self.weight
            * self.duration
    }
}
