#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PackageError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("Workout type {code} expects {expected} values, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Package(#[from] PackageError),
    #[error("Failed to read packages: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
