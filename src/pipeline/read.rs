use crate::error::PackageError;
use crate::types::workout::{Running, SportsWalking, Swimming, WorkoutKind, WorkoutRecord};

pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn WorkoutRecord>, PackageError> {
    let kind: WorkoutKind = code.parse()?;

    let record: Box<dyn WorkoutRecord> = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Box::new(Running::new(action, duration, weight))
        }
        (WorkoutKind::Walking, &[action, duration, weight, height]) => {
            Box::new(SportsWalking::new(action, duration, weight, height))
        }
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            let count_pool = whole_count("count_pool", count_pool)?;
            Box::new(Swimming::new(action, duration, weight, length_pool, count_pool))
        }
        _ => {
            return Err(PackageError::ArityMismatch {
                code: kind.code(),
                expected: kind.arity(),
                got: data.len(),
            })
        }
    };

    Ok(record)
}

fn whole_count(field: &'static str, value: f64) -> Result<u32, PackageError> {
    if value.is_finite() && value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(PackageError::InvalidField { field, value })
    }
}
