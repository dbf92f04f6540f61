use std::path::Path;

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::pipeline::read::read_package;
use crate::types::message::InfoMessage;
use crate::types::package::Package;
use crate::types::workout::WorkoutRecord;

pub fn load_packages(path: &Path) -> Result<Vec<Package>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let packages: Vec<Package> = serde_json::from_str(&raw)?;
    tracing::info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(info)?),
    }
}

pub fn summarize(package: &Package, format: OutputFormat) -> Result<String, AppError> {
    let record = read_package(&package.workout_type, &package.data)?;
    tracing::debug!("Read {} package: {:?}", package.workout_type, record);
    render(&record.show_training_info(), format)
}

/// Renders every package, skipping the ones that fail to read.
pub fn report(packages: &[Package], format: OutputFormat) -> Vec<String> {
    let lines: Vec<String> = packages
        .iter()
        .filter_map(|package| match summarize(package, format) {
            Ok(line) => Some(line),
            Err(err) => {
                tracing::warn!("Skipping {} package: {}", package.workout_type, err);
                None
            }
        })
        .collect();

    tracing::info!("Reported {} of {} packages", lines.len(), packages.len());
    lines
}
