use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!("unknown OUTPUT_FORMAT '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON file of packages; the built-in samples run when unset.
    pub packages_file: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|err| {
            tracing::warn!("{}; falling back to defaults", err);
            Self {
                packages_file: packages_file_from_env(),
                output_format: OutputFormat::Text,
            }
        })
    }

    pub fn try_from_env() -> Result<Self, AppError> {
        let output_format = std::env::var("OUTPUT_FORMAT")
            .ok()
            .map(|s| s.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            packages_file: packages_file_from_env(),
            output_format,
        })
    }
}

fn packages_file_from_env() -> Option<PathBuf> {
    std::env::var("WORKOUT_PACKAGES")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}
