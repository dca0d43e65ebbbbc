//! Configuration error types.

use thiserror::Error;

/// Errors raised around parameter resolution.
///
/// Resolving parameters itself never fails; these cover reading env files,
/// parsing command-line arguments and rendering the result.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("failed to render parameters as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to render parameters as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("missing value for {0}")]
    MissingValue(String),
}
