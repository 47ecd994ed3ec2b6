//! Errors surfaced by the command-line front end

use numviz_math::MathError;
use thiserror::Error;

/// Anything that ends a command with exit status 1
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Rejected by the math core
    #[error(transparent)]
    Math(#[from] MathError),

    /// Terminal or export file failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure
    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result alias for CLI operations
pub(crate) type CliResult<T> = Result<T, CliError>;
