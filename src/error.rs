//! Error types for the argument coercer's outer surfaces
//!
//! Coercion itself is total and never produces an [`Error`]; these variants
//! cover configuration loading and reading schema/argument documents.

use std::io;

use thiserror::Error;

/// Result type alias for mcp-arg-coerce
pub type Result<T> = std::result::Result<T, Error>;

/// mcp-arg-coerce errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input document could not be interpreted
    #[error("Invalid input: {0}")]
    Input(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Process exit code for this error when surfaced by the CLI
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            _ => 1,
        }
    }
}
