//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading or running a fixture.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The fixture is not valid TOML or does not have the fixture shape.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Error reading a fixture or expected-failures file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A `render` template referenced a field it could not interpolate.
    #[error("template `{template}`: {message}")]
    Template { template: String, message: String },

    /// The fixture is well-formed TOML but cannot be evaluated.
    #[error("invalid fixture: {message}")]
    Fixture { message: String },
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;

impl From<toml::de::Error> for SpecError {
    fn from(error: toml::de::Error) -> Self {
        SpecError::Parse {
            message: error.to_string(),
        }
    }
}
