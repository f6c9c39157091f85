//! Error types for clubmap.
//!
//! Each stage keeps its own error (`LoadError` for CSV loading, `RenderError`
//! for map building and output); this module ties them together with the
//! configuration errors into one crate-level type.

use thiserror::Error;

use crate::data::LoadError;
use crate::map::RenderError;

/// The main error type for clubmap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Loading or cleaning the club CSV failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The cleaned dataset has no rows left to draw.
    #[error("No rows found after loading/cleaning the CSV.")]
    EmptyDataset,

    /// Building or writing the map failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for clubmap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error means the input CSV was not found.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::Load(LoadError::MissingFile { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_dataset_message() {
        assert_eq!(
            Error::EmptyDataset.to_string(),
            "No rows found after loading/cleaning the CSV."
        );
    }

    #[test]
    fn test_load_error_is_transparent() {
        let err: Error = LoadError::MissingFile {
            path: PathBuf::from("data/raw/gaa_clubs.csv"),
        }
        .into();
        assert_eq!(err.to_string(), "Missing data file: data/raw/gaa_clubs.csv");
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_missing_columns_message() {
        let err: Error = LoadError::MissingColumns {
            missing: vec!["lat".to_string(), "lon".to_string()],
        }
        .into();
        assert_eq!(
            err.to_string(),
            "CSV missing required columns: [\"lat\", \"lon\"]"
        );
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_render_error_converts() {
        let err: Error = RenderError::NoClubs.into();
        assert!(matches!(err, Error::Render(RenderError::NoClubs)));
    }

    #[test]
    fn test_config_validation_message() {
        let err = Error::ConfigValidation {
            message: "tiles must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: tiles must not be empty"
        );
    }
}
