//! Error types for the FitTrack domain core

use thiserror::Error;

/// Input rejected before any calculation runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Unrecognized {field}: '{value}'")]
    Unrecognized { field: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Unrecognized { field, .. } => Some(field),
            ValidationError::Invalid(_) => None,
        }
    }
}
