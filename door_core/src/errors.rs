//! # Error Types
//!
//! Structured error types for door_core. Every failure a derivation can
//! produce is a variant here, so callers branch on data rather than on
//! message text.
//!
//! ## Example
//!
//! ```rust
//! use door_core::errors::{CalcError, CalcResult};
//!
//! fn require_width(width_in: f64) -> CalcResult<()> {
//!     if width_in == 0.0 {
//!         return Err(CalcError::missing_field("door_width_in"));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(require_width(0.0).unwrap_err().error_code(), "MISSING_FIELD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for door_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for installation calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required measurement or the door type was absent (or zero)
    #[error("Missing required input for calculation: {field}")]
    MissingField { field: String },

    /// Wall is too thick for any stocked frame board
    #[error("Wall thickness out of expected range: {value_in}\" exceeds {max_in}\"")]
    WallThicknessOutOfRange { value_in: f64, max_in: f64 },

    /// No catalog stock length is long enough for the requested cut
    #[error("No nominal stock length covers {required_in}\" (longest is {max_in}\")")]
    NominalLengthExhausted { required_in: f64, max_in: f64 },

    /// An input value could not be interpreted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a WallThicknessOutOfRange error
    pub fn wall_thickness_out_of_range(value_in: f64, max_in: f64) -> Self {
        CalcError::WallThicknessOutOfRange { value_in, max_in }
    }

    /// Create a NominalLengthExhausted error
    pub fn nominal_length_exhausted(required_in: f64, max_in: f64) -> Self {
        CalcError::NominalLengthExhausted {
            required_in,
            max_in,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::WallThicknessOutOfRange { .. } => "WALL_THICKNESS_OUT_OF_RANGE",
            CalcError::NominalLengthExhausted { .. } => "NOMINAL_LENGTH_EXHAUSTED",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::wall_thickness_out_of_range(7.5, 7.25);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("WallThicknessOutOfRange"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("door_type").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::nominal_length_exhausted(150.0, 144.0).error_code(),
            "NOMINAL_LENGTH_EXHAUSTED"
        );
        assert_eq!(
            CalcError::invalid_input("casing_width_in", "NaN", "must be a finite number")
                .error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_display_names_field() {
        let msg = CalcError::missing_field("rough_opening_width_in").to_string();
        assert!(msg.contains("rough_opening_width_in"));
    }

    #[test]
    fn test_from_json_error() {
        let err: CalcError = serde_json::from_str::<f64>("not a number").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
