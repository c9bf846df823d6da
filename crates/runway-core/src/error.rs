//! Error types for the Runway engine.
//!
//! Both variants are local validation failures raised before any metric is
//! computed. Zero-division in the engine is not an error and never shows up
//! here.

use thiserror::Error;

use crate::types::InputField;

/// A specialized Result type for Runway operations.
pub type RunwayResult<T> = Result<T, RunwayError>;

/// The main error type for Runway operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunwayError {
    /// A scenario name outside the closed preset set was requested.
    #[error("Invalid scenario: '{name}' (expected one of: Base, Best Case, Worst Case)")]
    InvalidScenario {
        /// The name that failed to resolve.
        name: String,
    },

    /// An input field is outside its declared domain, or could not be parsed.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Field that failed validation, as its snake_case key.
        field: String,
        /// Description of the violated constraint.
        reason: String,
    },
}

impl RunwayError {
    /// Creates an invalid scenario error.
    #[must_use]
    pub fn invalid_scenario(name: impl Into<String>) -> Self {
        Self::InvalidScenario { name: name.into() }
    }

    /// Creates an invalid input error for a known field.
    #[must_use]
    pub fn invalid_input(field: InputField, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.key().to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error for a field key that does not exist.
    #[must_use]
    pub fn unknown_field(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::InvalidInput {
            reason: format!(
                "unknown field (expected one of: {})",
                InputField::ALL.map(InputField::key).join(", ")
            ),
            field: key,
        }
    }

    /// Returns true if this is an `InvalidScenario` error.
    pub fn is_invalid_scenario(&self) -> bool {
        matches!(self, Self::InvalidScenario { .. })
    }

    /// Returns true if this is an `InvalidInput` error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RunwayError::invalid_scenario("Apocalypse");
        assert!(err.to_string().contains("Invalid scenario"));
        assert!(err.to_string().contains("Apocalypse"));
        assert!(err.is_invalid_scenario());
    }

    #[test]
    fn test_invalid_input_uses_field_key() {
        let err = RunwayError::invalid_input(InputField::GrossMargin, "must be within [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid input for gross_margin: must be within [0, 1]"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_unknown_field_lists_keys() {
        let err = RunwayError::unknown_field("churn");
        let msg = err.to_string();
        assert!(msg.contains("churn"));
        assert!(msg.contains("new_customers"));
    }
}
