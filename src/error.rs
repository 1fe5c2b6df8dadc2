//! Domain-specific error types for career-roadmap

use thiserror::Error;

use crate::form::Field;

/// Message shown to the user when a generation is requested with empty input
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";

/// Main error type for the roadmap session
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// Generation was requested while at least one field is empty
    #[error("Please fill in all fields")]
    Validation { missing: Vec<Field> },

    #[error("Unknown form field: {name}")]
    UnknownField { name: String },

    #[error("Expected name=value, got: {input}")]
    MalformedAssignment { input: String },
}

impl RoadmapError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RoadmapError::Validation { .. })
    }
}

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, RoadmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_alert_text() {
        let err = RoadmapError::Validation {
            missing: vec![Field::Experience],
        };
        assert_eq!(err.to_string(), VALIDATION_MESSAGE);
        assert!(err.is_validation());
    }

    #[test]
    fn unknown_field_names_the_input() {
        let err = RoadmapError::UnknownField {
            name: "salary".into(),
        };
        assert_eq!(err.to_string(), "Unknown form field: salary");
        assert!(!err.is_validation());
    }
}
