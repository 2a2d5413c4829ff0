//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::RecordKey;

/// Which non-emptiness check an intent failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationIssue {
    /// Add intent with an empty student id or name
    BothFieldsRequired,
    /// Update intent with an empty name
    NameRequired,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BothFieldsRequired => f.write_str("both fields required"),
            Self::NameRequired => f.write_str("name required"),
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum RosterError {
    /// User input failed a non-emptiness check
    #[error("Validation error: {0}")]
    ValidationError(ValidationIssue),

    /// Update attempted while nothing is selected
    #[error("No record selected")]
    NoSelection,

    /// Row index outside the store
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Key no longer present in the store
    #[error("Record not found: {0}")]
    RecordNotFound(RecordKey),
}

impl RosterError {
    /// Whether it is expected behavior (user input) rather than an internal fault.
    ///
    /// Level `warn` is used for both, but internal faults are never shown to the user.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) | Self::NoSelection => true,
            Self::IndexOutOfRange { .. } | Self::RecordNotFound(_) => false,
        }
    }

    /// Text handed to [`ListBinding::show_message`](crate::ListBinding::show_message).
    ///
    /// `None` for internal faults, which are treated as silent no-ops.
    #[must_use]
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::ValidationError(ValidationIssue::BothFieldsRequired) => {
                Some("Please enter both student ID and name")
            }
            Self::ValidationError(ValidationIssue::NameRequired) => Some("Please enter a name"),
            Self::NoSelection => Some("Please select a student to update"),
            Self::IndexOutOfRange { .. } | Self::RecordNotFound(_) => None,
        }
    }
}

/// Core layer Result type alias
pub type RosterResult<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = RosterError::ValidationError(ValidationIssue::BothFieldsRequired);
        assert_eq!(err.to_string(), "Validation error: both fields required");

        let err = RosterError::ValidationError(ValidationIssue::NameRequired);
        assert_eq!(err.to_string(), "Validation error: name required");
    }

    #[test]
    fn test_expected_classification() {
        assert!(RosterError::NoSelection.is_expected());
        assert!(RosterError::ValidationError(ValidationIssue::NameRequired).is_expected());
        assert!(!RosterError::IndexOutOfRange { index: 3, len: 1 }.is_expected());
        assert!(!RosterError::RecordNotFound(RecordKey::new(7)).is_expected());
    }

    #[test]
    fn test_internal_faults_have_no_user_message() {
        assert!(RosterError::IndexOutOfRange { index: 0, len: 0 }
            .user_message()
            .is_none());
        assert_eq!(
            RosterError::NoSelection.user_message(),
            Some("Please select a student to update")
        );
    }
}
