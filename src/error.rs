//! Error types for the contact list.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{join_fields, Field, ValidationError};
use thiserror::Error;

/// Errors that can occur when submitting or validating a contact.
///
/// Every variant except `Invalid` is a user-input problem and is reported
/// back as a message, leaving the list untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Input did not split into exactly three comma-separated fields
    #[error("{}", missing_fields_message(.found, .missing))]
    MissingFields { found: usize, missing: Vec<Field> },

    /// A field failed its pattern or length rule
    #[error("{message}")]
    Format { field: Field, message: String },

    /// Candidate collides with contacts already on the list
    #[error(
        "One or more fields already exist in other contacts on the list. The duplicate field(s) is/are: {}.",
        join_fields(.fields)
    )]
    Duplicate { fields: Vec<Field> },

    /// An entity rule rejected a value the input validator accepted
    #[error("Contact rejected: {0}")]
    Invalid(#[from] ValidationError),
}

impl ContactError {
    /// Whether this error came from user input rather than a broken invariant.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ContactError::Invalid(_))
    }

    /// The field this error is about, if it concerns exactly one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ContactError::Format { field, .. } => Some(*field),
            ContactError::Invalid(ValidationError::InvalidName(_)) => Some(Field::Name),
            ContactError::Invalid(ValidationError::InvalidCity(_)) => Some(Field::City),
            ContactError::Invalid(ValidationError::InvalidEmail(_)) => Some(Field::Email),
            _ => None,
        }
    }
}

fn missing_fields_message(found: &usize, missing: &[Field]) -> String {
    if missing.is_empty() {
        format!(
            "Please enter exactly three fields separated by commas (Name, City, Email); found {}",
            found
        )
    } else {
        format!(
            "Please enter the following fields separated by commas: {}",
            join_fields(missing)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::MissingFields {
            found: 1,
            missing: vec![Field::City, Field::Email],
        };
        assert_eq!(
            err.to_string(),
            "Please enter the following fields separated by commas: City, Email"
        );

        let err = ContactError::Duplicate {
            fields: vec![Field::Name, Field::Email],
        };
        assert_eq!(
            err.to_string(),
            "One or more fields already exist in other contacts on the list. The duplicate field(s) is/are: Name, Email."
        );

        let err = ConfigError::InvalidValue {
            var: "NAME_MIN_LENGTH".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for NAME_MIN_LENGTH: Must be a positive number"
        );
    }

    #[test]
    fn test_too_many_fields_message() {
        let err = ContactError::MissingFields {
            found: 4,
            missing: Vec::new(),
        };
        assert!(err.to_string().contains("found 4"));
    }

    #[test]
    fn test_user_error_classification() {
        let err = ContactError::Format {
            field: Field::Email,
            message: "bad".to_string(),
        };
        assert!(err.is_user_error());
        assert_eq!(err.field(), Some(Field::Email));

        let err: ContactError = ValidationError::InvalidCity("x".to_string()).into();
        assert!(!err.is_user_error());
        assert_eq!(err.field(), Some(Field::City));
    }
}
