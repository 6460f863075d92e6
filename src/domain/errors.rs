//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or not made of capitalized words.
    InvalidName(String),

    /// The provided city is empty or not made of capitalized words.
    InvalidCity(String),

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid name: {:?}", name),
            Self::InvalidCity(city) => write!(f, "Invalid city: {:?}", city),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {:?}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
