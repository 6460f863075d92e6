//! Parsing and validation of raw `name, city, email` input.

use crate::domain::proper_name::CAPITALIZED_WORDS;
use crate::domain::{Field, ValidationError};
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Address shape accepted from user input, checked after lowercasing.
///
/// Every match also satisfies [`crate::domain::EmailAddress`]: local-part
/// dots only separate non-empty segments.
static INPUT_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9_-]+(\.[a-z0-9_-]+)*@[a-z_-]+?\.[a-z]{2,3}$")
        .expect("Failed to compile email regex")
});

/// Default minimum name length, in characters.
pub const DEFAULT_NAME_MIN_LENGTH: usize = 2;

/// Default minimum city length, in characters.
pub const DEFAULT_CITY_MIN_LENGTH: usize = 3;

/// Minimum email length, in characters.
pub const EMAIL_MIN_LENGTH: usize = 3;

/// Length limits applied on top of the field patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub name_min_length: usize,
    pub city_min_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            city_min_length: DEFAULT_CITY_MIN_LENGTH,
        }
    }
}

/// A candidate contact that passed input validation.
///
/// `email` is always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInput {
    pub name: String,
    pub city: String,
    pub email: String,
}

impl ContactInput {
    /// Build the entity. Entity rules are checked again here.
    pub fn into_contact(self) -> Result<Contact, ValidationError> {
        Contact::new(self.name, self.city, self.email)
    }
}

/// Turns one line of comma-separated input into a [`ContactInput`].
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    rules: ValidationRules,
}

impl InputValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Validate raw input.
    ///
    /// Fields are checked in order (name, city, email) and the first failure
    /// is returned.
    ///
    /// # Errors
    ///
    /// - `ContactError::MissingFields` when the input does not split into
    ///   exactly three fields
    /// - `ContactError::Format` when a field breaks its pattern or length rule
    pub fn validate(&self, raw: &str) -> ContactResult<ContactInput> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();

        if parts.len() != Field::ALL.len() {
            let missing = Field::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| parts.get(*i).map_or(true, |p| p.is_empty()))
                .map(|(_, field)| *field)
                .collect();

            return Err(ContactError::MissingFields {
                found: parts.len(),
                missing,
            });
        }

        let name = self.validate_name(parts[0])?;
        let city = self.validate_city(parts[1])?;
        let email = validate_email(parts[2])?;

        Ok(ContactInput { name, city, email })
    }

    fn validate_name(&self, name: &str) -> ContactResult<String> {
        if name.chars().count() < self.rules.name_min_length || !CAPITALIZED_WORDS.is_match(name) {
            return Err(ContactError::Format {
                field: Field::Name,
                message: format!(
                    "Each name must start with a capital letter, contain only letters and spaces, and be at least {} characters long.",
                    self.rules.name_min_length
                ),
            });
        }
        Ok(name.to_string())
    }

    fn validate_city(&self, city: &str) -> ContactResult<String> {
        if city.chars().count() < self.rules.city_min_length || !CAPITALIZED_WORDS.is_match(city) {
            return Err(ContactError::Format {
                field: Field::City,
                message: format!(
                    "Each city name must start with a capital letter, contain only letters and spaces, and be at least {} characters long.",
                    self.rules.city_min_length
                ),
            });
        }
        Ok(city.to_string())
    }
}

/// Lowercase an email and check it against the input pattern.
fn validate_email(email: &str) -> ContactResult<String> {
    let email = email.to_lowercase();
    if email.chars().count() < EMAIL_MIN_LENGTH || !INPUT_EMAIL_REGEX.is_match(&email) {
        return Err(ContactError::Format {
            field: Field::Email,
            message: format!(
                "Please enter a valid email such as name@example.com, at least {} characters long.",
                EMAIL_MIN_LENGTH
            ),
        });
    }
    Ok(email)
}
