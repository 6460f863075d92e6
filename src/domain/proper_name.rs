//! PersonName and CityName value objects.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// One or more whitespace-separated words, each an uppercase letter followed by lowercase letters.
pub(crate) static CAPITALIZED_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z]*(\s[A-Z][a-z]*)*$").expect("Failed to compile capitalized words regex")
});

fn is_capitalized_words(value: &str) -> bool {
    !value.trim().is_empty() && CAPITALIZED_WORDS.is_match(value)
}

/// A person's name such as `"Jane Doe"`.
///
/// # Example
///
/// ```
/// use contact_list_mcp::domain::PersonName;
///
/// let name = PersonName::new("Jane Doe").unwrap();
/// assert_eq!(name.as_str(), "Jane Doe");
/// assert!(PersonName::new("jane doe").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the value is blank or any
    /// word is not capitalized.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !is_capitalized_words(&name) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A city name such as `"San Antonio"`. Same word rules as [`PersonName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityName(String);

impl CityName {
    /// Create a new CityName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCity` if the value is blank or any
    /// word is not capitalized.
    pub fn new(city: impl Into<String>) -> Result<Self, ValidationError> {
        let city = city.into();
        if !is_capitalized_words(&city) {
            return Err(ValidationError::InvalidCity(city));
        }
        Ok(Self(city))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl Serialize for CityName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
