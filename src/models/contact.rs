//! Contact model: one validated entry on the list.

use crate::domain::{CityName, EmailAddress, Field, PersonName, ValidationError};
use serde::Serialize;
use std::fmt;

/// A contact holding a validated name, city, and email.
///
/// Contacts are immutable once built. The `with_*` methods re-validate and
/// return a new contact instead of changing this one.
///
/// # Equality
///
/// Two contacts are equal when name, city, and email all match
/// case-insensitively. Use [`Contact::colliding_fields`] to ask which single
/// fields overlap.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    name: PersonName,
    city: CityName,
    email: EmailAddress,
}

impl Contact {
    /// Build a contact, validating every field.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first field (name, city, email)
    /// that fails its entity rule.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PersonName::new(name)?,
            city: CityName::new(city)?,
            email: EmailAddress::new(email)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Return a copy with a different name.
    pub fn with_name(&self, name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PersonName::new(name)?,
            ..self.clone()
        })
    }

    /// Return a copy with a different city.
    pub fn with_city(&self, city: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            city: CityName::new(city)?,
            ..self.clone()
        })
    }

    /// Return a copy with a different email.
    pub fn with_email(&self, email: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            ..self.clone()
        })
    }

    /// Fields of `other` that match this contact, ignoring case.
    ///
    /// Only name and email take part; many contacts share a city.
    pub fn colliding_fields(&self, other: &Contact) -> Vec<Field> {
        let mut fields = Vec::new();
        if self.name().eq_ignore_ascii_case(other.name()) {
            fields.push(Field::Name);
        }
        if self.email().eq_ignore_ascii_case(other.email()) {
            fields.push(Field::Email);
        }
        fields
    }

    /// The contact as display lines, one per field.
    pub fn display_lines(&self) -> [String; 3] {
        [
            format!("Name: {}", self.name),
            format!("City: {}", self.city),
            format!("Email: {}", self.email),
        ]
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.name().eq_ignore_ascii_case(other.name())
            && self.city().eq_ignore_ascii_case(other.city())
            && self.email().eq_ignore_ascii_case(other.email())
    }
}

impl Eq for Contact {}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, City: {}, Email: {}",
            self.name, self.city, self.email
        )
    }
}
