//! Contact field identifiers.

use serde::Serialize;
use std::fmt;

/// One of the three fields a contact is made of, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    City,
    Email,
}

impl Field {
    /// All fields in the order they appear in comma-separated input.
    pub const ALL: [Field; 3] = [Field::Name, Field::City, Field::Email];

    /// Label shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::City => "City",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Join field labels with ", " for user-facing messages.
pub fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}
