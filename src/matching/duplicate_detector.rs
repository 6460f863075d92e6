//! Duplicate detection against the current contact list.

use crate::domain::Field;
use crate::models::Contact;
use std::fmt;
use std::str::FromStr;

/// Rule for deciding whether a candidate collides with existing contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Any existing contact sharing the name or the email is a collision.
    /// Reports the distinct colliding fields across the whole list.
    #[default]
    FieldLevel,

    /// Only a contact matching name, city, and email together is a collision.
    RecordLevel,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "field" | "field-level" => Ok(DuplicatePolicy::FieldLevel),
            "record" | "record-level" => Ok(DuplicatePolicy::RecordLevel),
            other => Err(format!("Must be 'field' or 'record', got: {}", other)),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::FieldLevel => f.write_str("field"),
            DuplicatePolicy::RecordLevel => f.write_str("record"),
        }
    }
}

/// Pure query over a list of contacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateDetector {
    policy: DuplicatePolicy,
}

impl DuplicateDetector {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Fields of `candidate` that collide with `existing`.
    ///
    /// An empty result means the candidate may be inserted. Under
    /// `FieldLevel` fields are listed in the order first seen while scanning
    /// the list; under `RecordLevel` the result is either empty or all three
    /// fields.
    pub fn find_collisions<'a, I>(&self, candidate: &Contact, existing: I) -> Vec<Field>
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        match self.policy {
            DuplicatePolicy::FieldLevel => {
                let mut fields: Vec<Field> = Vec::new();
                for contact in existing {
                    for field in contact.colliding_fields(candidate) {
                        if !fields.contains(&field) {
                            fields.push(field);
                        }
                    }
                    if fields.len() == 2 {
                        break;
                    }
                }
                fields
            }
            DuplicatePolicy::RecordLevel => {
                if existing.into_iter().any(|contact| contact == candidate) {
                    Field::ALL.to_vec()
                } else {
                    Vec::new()
                }
            }
        }
    }
}
