//! Domain value objects and types.
//!
//! Type-safe wrappers for the three contact fields. Each value object
//! validates at construction time so an invalid name, city, or email can
//! never be held by a [`Contact`](crate::models::Contact).

pub mod email;
pub mod errors;
pub mod field;
pub mod proper_name;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::{join_fields, Field};
pub use proper_name::{CityName, PersonName};
