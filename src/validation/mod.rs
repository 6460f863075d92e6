//! Input validation for comma-separated contact entries.

pub mod input_validator;

pub use input_validator::{
    ContactInput, InputValidator, ValidationRules, DEFAULT_CITY_MIN_LENGTH,
    DEFAULT_NAME_MIN_LENGTH, EMAIL_MIN_LENGTH,
};
