//! Data models for the contact list.
//!
//! A [`Contact`] is built from domain value objects and never changes after
//! construction.

pub mod contact;

pub use contact::Contact;
