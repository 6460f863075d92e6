//! Transient status messages shown alongside the contact list.

pub mod transient_message;

pub use transient_message::{StatusSnapshot, TransientMessage};
