//! Collision checks between a candidate contact and the list.

pub mod duplicate_detector;

pub use duplicate_detector::{DuplicateDetector, DuplicatePolicy};
