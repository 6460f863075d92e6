//! Observability module for monitoring and metrics.
//!
//! This module provides counters for list activity and a timer that logs
//! operation durations through `tracing`.

pub mod metrics;

pub use metrics::{MetricsSnapshot, MetricsTracker, Timer};
