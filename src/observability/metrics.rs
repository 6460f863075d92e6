//! Contact list metrics.
//!
//! Counters for what happened to submissions and removals, logged through
//! `tracing` as they change.

use crate::domain::Field;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for the contact list.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    contacts_added_total: Arc<AtomicU64>,
    validation_rejections_total: Arc<AtomicU64>,
    duplicate_rejections_total: Arc<AtomicU64>,
    contacts_removed_total: Arc<AtomicU64>,
    removal_misses_total: Arc<AtomicU64>,
}

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub contacts_added_total: u64,
    pub validation_rejections_total: u64,
    pub duplicate_rejections_total: u64,
    pub contacts_removed_total: u64,
    pub removal_misses_total: u64,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            validation_rejections_total: Arc::new(AtomicU64::new(0)),
            duplicate_rejections_total: Arc::new(AtomicU64::new(0)),
            contacts_removed_total: Arc::new(AtomicU64::new(0)),
            removal_misses_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track an accepted submission.
    pub fn track_added(&self, list_len: usize) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(list_len = list_len, "Contact added");
    }

    /// Track a submission rejected by input or entity validation.
    pub fn track_validation_rejection(&self, field: Option<Field>) {
        self.validation_rejections_total
            .fetch_add(1, Ordering::Relaxed);
        tracing::debug!(field = ?field, "Submission failed validation");
    }

    /// Track a submission rejected as a duplicate.
    pub fn track_duplicate_rejection(&self, fields: &[Field]) {
        self.duplicate_rejections_total
            .fetch_add(1, Ordering::Relaxed);
        tracing::debug!(fields = ?fields, "Submission rejected as duplicate");
    }

    /// Track a removal request.
    pub fn track_removal(&self, index: usize, removed: bool) {
        if removed {
            self.contacts_removed_total.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(index = index, "Contact removed");
        } else {
            self.removal_misses_total.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(index = index, "Removal index out of range");
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            contacts_added_total: self.contacts_added_total.load(Ordering::Relaxed),
            validation_rejections_total: self.validation_rejections_total.load(Ordering::Relaxed),
            duplicate_rejections_total: self.duplicate_rejections_total.load(Ordering::Relaxed),
            contacts_removed_total: self.contacts_removed_total.load(Ordering::Relaxed),
            removal_misses_total: self.removal_misses_total.load(Ordering::Relaxed),
        }
    }

    /// Share of submissions that were rejected (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let s = self.snapshot();
        let rejected = (s.validation_rejections_total + s.duplicate_rejections_total) as f64;
        let total = rejected + s.contacts_added_total as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Summary of all metrics as multi-line text.
    pub fn summary(&self) -> String {
        let s = self.snapshot();
        format!(
            "Metrics Summary:\n\
             Contacts Added: {}\n\
             Validation Rejections: {}\n\
             Duplicate Rejections: {}\n\
             Rejection Rate: {:.2}%\n\
             Contacts Removed: {}\n\
             Removal Misses: {}",
            s.contacts_added_total,
            s.validation_rejections_total,
            s.duplicate_rejections_total,
            self.rejection_rate() * 100.0,
            s.contacts_removed_total,
            s.removal_misses_total,
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer with a specific status.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::info!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation rejected"
            );
        }

        duration_ms
    }
}
