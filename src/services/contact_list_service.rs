//! Contact list service layer.
//!
//! Owns the ordered list and runs the submit flow:
//! parse and validate, check for duplicates, then insert or reject.

use crate::config::Config;
use crate::domain::Field;
use crate::error::{ContactError, ContactResult};
use crate::matching::{DuplicateDetector, DuplicatePolicy};
use crate::models::Contact;
use crate::observability::{MetricsSnapshot, MetricsTracker, Timer};
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use crate::status::{StatusSnapshot, TransientMessage};
use crate::validation::InputValidator;
use serde::Serialize;
use std::time::Duration;

/// A contact as rendered in the list, with the index used to remove it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub index: usize,
    pub name: String,
    pub city: String,
    pub email: String,
    pub lines: [String; 3],
}

impl ContactView {
    fn new(index: usize, contact: &Contact) -> Self {
        Self {
            index,
            name: contact.name().to_string(),
            city: contact.city().to_string(),
            email: contact.email().to_string(),
            lines: contact.display_lines(),
        }
    }
}

/// Label for the count display.
pub fn count_label(count: usize) -> String {
    format!("Contacts Saved: {}", count)
}

/// The list controller.
///
/// Each instance owns its own list, so independent instances never share
/// state.
pub struct ContactListService {
    repository: Box<dyn ContactRepository>,
    validator: InputValidator,
    detector: DuplicateDetector,
    status: TransientMessage,
    metrics: MetricsTracker,
    validation_error_ttl: Duration,
    duplicate_error_ttl: Duration,
}

impl ContactListService {
    /// Create a service over the given repository.
    pub fn new(repository: Box<dyn ContactRepository>, config: &Config) -> Self {
        Self {
            repository,
            validator: InputValidator::new(config.validation_rules()),
            detector: DuplicateDetector::new(config.duplicate_policy),
            status: TransientMessage::new(),
            metrics: MetricsTracker::new(),
            validation_error_ttl: config.validation_error_ttl(),
            duplicate_error_ttl: config.duplicate_error_ttl(),
        }
    }

    /// Create a service with an empty in-memory list.
    pub fn in_memory(config: &Config) -> Self {
        Self::new(Box::new(InMemoryContactRepository::new()), config)
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.detector.policy()
    }

    /// Fields of `candidate` that collide with the current list.
    pub fn find_duplicates(&self, candidate: &Contact) -> Vec<Field> {
        let existing = self.repository.list();
        self.detector.find_collisions(candidate, &existing)
    }

    /// Insert a contact at the head of the list. No duplicate check.
    pub fn insert(&mut self, contact: Contact) {
        self.repository.insert_front(contact);
        self.metrics.track_added(self.repository.len());
    }

    /// Remove the contact at `index`.
    ///
    /// Out-of-range indexes leave the list unchanged and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Contact> {
        let removed = self.repository.remove_at(index);
        self.metrics.track_removal(index, removed.is_some());
        removed
    }

    pub fn count(&self) -> usize {
        self.repository.len()
    }

    pub fn count_label(&self) -> String {
        count_label(self.count())
    }

    /// The list as rendered, newest first.
    pub fn contacts(&self) -> Vec<ContactView> {
        self.repository
            .list()
            .iter()
            .enumerate()
            .map(|(index, contact)| ContactView::new(index, contact))
            .collect()
    }

    /// Validate `raw`, reject duplicates, and insert the new contact at the head.
    ///
    /// On failure the list is unchanged and the status line shows the error
    /// until its timer clears it. On success the status line is cleared.
    ///
    /// # Errors
    ///
    /// - `ContactError::MissingFields` / `ContactError::Format` for bad input
    /// - `ContactError::Duplicate` when the candidate collides with the list
    /// - `ContactError::Invalid` if an entity rule rejects validated input.
    ///   Validated input always satisfies the entity rules, so this is a bug.
    pub fn submit(&mut self, raw: &str) -> ContactResult<Contact> {
        let timer = Timer::new("submit");
        let result = self.try_submit(raw);

        match &result {
            Ok(_) => self.status.clear(),
            Err(e) => match e {
                ContactError::Duplicate { fields } => {
                    self.metrics.track_duplicate_rejection(fields);
                    self.status.show_error(e.to_string(), self.duplicate_error_ttl);
                }
                _ => {
                    if !e.is_user_error() {
                        tracing::error!("Entity rejected validated input: {}", e);
                    }
                    self.metrics.track_validation_rejection(e.field());
                    self.status.show_error(e.to_string(), self.validation_error_ttl);
                }
            },
        }

        timer.finish_with_status(result.is_ok());
        result
    }

    fn try_submit(&mut self, raw: &str) -> ContactResult<Contact> {
        let contact = self.validator.validate(raw)?.into_contact()?;

        let fields = self.find_duplicates(&contact);
        if !fields.is_empty() {
            return Err(ContactError::Duplicate { fields });
        }

        self.insert(contact.clone());
        tracing::info!(count = self.count(), "Contact saved");
        Ok(contact)
    }

    pub fn status(&self) -> StatusSnapshot {
        self.status.snapshot()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Share of submissions rejected so far (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        self.metrics.rejection_rate()
    }

    /// Human-readable counters for logging.
    pub fn metrics_summary(&self) -> String {
        self.metrics.summary()
    }
}
