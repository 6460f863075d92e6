use contact_list_mcp::models::Contact;
use contact_list_mcp::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Stores contacts in memory and tracks method calls for verification.
/// Clones share state, so a test can keep one handle while the service owns
/// another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed contacts, listed newest first.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        *repo.contacts.lock().unwrap() = contacts;
        repo
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn insert_front(&mut self, contact: Contact) {
        self.track_call("insert_front");
        self.contacts.lock().unwrap().insert(0, contact);
    }

    fn remove_at(&mut self, index: usize) -> Option<Contact> {
        self.track_call("remove_at");
        let mut contacts = self.contacts.lock().unwrap();
        if index < contacts.len() {
            Some(contacts.remove(index))
        } else {
            None
        }
    }

    fn list(&self) -> Vec<Contact> {
        self.track_call("list");
        self.contacts.lock().unwrap().clone()
    }

    fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }
}
