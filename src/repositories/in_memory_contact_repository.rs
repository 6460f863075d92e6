use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::collections::VecDeque;

/// Contact repository backed by a `VecDeque`.
///
/// Lives only as long as the process; nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct InMemoryContactRepository {
    contacts: VecDeque<Contact>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn insert_front(&mut self, contact: Contact) {
        self.contacts.push_front(contact);
    }

    fn remove_at(&mut self, index: usize) -> Option<Contact> {
        self.contacts.remove(index)
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
