use crate::models::Contact;

/// Storage for the ordered contact list.
///
/// Index 0 is the most recently inserted contact. The repository does not
/// enforce uniqueness; duplicate checks happen before insertion.
pub trait ContactRepository: Send + Sync {
    /// Insert a contact at the head of the list.
    fn insert_front(&mut self, contact: Contact);

    /// Remove and return the contact at `index`, or `None` if out of range.
    fn remove_at(&mut self, index: usize) -> Option<Contact>;

    /// Snapshot of all contacts, newest first.
    fn list(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
