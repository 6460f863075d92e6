//! End-to-end flow: submit a line, render the list, wait out the status line.

use contact_list_mcp::{Config, ContactListService};
use std::time::Duration;

#[test]
fn test_submit_renders_single_entry() {
    let mut service = ContactListService::in_memory(&Config::default());

    service.submit("Alice Brown, Dallas, alice@b.com").unwrap();

    let contacts = service.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Alice Brown");
    assert_eq!(contacts[0].city, "Dallas");
    assert_eq!(contacts[0].email, "alice@b.com");
    assert_eq!(
        contacts[0].lines,
        [
            "Name: Alice Brown".to_string(),
            "City: Dallas".to_string(),
            "Email: alice@b.com".to_string()
        ]
    );
    assert_eq!(service.count_label(), "Contacts Saved: 1");
}

#[tokio::test(start_paused = true)]
async fn test_validation_error_clears_after_three_seconds() {
    let mut service = ContactListService::in_memory(&Config::default());

    assert!(service.submit("alice brown, Dallas, alice@b.com").is_err());
    assert!(service.status().input_invalid);

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert!(service.status().message.is_some());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(service.status().message.is_none());
    assert!(!service.status().input_invalid);
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_error_lasts_four_seconds() {
    let mut service = ContactListService::in_memory(&Config::default());
    service.submit("Jane Doe, Austin, jane@x.com").unwrap();
    assert!(service.submit("Jane Smith, Dallas, jane@x.com").is_err());

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    let message = service.status().message.unwrap();
    assert!(message.contains("The duplicate field(s) is/are: Email."));

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(service.status().message.is_none());
}
