//! Application service layer.
//!
//! Services hold the list logic and sit between the MCP handlers and the
//! repository.

mod contact_list_service;

pub use contact_list_service::{count_label, ContactListService, ContactView};
