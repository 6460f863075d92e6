//! Contact List MCP Server - a validated, in-memory contact list exposed
//! over the Model Context Protocol.
//!
//! Contacts are entered as one comma-separated line (`Name, City, email`),
//! validated, checked for duplicates, and kept newest first for the life of
//! the process.
//!
//! # Architecture
//!
//! - **domain**: Value objects for names, cities, and email addresses
//! - **models**: The immutable `Contact` entity
//! - **validation**: Parsing and format rules for raw input
//! - **matching**: Duplicate detection policies
//! - **repositories**: Storage for the ordered list
//! - **services**: The list controller and submit flow
//! - **status**: Self-clearing status messages
//! - **observability**: Activity counters and timing
//! - **config**: Configuration from environment variables
//! - **error**: Error types
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;
pub mod status;
pub mod validation;

pub use config::Config;
pub use domain::{CityName, EmailAddress, Field, PersonName, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use matching::{DuplicateDetector, DuplicatePolicy};
pub use models::Contact;
pub use observability::{MetricsSnapshot, MetricsTracker};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use server::ContactListMcpServer;
pub use services::{ContactListService, ContactView};
pub use status::{StatusSnapshot, TransientMessage};
pub use validation::{ContactInput, InputValidator, ValidationRules};
