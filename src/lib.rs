//! Contact Book - an in-memory personal contact directory.
//!
//! Stores contact names, phone numbers, and birthdays, validates their
//! formats, and supports lookup, mutation, and paginated listing.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The contact [`Record`]
//! - **book**: The keyed [`AddressBook`] and its page iterator
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Tracing subscriber setup

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use book::{AddressBook, InsertPolicy, Pages};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, BookResult, ConfigError, ConfigResult};
pub use models::Record;
pub use observability::init_tracing;
