//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating an address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A record with this name exists and the insert policy forbids overwriting it
    #[error("Contact {0} already exists")]
    AlreadyExists(String),

    /// No record is stored under this name
    #[error("Contact {0} not found")]
    NotFound(String),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with AddressBookError
pub type BookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
