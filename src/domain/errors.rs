//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not 12 digits after an optional leading '+'.
    #[error("Invalid phone format in {0}. Please use +XXXXXXXXXXXX format.")]
    InvalidPhoneFormat(String),

    /// The provided birthday is not a valid `dd.mm.YYYY` date.
    #[error("Invalid birthday format in {0}. Please use dd.mm.YYYY format.")]
    InvalidBirthdayFormat(String),
}
