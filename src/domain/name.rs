//! Name value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's identifying name.
///
/// Any non-empty text is accepted. The rendered name is the key a record is
/// stored under in an [`AddressBook`](crate::book::AddressBook).
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("Ann").unwrap();
/// assert_eq!(name.as_str(), "Ann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    type Value = str;

    const LABEL: &'static str = "name";

    fn value(&self) -> &str {
        &self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
