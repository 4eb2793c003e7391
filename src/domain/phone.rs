//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Twelve ASCII digits, optionally preceded by a single '+'.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?([0-9]{12})$").expect("Failed to compile phone regex"));

/// A validated phone number in canonical `+XXXXXXXXXXXX` form.
///
/// Input is accepted with or without the leading '+'; the stored value always
/// carries it.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("380123456789").unwrap();
/// assert_eq!(phone.as_str(), "+380123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - A single leading '+' is optional
    /// - Exactly 12 ASCII digits must remain after it
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if the phone format is invalid.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let digits = PHONE_REGEX
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ValidationError::InvalidPhoneFormat(raw.to_string()))?;

        Ok(Self(format!("+{}", digits.as_str())))
    }

    /// Parse an optional phone number.
    ///
    /// Empty input means "no phone" and yields `Ok(None)`; anything else must
    /// be a valid phone number.
    pub fn parse_optional(phone: &str) -> Result<Option<Self>, ValidationError> {
        if phone.trim().is_empty() {
            return Ok(None);
        }
        Self::new(phone).map(Some)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the twelve digits without the leading '+'.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl Field for Phone {
    type Value = str;

    const LABEL: &'static str = "phone";

    fn value(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
