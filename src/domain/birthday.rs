//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and output format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth, written as `dd.mm.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("05.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `dd.mm.YYYY`.
    ///
    /// Each of the three dot-separated parts must be an integer and together
    /// they must name a real calendar date with a year between 1 and 9999.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` otherwise.
    pub fn new(birthday: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = birthday.as_ref();
        Self::parse_date(raw)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthdayFormat(raw.to_string()))
    }

    /// Parse an optional birthday; empty input yields `Ok(None)`.
    pub fn parse_optional(birthday: &str) -> Result<Option<Self>, ValidationError> {
        if birthday.trim().is_empty() {
            return Ok(None);
        }
        Self::new(birthday).map(Some)
    }

    /// Wrap an existing date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date the birthday is celebrated on in `year`.
    ///
    /// February 29 birthdays are observed on March 1 in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        if month == 2 && day == 29 && !is_leap_year(year) {
            return NaiveDate::from_ymd_opt(year, 3, 1);
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// The first celebration on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.observed_in(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        self.observed_in(today.year() + 1)
    }

    /// Whole days from `today` until the next celebration; 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        let mut parts = raw.split('.');
        let day: u32 = parts.next()?.trim().parse().ok()?;
        let month: u32 = parts.next()?.trim().parse().ok()?;
        let year: i32 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() || !(1..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl Field for Birthday {
    type Value = NaiveDate;

    const LABEL: &'static str = "birthday";

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl std::str::FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
