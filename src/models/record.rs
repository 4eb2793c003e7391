//! Record model: one contact with its name, birthday, and phone numbers.

use crate::domain::{Birthday, Name, Phone};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact.
///
/// A record always has a name, may have a birthday, and keeps an ordered list
/// of phone numbers with no two equal numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordData")]
pub struct Record {
    name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
    phones: Vec<Phone>,
}

/// Wire shape of a record before phone de-duplication.
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        let mut record = Record::new(data.name, data.birthday, None);
        for phone in data.phones {
            record.add_phone(phone);
        }
        record
    }
}

impl Record {
    /// Create a new record with an optional birthday and first phone.
    pub fn new(name: Name, birthday: Option<Birthday>, phone: Option<Phone>) -> Self {
        Self {
            name,
            birthday,
            phones: phone.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Replace (or clear) the birthday.
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Whether the record holds `phone`.
    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.position_of(phone).is_some()
    }

    /// Append a phone unless an equal one is already stored.
    pub fn add_phone(&mut self, phone: Phone) -> String {
        if self.has_phone(&phone) {
            tracing::debug!(contact = %self.name, phone = %phone, "Phone already present");
            return format!("Phone {} already present in contact {}.", phone, self.name);
        }

        let message = format!("Phone {} added to contact {}.", phone, self.name);
        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        message
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The list keeps its order. If `new` is already stored under another
    /// position the change is refused so that numbers stay unique.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> String {
        let Some(idx) = self.position_of(old) else {
            tracing::debug!(contact = %self.name, phone = %old, "Phone to change not present");
            return format!("Phone {} not present in contact {}.", old, self.name);
        };

        if old != &new && self.has_phone(&new) {
            tracing::debug!(contact = %self.name, phone = %new, "Replacement phone already present");
            return format!("Phone {} already present in contact {}.", new, self.name);
        }

        let message = format!("Phone {} changed to {} in contact {}.", old, new, self.name);
        tracing::debug!(contact = %self.name, old = %old, new = %new, "Phone changed");
        self.phones[idx] = new;
        message
    }

    /// Remove the first phone equal to `phone`.
    pub fn delete_phone(&mut self, phone: &Phone) -> String {
        match self.position_of(phone) {
            Some(idx) => {
                self.phones.remove(idx);
                tracing::debug!(contact = %self.name, phone = %phone, "Phone deleted");
                format!("Phone {} deleted from contact {}.", phone, self.name)
            }
            None => {
                tracing::debug!(contact = %self.name, phone = %phone, "Phone to delete not found");
                format!("Phone {} not found in contact {}.", phone, self.name)
            }
        }
    }

    /// Days until the next birthday, counted from the local calendar date.
    ///
    /// `None` when no birthday is stored.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// Render the record as of `today`.
    ///
    /// Format: `<name> <birthday|None> (<days|None>): <phone>, <phone>`.
    pub fn render_on(&self, today: NaiveDate) -> String {
        let birthday = self
            .birthday
            .as_ref()
            .map_or_else(|| "None".to_string(), ToString::to_string);
        let days = self
            .days_to_birthday_from(today)
            .map_or_else(|| "None".to_string(), |d| d.to_string());
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        format!("{} {} ({}): {}", self.name, birthday, days, phones)
    }

    fn position_of(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone.as_str())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_on(Local::now().date_naive()))
    }
}
