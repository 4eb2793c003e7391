//! In-memory address book keyed by contact name.

use super::pages::Pages;
use super::policy::InsertPolicy;
use crate::config::Config;
use crate::domain::Field;
use crate::error::{AddressBookError, BookResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::fmt;

/// A keyed store of [`Record`]s.
///
/// Records are keyed by their rendered name and listed in insertion order.
/// Replacing a record through [`InsertPolicy::Upsert`] keeps the original
/// position.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Name, Phone, Record};
///
/// let mut book = AddressBook::new();
/// let ann = Record::new(
///     Name::new("Ann").unwrap(),
///     None,
///     Some(Phone::new("+380123456789").unwrap()),
/// );
/// book.add_record(ann).unwrap();
/// assert!(book.find("Ann").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
    policy: InsertPolicy,
    page_size: usize,
}

impl AddressBook {
    /// Create an empty book with the default policy and page size.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty book with an explicit insert policy.
    pub fn with_policy(policy: InsertPolicy) -> Self {
        Self {
            policy,
            ..Self::new()
        }
    }

    /// Create an empty book from loaded configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            policy: config.insert_policy,
            page_size: config.page_size.max(1),
        }
    }

    pub fn policy(&self) -> InsertPolicy {
        self.policy
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record under its name.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::AlreadyExists` when the name is taken and
    /// the book uses [`InsertPolicy::InsertOrFail`].
    pub fn add_record(&mut self, record: Record) -> BookResult<String> {
        let key = record.name().render();

        match self.index.get(&key).copied() {
            Some(_) if self.policy == InsertPolicy::InsertOrFail => {
                tracing::warn!(contact = %key, "Rejected insert of existing contact");
                Err(AddressBookError::AlreadyExists(key))
            }
            Some(idx) => {
                self.records[idx] = record;
                tracing::info!(contact = %key, "Contact replaced");
                Ok(format!("Contact {} replaced.", key))
            }
            None => {
                self.index.insert(key.clone(), self.records.len());
                self.records.push(record);
                tracing::info!(contact = %key, total = self.records.len(), "Contact added");
                Ok(format!("Contact {} added.", key))
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let idx = *self.index.get(name)?;
        self.records.get_mut(idx)
    }

    /// Look up a record by name, failing with `NotFound` when absent.
    pub fn get(&self, name: &str) -> BookResult<&Record> {
        self.find(name)
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))
    }

    /// Remove the record stored under `name`.
    ///
    /// A missing name is not an error; the returned message says so.
    pub fn delete_record(&mut self, name: &str) -> String {
        let Some(idx) = self.index.remove(name) else {
            tracing::debug!(contact = %name, "Contact to delete not found");
            return format!("Contact {} not found.", name);
        };

        self.records.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }

        tracing::info!(contact = %name, total = self.records.len(), "Contact deleted");
        format!("Contact {} deleted.", name)
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Page through the listing, `page_size` records per page.
    ///
    /// A page size of 0 is treated as 1.
    pub fn iterator(&self, page_size: usize) -> Pages<'_> {
        self.iterator_on(page_size, Local::now().date_naive())
    }

    /// Like [`iterator`](Self::iterator), rendering birthdays as of `today`.
    pub fn iterator_on(&self, page_size: usize, today: NaiveDate) -> Pages<'_> {
        Pages::new(&self.records, page_size, today)
    }

    /// Page through the listing using the configured page size.
    pub fn pages(&self) -> Pages<'_> {
        self.iterator(self.page_size)
    }

    /// Records whose name contains `query` (case-insensitive) or whose phone
    /// digits contain the digits of `query`.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let digits = query.strip_prefix('+').unwrap_or(query);
        let phone_query = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());

        let hits: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&needle)
                    || (phone_query
                        && record.phones().iter().any(|p| p.digits().contains(digits)))
            })
            .collect();

        tracing::debug!(query = %query, hits = hits.len(), "Search completed");
        hits
    }

    /// Records whose next birthday is at most `within_days` days after
    /// `today`, soonest first. Ties keep insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .iter()
            .filter_map(|record| {
                let days = record.days_to_birthday_from(today)?;
                (days <= within_days).then_some((record, days))
            })
            .collect();
        upcoming.sort_by_key(|&(_, days)| days);
        upcoming
    }

    /// Render every record, one per line, as of `today`.
    pub fn render_on(&self, today: NaiveDate) -> String {
        self.records
            .iter()
            .map(|record| record.render_on(today))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_on(Local::now().date_naive()))
    }
}
