//! Shared builders for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::{AddressBook, Birthday, Name, Phone, Record};

/// Build a phone, panicking on invalid test input.
pub fn phone(raw: &str) -> Phone {
    Phone::new(raw).expect("test phone must be valid")
}

/// Build a record with one phone and an optional birthday.
pub fn record(name: &str, number: &str, birthday: Option<&str>) -> Record {
    Record::new(
        Name::new(name).expect("test name must be valid"),
        birthday.map(|b| Birthday::new(b).expect("test birthday must be valid")),
        Some(phone(number)),
    )
}

/// A book holding `count` contacts named `Contact 0`, `Contact 1`, ...
pub fn book_with(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        book.add_record(record(
            &format!("Contact {}", i),
            &format!("380{:09}", i),
            None,
        ))
        .expect("upsert never fails");
    }
    book
}

/// Build a calendar date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("test date must be valid")
}
