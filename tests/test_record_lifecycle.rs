//! Record behavior through the public API: phone management, birthdays,
//! and rendering.

mod fixtures;

use contact_book::{Birthday, Name, Phone, Record, ValidationError};
use fixtures::{date, phone, record};

#[test]
fn test_duplicate_phone_reported_for_ann() {
    let mut ann = record("Ann", "+380123456789", None);

    let msg = ann.add_phone(phone("+380123456789"));

    assert_eq!(ann.phones().len(), 1);
    assert!(msg.contains("already present"), "unexpected message: {}", msg);
    assert!(msg.contains("Ann"), "unexpected message: {}", msg);
}

#[test]
fn test_phone_lifecycle() {
    let mut ann = record("Ann", "380123456789", None);

    ann.add_phone(phone("380000000001"));
    ann.add_phone(phone("380000000002"));
    assert_eq!(ann.phones().len(), 3);

    let msg = ann.change_phone(&phone("380000000001"), phone("380000000009"));
    assert!(msg.contains("changed"));
    assert_eq!(ann.phones()[1].as_str(), "+380000000009");

    let msg = ann.delete_phone(&phone("380123456789"));
    assert!(msg.contains("deleted"));
    assert_eq!(
        ann.phones().iter().map(Phone::as_str).collect::<Vec<_>>(),
        vec!["+380000000009", "+380000000002"]
    );

    let msg = ann.delete_phone(&phone("380123456789"));
    assert!(msg.contains("not found"));
}

#[test]
fn test_invalid_input_surfaces_errors() {
    assert_eq!(
        Phone::new("+38012345"),
        Err(ValidationError::InvalidPhoneFormat("+38012345".to_string()))
    );
    assert_eq!(
        Birthday::new("31.13.2020"),
        Err(ValidationError::InvalidBirthdayFormat("31.13.2020".to_string()))
    );
    assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
}

#[test]
fn test_optional_fields_from_empty_input() {
    let birthday = Birthday::parse_optional("").unwrap();
    let first_phone = Phone::parse_optional("").unwrap();
    let record = Record::new(Name::new("Eve").unwrap(), birthday, first_phone);

    assert!(record.birthday().is_none());
    assert!(record.phones().is_empty());
    assert_eq!(record.days_to_birthday(), None);
}

#[test]
fn test_days_to_birthday_relative_to_today() {
    let ann = record("Ann", "380123456789", Some("15.10.1990"));

    // Earlier in the year: counts to this year's date.
    assert_eq!(ann.days_to_birthday_from(date(2026, 10, 1)), Some(14));
    // On the day.
    assert_eq!(ann.days_to_birthday_from(date(2026, 10, 15)), Some(0));
    // Already passed: counts to next year's date.
    assert_eq!(ann.days_to_birthday_from(date(2026, 10, 16)), Some(364));
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let leap = record("Leap", "380123456789", Some("29.02.1996"));

    assert_eq!(leap.days_to_birthday_from(date(2025, 2, 27)), Some(2));
    assert_eq!(leap.days_to_birthday_from(date(2025, 3, 1)), Some(0));
}

#[test]
fn test_rendering() {
    let mut ann = record("Ann", "380123456789", Some("20.10.1990"));
    ann.add_phone(phone("380000000001"));

    assert_eq!(
        ann.render_on(date(2026, 10, 15)),
        "Ann 20.10.1990 (5): +380123456789, +380000000001"
    );

    ann.set_birthday(None);
    assert_eq!(
        ann.render_on(date(2026, 10, 15)),
        "Ann None (None): +380123456789, +380000000001"
    );
}
