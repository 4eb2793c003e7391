//! Data models for the contact directory.
//!
//! A [`Record`] groups one contact's validated fields.

pub mod record;

pub use record::Record;
