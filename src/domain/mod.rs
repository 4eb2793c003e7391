//! Domain value objects.
//!
//! Contact names, phone numbers, and birthdays are validated at construction
//! time so that an invalid value can never be stored in a [`Record`].
//!
//! [`Record`]: crate::models::Record

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
