//! The `Field` abstraction shared by every contact attribute.

use std::fmt;

/// A labeled value held by a contact record.
///
/// Every field renders to text through [`fmt::Display`]; the rendering is what
/// records compare on and what callers print.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Phone};
///
/// let phone = Phone::new("380123456789").unwrap();
/// assert_eq!(Phone::LABEL, "phone");
/// assert_eq!(phone.value(), "+380123456789");
/// ```
pub trait Field: fmt::Display {
    /// Type of the stored value.
    type Value: ?Sized;

    /// Human-readable name of the field, e.g. `"phone"`.
    const LABEL: &'static str;

    /// Borrow the stored value.
    fn value(&self) -> &Self::Value;

    /// Render the value to text.
    fn render(&self) -> String {
        self.to_string()
    }
}
