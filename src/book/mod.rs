//! The address book: a keyed, insertion-ordered store of contact records.

mod address_book;
mod pages;
mod policy;

pub use address_book::AddressBook;
pub use pages::Pages;
pub use policy::InsertPolicy;
