//! Lazy page iterator over an address book listing.

use crate::models::Record;
use chrono::NaiveDate;
use std::iter::FusedIterator;
use std::slice::Chunks;

/// Pages of rendered records, produced by
/// [`AddressBook::iterator`](super::AddressBook::iterator).
///
/// Each page holds up to `page_size` consecutive records, one per line. The
/// last page may be shorter. Pages are rendered on demand and the iterator
/// cannot be restarted.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
    today: NaiveDate,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: &'a [Record], page_size: usize, today: NaiveDate) -> Self {
        Self {
            chunks: records.chunks(page_size.max(1)),
            today,
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let chunk = self.chunks.next()?;
        Some(
            chunk
                .iter()
                .map(|record| record.render_on(self.today))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
