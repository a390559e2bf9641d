//! Race records of the fastest Alpe d'Huez ascents and their normalization.
//!
//! The raw dataset is a JSON array of [`RawRecord`]s. A [`Dataset`] turns
//! them, in order, into typed [`RaceRecord`]s, rejecting the ones whose fields
//! cannot be parsed.

mod category;
mod record;

pub mod error;
pub mod time;

pub use crate::category::Category;
pub use crate::record::RaceRecord;
pub use crate::record::RawPlace;
pub use crate::record::RawRecord;

use crate::error::RecordError;

#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<RawRecord>,
}

impl Dataset {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for Dataset {
    type Item = Result<RaceRecord, RecordError>;

    type IntoIter = NormalizeIter;

    fn into_iter(self) -> Self::IntoIter {
        NormalizeIter {
            records: self.records.into_iter(),
        }
    }
}

/// Normalizes raw records one at a time, preserving the input order.
pub struct NormalizeIter {
    records: std::vec::IntoIter<RawRecord>,
}

impl Iterator for NormalizeIter {
    type Item = Result<RaceRecord, RecordError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(RaceRecord::try_from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}
