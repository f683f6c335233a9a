//! Single-student lookup

use crate::app::models::{ResultBatch, StudentRecord};

/// Exact-match key for [`find_student`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    SeatNumber(String),
    Name(String),
    RegistrationNumber(String),
}

impl LookupKey {
    fn matches(&self, record: &StudentRecord) -> bool {
        match self {
            LookupKey::SeatNumber(seat) => record.seat_number() == seat.trim(),
            LookupKey::Name(name) => record.name() == name.trim(),
            LookupKey::RegistrationNumber(prn) => record.registration_number() == prn.trim(),
        }
    }
}

/// First record matching `key`
///
/// Seat numbers are not unique across blocks; duplicates resolve to the
/// earliest one in the document.
pub fn find_student<'a>(batch: &'a ResultBatch, key: &LookupKey) -> Option<&'a StudentRecord> {
    batch.records().iter().find(|record| key.matches(record))
}
