//! Record assembly and batch collection
//!
//! Turns each segment into one [`StudentRecord`]. A segment that cannot be
//! assembled is skipped with a warning naming its position; the rest of the
//! document is still processed.

use super::classifier::ClassificationPolicy;
use super::field_rules::{extract_fields, is_unidentified};
use super::segmenter::Segment;
use super::subject_table::extract_subjects;
use crate::app::models::{ExtractionStats, StudentRecord};
use crate::{Error, Result};
use tracing::{debug, warn};

/// Build one record from one segment
///
/// Fails only when the block carries nothing to identify a student: no seat
/// value, name, registration number, score label or subject row.
pub fn assemble_record(segment: &Segment<'_>, policy: ClassificationPolicy) -> Result<StudentRecord> {
    let fields = extract_fields(segment.text);
    let subjects = extract_subjects(segment.text);

    if subjects.is_empty() && is_unidentified(&fields, segment.text) {
        return Err(Error::malformed_record(
            segment.ordinal,
            "block has no seat number, name, registration number, score or subject rows",
        ));
    }

    debug!(
        "Block {}: seat {} with {} subjects",
        segment.ordinal,
        fields.seat_number,
        subjects.len()
    );

    Ok(StudentRecord::new(fields, subjects, policy))
}

/// Assemble every segment, collecting records in document order
pub fn aggregate(
    segments: &[Segment<'_>],
    policy: ClassificationPolicy,
) -> (Vec<StudentRecord>, ExtractionStats) {
    let mut stats = ExtractionStats {
        segments_found: segments.len(),
        ..ExtractionStats::new()
    };
    let mut records = Vec::with_capacity(segments.len());

    for segment in segments {
        match assemble_record(segment, policy) {
            Ok(record) => {
                records.push(record);
                stats.records_built += 1;
            }
            Err(e) => {
                warn!("Skipping student {}: {}", segment.ordinal, e);
                stats.add_warning(format!("Record {}: {}", segment.ordinal, e));
            }
        }
    }

    (records, stats)
}
