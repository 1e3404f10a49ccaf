//! Canonical record validity
//!
//! A record is usable only when all six canonical fields are present. The
//! empty/null collapse already happened during resolution, so presence here
//! is exactly `Option::is_some`. A numeric zero amount is present: only
//! string/null emptiness collapses to missing, never the number `0`.

use crate::models::{CanonicalRecord, ValidatedRecord};

/// True iff every canonical field carries a value.
pub fn is_complete(record: &CanonicalRecord) -> bool {
    record.doc_id.is_some()
        && record.doc_type.is_some()
        && record.counterparty.is_some()
        && record.project.is_some()
        && record.expiry_date.is_some()
        && record.amount.is_some()
}

/// Attach the derived validity flag to a canonical record.
pub fn validate(record: CanonicalRecord) -> ValidatedRecord {
    let is_valid = is_complete(&record);
    ValidatedRecord { record, is_valid }
}
