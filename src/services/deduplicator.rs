//! First-seen duplicate elimination
//!
//! Collapses a batch to one record per document id, keeping the earliest
//! occurrence and preserving input order. Records with no id at all are
//! dropped unconditionally; that filter is independent of the validity flag,
//! so an invalid record with a unique id still survives this pass.

use crate::models::ValidatedRecord;
use std::collections::HashSet;

/// Remove duplicate records by `doc_id`, first occurrence wins.
pub fn dedupe(records: Vec<ValidatedRecord>) -> Vec<ValidatedRecord> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for validated in records {
        let Some(doc_id) = validated.record.doc_id.clone() else {
            tracing::debug!("dropping record without doc_id");
            continue;
        };

        if seen_ids.insert(doc_id) {
            unique.push(validated);
        } else {
            tracing::debug!(
                doc_id = validated.record.doc_id.as_deref().unwrap_or_default(),
                "dropping duplicate record"
            );
        }
    }

    unique
}
