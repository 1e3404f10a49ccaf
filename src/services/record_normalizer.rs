//! Raw-to-canonical record normalization
//!
//! Orchestrates the field resolver and value coercers over one raw record.
//! Pure and infallible: every resolution or coercion failure degrades to a
//! missing field, and validity is judged separately downstream.

use crate::models::{CanonicalRecord, RawRecord};
use crate::services::coercion::{to_decimal, to_iso_date};
use crate::services::field_resolver::{
    resolve_first, resolve_project, resolve_text, value_to_text, AMOUNT_KEYS, COUNTERPARTY_KEYS,
    DOC_ID_KEYS, EXPIRY_KEYS, TYPE_KEYS,
};

/// Record normalizer
///
/// Reconciles one arbitrarily-shaped registry record into the fixed
/// six-field canonical schema. Idempotent over already-canonical input.
#[derive(Debug, Clone, Default)]
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one raw record.
    pub fn normalize(&self, raw: &RawRecord) -> CanonicalRecord {
        let record = CanonicalRecord {
            doc_id: resolve_text(raw, DOC_ID_KEYS),
            doc_type: resolve_text(raw, TYPE_KEYS),
            counterparty: resolve_text(raw, COUNTERPARTY_KEYS),
            project: resolve_project(raw).and_then(value_to_text),
            expiry_date: to_iso_date(resolve_first(raw, EXPIRY_KEYS)),
            amount: to_decimal(resolve_first(raw, AMOUNT_KEYS)),
        };

        tracing::debug!(
            doc_id = record.doc_id.as_deref().unwrap_or("<missing>"),
            "normalized record"
        );

        record
    }
}
