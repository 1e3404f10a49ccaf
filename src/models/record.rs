//! Record types flowing through the normalization pipeline
//!
//! A raw record arrives from the registry with no schema guarantees and is
//! discarded once reconciled into the fixed six-field canonical shape.
//! Every canonical field is `Option<_>`: `None` is the single representation
//! of a missing value, and both JSON `null` and the empty string collapse to
//! it during resolution. A present-but-zero amount stays present.

use serde::{Deserialize, Serialize};

/// Arbitrary JSON object as received from the upstream registry.
///
/// The upstream source is uncontrolled: any field may be absent, null, or
/// spelled under one of several aliases. Nothing here is trusted.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Fixed-shape normalized representation of one registry document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Document identifier, also the deduplication key
    pub doc_id: Option<String>,
    /// Document category label
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    /// Counterparty name
    pub counterparty: Option<String>,
    /// Project name (nested `meta.project` takes precedence over flat keys)
    pub project: Option<String>,
    /// Expiry date, ISO-8601 `YYYY-MM-DD`
    pub expiry_date: Option<String>,
    /// Contract amount as a decimal number
    pub amount: Option<f64>,
}

/// Canonical record plus its derived validity flag.
///
/// `is_valid` is always computed from the record, never hand-set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    #[serde(flatten)]
    pub record: CanonicalRecord,
    pub is_valid: bool,
}
