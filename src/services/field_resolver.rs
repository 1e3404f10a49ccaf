//! Candidate-key field resolution
//!
//! Upstream registries disagree on field names: the same concept arrives as
//! `doc_id`, `documentId`, `ref`, and so on. Each canonical field has an
//! ordered candidate key list; resolution walks the list and takes the first
//! key present in the record whose value is neither `null` nor `""`.
//!
//! The project field additionally honors a nested override: when the record
//! carries a `meta` object with a non-empty `project` entry, that value wins
//! over every flat-level candidate.

use crate::models::RawRecord;
use serde_json::Value;

/// Candidate keys for the document identifier, in priority order
pub const DOC_ID_KEYS: &[&str] = &["doc_id", "id", "documentId", "ref", "document_ref", "doc_number"];

/// Candidate keys for the document category
pub const TYPE_KEYS: &[&str] = &["type", "docType", "category", "document_type", "doc_category"];

/// Candidate keys for the counterparty name
pub const COUNTERPARTY_KEYS: &[&str] =
    &["counterparty", "vendorName", "supplier", "partyA", "vendor", "party_name"];

/// Candidate keys for the project name (flat-level fallback)
pub const PROJECT_KEYS: &[&str] = &["project", "projectName", "project_name", "proj"];

/// Candidate keys for the expiry date
pub const EXPIRY_KEYS: &[&str] = &[
    "expiry_date",
    "expiry",
    "expiryDate",
    "end_date",
    "valid_till",
    "expires_on",
    "expiration",
];

/// Candidate keys for the contract amount
pub const AMOUNT_KEYS: &[&str] =
    &["amount", "value", "contractValue", "amount_aed", "total", "contract_amount"];

/// Nested object consulted for the project override
const META_KEY: &str = "meta";

/// True when a value counts as missing: JSON `null` or the empty string.
///
/// Numeric zero and `false` are deliberately NOT missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Return the first candidate key's value that is present and non-blank.
///
/// Never fails: an unmatched record simply resolves to `None`.
pub fn resolve_first<'a>(record: &'a RawRecord, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|key| record.get(*key).filter(|value| !is_blank(value)))
}

/// Resolve the project field, honoring the `meta.project` override.
pub fn resolve_project(record: &RawRecord) -> Option<&Value> {
    if let Some(Value::Object(meta)) = record.get(META_KEY) {
        if let Some(value) = meta.get("project").filter(|value| !is_blank(value)) {
            return Some(value);
        }
    }
    resolve_first(record, PROJECT_KEYS)
}

/// Canonicalize a resolved scalar into a text field value.
///
/// Registries occasionally ship identifiers as bare numbers; those stringify.
/// Composite values (arrays, objects) are never a legitimate text field.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Resolve a candidate list straight to a canonical text value.
pub fn resolve_text(record: &RawRecord, candidates: &[&str]) -> Option<String> {
    resolve_first(record, candidates).and_then(value_to_text)
}
