//! Data model for the normalization pipeline

pub mod record;

pub use record::{CanonicalRecord, RawRecord, ValidatedRecord};
