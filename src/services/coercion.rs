//! Value coercion for expiry dates and monetary amounts
//!
//! Both coercers degrade to `None` on any failure instead of erroring: a
//! record with an unparseable date or amount continues through normalization
//! with that field missing and is later flagged invalid, not rejected.

use chrono::NaiveDate;
use serde_json::Value;

/// Textual date formats attempted in order. Ambiguous two-number-leading
/// dates (e.g. `03/04/2026`) resolve day-first, so the day-first patterns
/// precede any month-first spelling. The `%y` variants must come before the
/// `%Y` ones: chrono's `%Y` accepts fewer than four digits, so `03/04/26`
/// would otherwise parse as year 26.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%y",
    "%d-%m-%y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Tokens stripped from amount text before decimal parsing.
///
/// Exact, case-sensitive removal in this order; mixed-case spellings like
/// `Aed` are left in place and fail the numeric parse.
const AMOUNT_TOKENS: &[&str] = &["AED", "aed", " ", ","];

/// Stringify a scalar JSON value for coercion.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Coerce a resolved expiry value into an ISO-8601 `YYYY-MM-DD` string.
///
/// Resolution order:
/// 1. flexible textual parse over [`DATE_FORMATS`] (day-first ambiguity rule)
/// 2. strict `YYYYMMDD` for exactly-8-digit input
/// 3. otherwise missing
///
/// Already-ISO input round-trips unchanged.
pub fn to_iso_date(value: Option<&Value>) -> Option<String> {
    let text = scalar_text(value?)?;
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    if text.len() == 8 && text.bytes().all(|byte| byte.is_ascii_digit()) {
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y%m%d") {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    None
}

/// Coerce a resolved amount value into a decimal number.
///
/// Strips currency markers and digit grouping ([`AMOUNT_TOKENS`]), then
/// parses the remainder as `f64`. An empty remainder or a failed parse is
/// missing, never an error. Already-numeric input is a no-op.
pub fn to_decimal(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    if value.is_null() {
        return None;
    }

    let mut text = scalar_text(value)?;
    for token in AMOUNT_TOKENS {
        text = text.replace(token, "");
    }
    if text.is_empty() {
        return None;
    }

    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(value: serde_json::Value) -> Option<String> {
        to_iso_date(Some(&value))
    }

    fn decimal(value: serde_json::Value) -> Option<f64> {
        to_decimal(Some(&value))
    }

    #[test]
    fn test_ambiguous_date_is_day_first() {
        assert_eq!(date(json!("03/04/2026")).as_deref(), Some("2026-04-03"));
    }

    #[test]
    fn test_eight_digit_date() {
        assert_eq!(date(json!("20260201")).as_deref(), Some("2026-02-01"));
    }

    #[test]
    fn test_eight_digit_numeric_date() {
        assert_eq!(date(json!(20260201)).as_deref(), Some("2026-02-01"));
    }

    #[test]
    fn test_iso_date_round_trips() {
        assert_eq!(date(json!("2026-04-03")).as_deref(), Some("2026-04-03"));
    }

    #[test]
    fn test_dashed_and_dotted_day_first() {
        assert_eq!(date(json!("03-04-2026")).as_deref(), Some("2026-04-03"));
        assert_eq!(date(json!("03.04.2026")).as_deref(), Some("2026-04-03"));
    }

    #[test]
    fn test_two_digit_year_day_first() {
        assert_eq!(date(json!("03/04/26")).as_deref(), Some("2026-04-03"));
    }

    #[test]
    fn test_month_name_dates() {
        assert_eq!(date(json!("3 Apr 2026")).as_deref(), Some("2026-04-03"));
        assert_eq!(date(json!("April 3, 2026")).as_deref(), Some("2026-04-03"));
    }

    #[test]
    fn test_garbage_date_is_missing() {
        assert_eq!(date(json!("not a date")), None);
    }

    #[test]
    fn test_invalid_eight_digits_is_missing() {
        // 99 is not a month
        assert_eq!(date(json!("20269901")), None);
    }

    #[test]
    fn test_missing_date_inputs() {
        assert_eq!(to_iso_date(None), None);
        assert_eq!(date(json!(null)), None);
        assert_eq!(date(json!("")), None);
    }

    #[test]
    fn test_amount_with_currency_and_grouping() {
        assert_eq!(decimal(json!("AED 12,500.50")), Some(12500.50));
    }

    #[test]
    fn test_amount_lowercase_token() {
        assert_eq!(decimal(json!("aed 900")), Some(900.0));
    }

    #[test]
    fn test_amount_mixed_case_token_fails() {
        assert_eq!(decimal(json!("Aed 900")), None);
    }

    #[test]
    fn test_amount_numeric_passthrough() {
        assert_eq!(decimal(json!(12500.5)), Some(12500.5));
        assert_eq!(decimal(json!(0)), Some(0.0));
    }

    #[test]
    fn test_amount_missing_inputs() {
        assert_eq!(to_decimal(None), None);
        assert_eq!(decimal(json!(null)), None);
        assert_eq!(decimal(json!("")), None);
        assert_eq!(decimal(json!("AED ,")), None);
    }

    #[test]
    fn test_amount_garbage_is_missing() {
        assert_eq!(decimal(json!("twelve")), None);
    }
}
