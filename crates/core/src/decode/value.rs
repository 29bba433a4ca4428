//! Lenient readers for loose JSON values.
//!
//! The document store enforces no schema, so numbers show up as JSON numbers
//! or as strings, and any field can be missing entirely. Readers here never
//! fail; they return a fallback instead.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

/// Reads a decimal from a JSON number or a numeric string.
pub(super) fn lenient_decimal(value: Option<&Value>) -> Option<Decimal> {
    match value {
        Some(Value::Number(n)) => n.to_string().parse().ok(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads a string field, empty when missing or not a string.
pub(super) fn lenient_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Reads a `YYYY-MM-DD` date, also accepting a longer ISO timestamp prefix.
pub(super) fn lenient_date(value: Option<&Value>) -> Option<NaiveDate> {
    match value {
        Some(Value::String(s)) => s
            .get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()),
        _ => None,
    }
}

/// Reads an array of string ids, dropping non-string entries.
pub(super) fn lenient_id_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
