//! Decoding of raw expense records.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;
use tripsettle_shared::{CurrencyCode, ExpenseId, MemberId};

use super::error::DecodeError;
use super::value::{lenient_date, lenient_decimal, lenient_id_list, lenient_string};
use crate::expense::{ExpenseCategory, ExpenseItem};

/// Decodes one raw expense record.
///
/// A non-numeric amount becomes zero and a non-numeric rate becomes `None`
/// (the normalizer then applies the configured fallback), matching the
/// engine's prefer-a-wrong-looking-zero-over-a-crash policy. Only a record
/// that is not an object or carries no id is rejected.
pub fn decode_expense(record: &Value) -> Result<ExpenseItem, DecodeError> {
    let fields = record.as_object().ok_or(DecodeError::NotAnObject)?;

    let id = match fields.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => ExpenseId::from(id),
        _ => return Err(DecodeError::MissingId),
    };

    Ok(ExpenseItem {
        id,
        amount: lenient_decimal(fields.get("amount")).unwrap_or(Decimal::ZERO),
        currency: CurrencyCode::new(lenient_string(fields.get("currency"))),
        exchange_rate: lenient_decimal(fields.get("exchangeRate")),
        category: ExpenseCategory::from_wire(&lenient_string(fields.get("category"))),
        description: lenient_string(fields.get("description")),
        payer_id: MemberId::new(lenient_string(fields.get("payerId"))),
        split_with: lenient_id_list(fields.get("splitWith"))
            .into_iter()
            .map(MemberId::new)
            .collect(),
        date: lenient_date(fields.get("date")),
    })
}

/// Decodes an expense snapshot, dropping records without an identity.
pub fn decode_expenses(records: &[Value]) -> Vec<ExpenseItem> {
    records
        .iter()
        .filter_map(|record| match decode_expense(record) {
            Ok(expense) => Some(expense),
            Err(err) => {
                warn!(%err, "dropping undecodable expense record");
                None
            }
        })
        .collect()
}
