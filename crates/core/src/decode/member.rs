//! Decoding of raw member records.

use serde_json::Value;
use tracing::warn;
use tripsettle_shared::MemberId;

use super::error::DecodeError;
use super::value::lenient_string;
use crate::member::{Member, Roster};

/// Decodes one raw member record.
///
/// Name and avatar are display-only and default to empty; only the id is
/// required, because every balance and transfer hangs off it.
pub fn decode_member(record: &Value) -> Result<Member, DecodeError> {
    let fields = record.as_object().ok_or(DecodeError::NotAnObject)?;

    let id = match fields.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => MemberId::from(id),
        _ => return Err(DecodeError::MissingId),
    };

    Ok(Member {
        id,
        name: lenient_string(fields.get("name")),
        avatar: lenient_string(fields.get("avatar")),
    })
}

/// Decodes a member snapshot into a roster, dropping records without an id.
pub fn decode_roster(records: &[Value]) -> Roster {
    records
        .iter()
        .filter_map(|record| match decode_member(record) {
            Ok(member) => Some(member),
            Err(err) => {
                warn!(%err, "dropping undecodable member record");
                None
            }
        })
        .collect()
}
