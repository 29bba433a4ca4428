//! Boundary decode errors.

use thiserror::Error;

/// Errors raised while decoding raw store records.
///
/// These are the only hard failures in the crate: everything past the decode
/// boundary degrades instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The record is not a JSON object.
    #[error("record is not an object")]
    NotAnObject,

    /// The record has no usable id.
    #[error("record has no id")]
    MissingId,
}
