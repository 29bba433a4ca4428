//! Validation and normalization at the data boundary.
//!
//! Records arrive as loose JSON snapshots from a schemaless document store.
//! Everything is normalized here so the engine past this point can assume
//! well-typed inputs, apart from the degenerate cases it tolerates on purpose
//! (unknown references, empty splits).
//!
//! Decoding is deliberately forgiving: a wrong-typed field becomes its zero
//! value instead of an error, so one bad record can only make its own numbers
//! look off. The only hard failures are records with no usable identity.

mod error;
mod expense;
mod member;
mod value;

pub use error::DecodeError;
pub use expense::{decode_expense, decode_expenses};
pub use member::{decode_member, decode_roster};
