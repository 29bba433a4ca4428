//! Shared types for Tripsettle.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The currency-code newtype

pub mod types;

pub use types::{CurrencyCode, ExpenseId, MemberId};
