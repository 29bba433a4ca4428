//! Common types used across the application.

pub mod currency;
pub mod id;

pub use currency::CurrencyCode;
pub use id::{ExpenseId, MemberId};
