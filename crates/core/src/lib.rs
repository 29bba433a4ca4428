//! Settlement engine for Tripsettle.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. The hosting application hands it snapshots of the member
//! roster and the expense list; it hands back per-member balances and a short
//! list of suggested transfers that settles all debts.
//!
//! # Modules
//!
//! - `member` - Trip members and the roster snapshot
//! - `expense` - Shared expense records
//! - `decode` - Validation and normalization of raw store records
//! - `settlement` - Normalization, balance aggregation and transfer planning
//! - `refund` - Shopping tax-refund calculator

pub mod decode;
pub mod expense;
pub mod member;
pub mod refund;
pub mod settlement;
