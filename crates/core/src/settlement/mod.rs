//! Balance aggregation and transfer planning.
//!
//! Data flows one way: expense snapshots are normalized into home-currency
//! amounts, aggregated into per-member net balances, then matched into a short
//! list of suggested transfers. No stage mutates another's output, and every
//! stage is a pure function recomputed from scratch on each call.

pub mod balance;
pub mod config;
pub mod normalize;
pub mod planner;
pub mod service;
pub mod summary;

#[cfg(test)]
mod props;

pub use balance::{BalanceSheet, MemberBalance};
pub use config::SettlementConfig;
pub use planner::{plan_transfers, Transfer, SETTLED_THRESHOLD};
pub use service::{compute_settlement, Settlement};
pub use summary::MemberSummary;
