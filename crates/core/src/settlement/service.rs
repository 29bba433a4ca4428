//! Settlement entry point.

use serde::Serialize;
use tracing::debug;

use super::balance::BalanceSheet;
use super::config::SettlementConfig;
use super::planner::{plan_transfers, Transfer};
use crate::expense::ExpenseItem;
use crate::member::Roster;

/// Result of one settlement run.
#[derive(Debug, Clone, Serialize)]
pub struct Settlement {
    /// Per-member net balances, for display.
    pub balances: BalanceSheet,
    /// Suggested payments that settle all debts.
    pub transfers: Vec<Transfer>,
}

/// Computes balances and suggested transfers from a data snapshot.
///
/// Pure and synchronous: the hosting application calls this on every change to
/// its expense or member collections and replaces the previous result
/// wholesale. The planner works on its own copy, so the returned balances are
/// the true per-member nets, not the zeroed working state.
#[must_use]
pub fn compute_settlement(
    expenses: &[ExpenseItem],
    roster: &Roster,
    config: &SettlementConfig,
) -> Settlement {
    let balances = BalanceSheet::compute(expenses, roster, config);
    let transfers = plan_transfers(&balances);

    debug!(
        expenses = expenses.len(),
        members = roster.len(),
        transfers = transfers.len(),
        "settlement recomputed"
    );

    Settlement {
        balances,
        transfers,
    }
}
