//! Per-member balance aggregation.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripsettle_shared::MemberId;

use super::config::SettlementConfig;
use super::normalize;
use crate::expense::ExpenseItem;
use crate::member::Roster;

/// Net balance for one member, in home-currency units.
///
/// Positive means the member is owed money; negative means the member owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBalance {
    /// The member this balance belongs to.
    pub member_id: MemberId,
    /// Net balance: total paid minus total share.
    pub balance: Decimal,
}

/// Signed balances for every member of the roster.
///
/// Derived data: recomputed from scratch on every call, never persisted or
/// incrementally updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    entries: Vec<MemberBalance>,
}

impl BalanceSheet {
    /// Aggregates an expense snapshot into per-member balances.
    ///
    /// Every roster member appears, zero-activity members included. Payments
    /// by unknown payers and shares of unknown members are silently skipped so
    /// a stale reference can never fail a recompute. The share divisor is the
    /// full split size, known or not. An empty split contributes nothing.
    #[must_use]
    pub fn compute(expenses: &[ExpenseItem], roster: &Roster, config: &SettlementConfig) -> Self {
        let mut totals: HashMap<&MemberId, Decimal> = roster
            .members()
            .iter()
            .map(|member| (&member.id, Decimal::ZERO))
            .collect();

        for expense in expenses {
            if expense.split_with.is_empty() {
                continue;
            }

            let amount = normalize::converted_amount(expense, config);
            let share = amount / Decimal::from(expense.split_count());

            if let Some(balance) = totals.get_mut(&expense.payer_id) {
                *balance += amount;
            }
            for member in &expense.split_with {
                if let Some(balance) = totals.get_mut(member) {
                    *balance -= share;
                }
            }
        }

        let entries = roster
            .members()
            .iter()
            .map(|member| MemberBalance {
                member_id: member.id.clone(),
                balance: totals[&member.id],
            })
            .collect();

        Self { entries }
    }

    /// Builds a sheet from already-computed balances.
    #[must_use]
    pub fn from_entries(entries: Vec<MemberBalance>) -> Self {
        Self { entries }
    }

    /// Returns the balances in roster order.
    #[must_use]
    pub fn entries(&self) -> &[MemberBalance] {
        &self.entries
    }

    /// Returns one member's balance, if the member is on the sheet.
    #[must_use]
    pub fn get(&self, member: &MemberId) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| entry.member_id == *member)
            .map(|entry| entry.balance)
    }

    /// Sum of all balances.
    ///
    /// Zero, up to division rounding, whenever every reference in the expense
    /// snapshot resolves against the roster.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.balance).sum()
    }
}
