//! Greedy transfer planning.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripsettle_shared::MemberId;

use super::balance::{BalanceSheet, MemberBalance};

/// Balances within one whole home-currency unit of zero are treated as
/// settled, so division residue from uneven splits never produces sub-unit
/// transfers.
pub const SETTLED_THRESHOLD: Decimal = Decimal::ONE;

/// A suggested peer-to-peer payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The member who pays.
    pub from: MemberId,
    /// The member who receives.
    pub to: MemberId,
    /// Whole home-currency units, floored from the exact matched amount.
    pub amount: i64,
}

/// Plans transfers that settle every debt on the sheet.
///
/// Greedy largest-debt/largest-credit matching: debtors sorted most-negative
/// first and creditors largest first are walked with two cursors, each match
/// transferring the smaller of the two outstanding magnitudes. The matching
/// destructively zeroes balances as it goes, so it runs on a working copy and
/// the sheet passed in stays untouched for display. Ties sort by member id,
/// which makes the plan deterministic for a given snapshot.
///
/// The recorded amount is floored to a whole unit (and dropped entirely when
/// it floors to zero), but the exact amount is consumed from both working
/// balances so rounding never accumulates across matches. Each match settles
/// at least one side below the threshold, which bounds the plan at one
/// transfer less than the number of unsettled members.
#[must_use]
pub fn plan_transfers(sheet: &BalanceSheet) -> Vec<Transfer> {
    let mut debtors: Vec<MemberBalance> = sheet
        .entries()
        .iter()
        .filter(|entry| entry.balance < -SETTLED_THRESHOLD)
        .cloned()
        .collect();
    let mut creditors: Vec<MemberBalance> = sheet
        .entries()
        .iter()
        .filter(|entry| entry.balance > SETTLED_THRESHOLD)
        .cloned()
        .collect();

    debtors.sort_by(|a, b| {
        a.balance
            .cmp(&b.balance)
            .then_with(|| a.member_id.cmp(&b.member_id))
    });
    creditors.sort_by(|a, b| {
        b.balance
            .cmp(&a.balance)
            .then_with(|| a.member_id.cmp(&b.member_id))
    });

    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let matched = debtors[i].balance.abs().min(creditors[j].balance);

        let recorded = matched.floor().to_i64().unwrap_or(0);
        if recorded > 0 {
            transfers.push(Transfer {
                from: debtors[i].member_id.clone(),
                to: creditors[j].member_id.clone(),
                amount: recorded,
            });
        }

        debtors[i].balance += matched;
        creditors[j].balance -= matched;

        if debtors[i].balance.abs() < SETTLED_THRESHOLD {
            i += 1;
        }
        if creditors[j].balance < SETTLED_THRESHOLD {
            j += 1;
        }
    }

    transfers
}
