//! Per-member expense summary.

use rust_decimal::Decimal;
use serde::Serialize;
use tripsettle_shared::{ExpenseId, MemberId};

use super::config::SettlementConfig;
use super::normalize;
use crate::expense::ExpenseItem;

/// Totals for one member across the whole trip, for the member detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    /// The member being summarized.
    pub member_id: MemberId,
    /// Total the member fronted, in home-currency units.
    pub total_paid: Decimal,
    /// Total of the member's shares, in home-currency units.
    pub total_share: Decimal,
    /// `total_paid - total_share`; agrees with the member's sheet balance.
    pub net: Decimal,
    /// Expenses the member paid or shares, newest first, dateless last.
    pub related: Vec<ExpenseId>,
}

impl MemberSummary {
    /// Summarizes one member's involvement in an expense snapshot.
    #[must_use]
    pub fn for_member(
        member_id: &MemberId,
        expenses: &[ExpenseItem],
        config: &SettlementConfig,
    ) -> Self {
        let mut related: Vec<&ExpenseItem> = expenses
            .iter()
            .filter(|e| e.payer_id == *member_id || e.is_split_with(member_id))
            .collect();
        related.sort_by(|a, b| b.date.cmp(&a.date));

        let mut total_paid = Decimal::ZERO;
        let mut total_share = Decimal::ZERO;
        for expense in &related {
            if expense.payer_id == *member_id {
                total_paid += normalize::converted_amount(expense, config);
            }
            total_share += normalize::member_share(expense, member_id, config);
        }

        Self {
            member_id: member_id.clone(),
            total_paid,
            total_share,
            net: total_paid - total_share,
            related: related.into_iter().map(|e| e.id.clone()).collect(),
        }
    }
}
