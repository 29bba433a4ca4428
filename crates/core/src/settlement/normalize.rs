//! Expense normalization into the home currency.

use rust_decimal::Decimal;
use tripsettle_shared::MemberId;

use super::config::SettlementConfig;
use crate::expense::ExpenseItem;

/// Returns the exchange rate to apply to an expense.
///
/// The expense's own rate wins when present and positive. Otherwise the home
/// currency converts at 1 and everything else at the configured default rate.
#[must_use]
pub fn effective_rate(expense: &ExpenseItem, config: &SettlementConfig) -> Decimal {
    match expense.exchange_rate {
        Some(rate) if rate > Decimal::ZERO => rate,
        _ if expense.currency == config.home_currency => Decimal::ONE,
        _ => config.default_rate,
    }
}

/// Converts an expense amount into home-currency units.
#[must_use]
pub fn converted_amount(expense: &ExpenseItem, config: &SettlementConfig) -> Decimal {
    expense.amount * effective_rate(expense, config)
}

/// Returns the share of an expense carried by one member.
///
/// Zero when the member is not in the split. Zero for an empty split as well:
/// such an expense is absorbed rather than distributed.
#[must_use]
pub fn member_share(
    expense: &ExpenseItem,
    member: &MemberId,
    config: &SettlementConfig,
) -> Decimal {
    if expense.split_with.is_empty() || !expense.is_split_with(member) {
        return Decimal::ZERO;
    }
    converted_amount(expense, config) / Decimal::from(expense.split_count())
}
