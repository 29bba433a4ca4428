//! Shared expense records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripsettle_shared::{CurrencyCode, ExpenseId, MemberId};

/// Spending category. Descriptive only - the settlement math never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Food and drink.
    Food,
    /// Trains, taxis, fuel.
    Transport,
    /// Shopping.
    Shopping,
    /// Lodging. The store schema calls this "Hotel".
    #[serde(rename = "Hotel")]
    Accommodation,
    /// Attraction and event tickets.
    Ticket,
    /// Everything else, including categories this version does not know.
    #[default]
    Other,
}

impl ExpenseCategory {
    /// Maps a raw category string to a category, `Other` for anything unknown.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "Food" => Self::Food,
            "Transport" => Self::Transport,
            "Shopping" => Self::Shopping,
            "Hotel" => Self::Accommodation,
            "Ticket" => Self::Ticket,
            _ => Self::Other,
        }
    }
}

/// One shared expenditure.
///
/// `amount` is in `currency`; `exchange_rate` is home-currency units per one
/// unit of `currency`, `None` when the record carries no usable rate (the
/// normalizer then falls back to the configured default). `split_with` is the
/// set of members sharing the cost; the payer may or may not be included. An
/// empty split means the expense contributes nothing to anyone's balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Opaque id assigned by the document store.
    pub id: ExpenseId,
    /// Positive amount in `currency`.
    pub amount: Decimal,
    /// Currency the amount was paid in.
    pub currency: CurrencyCode,
    /// Home-currency units per one unit of `currency`.
    pub exchange_rate: Option<Decimal>,
    /// Spending category.
    pub category: ExpenseCategory,
    /// Free-form description.
    pub description: String,
    /// The member who fronted the money.
    pub payer_id: MemberId,
    /// Members sharing the cost.
    pub split_with: Vec<MemberId>,
    /// Day the expense happened, when the record carried a parseable date.
    pub date: Option<NaiveDate>,
}

impl ExpenseItem {
    /// Number of members sharing the cost.
    #[must_use]
    pub fn split_count(&self) -> usize {
        self.split_with.len()
    }

    /// Returns true if the member shares this expense.
    #[must_use]
    pub fn is_split_with(&self, member: &MemberId) -> bool {
        self.split_with.contains(member)
    }
}
