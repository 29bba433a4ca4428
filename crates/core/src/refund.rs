//! Shopping tax-refund calculator.
//!
//! Mirrors the in-app helper for tax-free shopping: the refundable consumption
//! tax on a receipt, minus the handling fee some counters withhold.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Consumption tax rate applied to a receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRate {
    /// Reduced 8% rate (groceries, takeaway food).
    Reduced,
    /// Standard 10% rate.
    #[default]
    Standard,
}

impl TaxRate {
    /// The rate as a decimal fraction.
    #[must_use]
    pub fn fraction(self) -> Decimal {
        match self {
            Self::Reduced => Decimal::new(8, 2),
            Self::Standard => Decimal::new(10, 2),
        }
    }
}

/// Input for one refund estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRequest {
    /// Receipt total.
    pub price: Decimal,
    /// Whether `price` already includes tax.
    pub tax_included: bool,
    /// Tax rate on the receipt.
    pub tax_rate: TaxRate,
    /// Whether the counter withholds the 1.55% handling fee.
    pub service_fee: bool,
}

/// Refund estimate, each figure floored to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefundEstimate {
    /// Tax contained in (or on top of) the receipt total.
    pub tax_amount: i64,
    /// Handling fee withheld by the counter.
    pub fee: i64,
    /// What actually comes back.
    pub final_refund: i64,
}

/// Estimates the refund for one receipt.
///
/// The fee is charged on the tax-inclusive total. Flooring happens on each
/// displayed figure; the net is floored from the exact tax minus the exact
/// fee, so it can differ from `tax_amount - fee` by one unit.
#[must_use]
pub fn estimate_refund(request: &RefundRequest) -> RefundEstimate {
    let price = request.price;
    let rate = request.tax_rate.fraction();

    let tax_amount = if request.tax_included {
        price - price / (Decimal::ONE + rate)
    } else {
        price * rate
    };

    let total_with_tax = if request.tax_included {
        price
    } else {
        price * (Decimal::ONE + rate)
    };
    let fee = if request.service_fee {
        total_with_tax * Decimal::new(155, 4)
    } else {
        Decimal::ZERO
    };

    RefundEstimate {
        tax_amount: floor_units(tax_amount),
        fee: floor_units(fee),
        final_refund: floor_units(tax_amount - fee),
    }
}

fn floor_units(amount: Decimal) -> i64 {
    amount.floor().to_i64().unwrap_or(0)
}
