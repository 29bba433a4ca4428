//! Settlement configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripsettle_shared::CurrencyCode;

/// Knobs the hosting application feeds into a settlement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// The home currency every amount is converted into.
    pub home_currency: CurrencyCode,
    /// Rate applied to foreign-currency expenses that carry no usable rate of
    /// their own. Home-currency expenses always convert at 1.
    pub default_rate: Decimal,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            home_currency: CurrencyCode::new("TWD"),
            // JPY -> TWD ballpark, the rate the app ships with.
            default_rate: Decimal::new(22, 2),
        }
    }
}
