use ballast_core::{Price, Quantity, TradeDirection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Unrealized profit/loss for an open position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlBreakdown {
    /// Absolute profit or loss in quote currency
    pub pnl: Decimal,

    /// P&L as a percentage of the position's entry value
    pub pnl_percentage: Decimal,

    /// Zero P&L counts as profit - a deliberate tie-break, so a position
    /// at exactly breakeven renders green, not red
    pub is_profit: bool,
}

/// Compute unrealized P&L from entry price, current price and direction
///
/// Buy profits when the price rises, sell when it falls. A zero entry
/// price yields a zero percentage rather than dividing.
pub fn calculate_pnl(
    entry_price: Price,
    current_price: Price,
    direction: TradeDirection,
    units: Quantity,
) -> PnlBreakdown {
    let pnl = match direction {
        TradeDirection::Buy => units * (current_price - entry_price),
        TradeDirection::Sell => units * (entry_price - current_price),
    };

    let entry_value = units * entry_price;
    let pnl_percentage = if entry_value.is_zero() {
        Decimal::ZERO
    } else {
        pnl / entry_value * dec!(100)
    };

    PnlBreakdown {
        pnl,
        pnl_percentage,
        is_profit: pnl >= Decimal::ZERO,
    }
}
