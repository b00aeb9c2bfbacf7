//! Ballast Calculators
//!
//! Pure trade arithmetic: position value, required margin, fees,
//! unrealized P&L and liquidation trigger prices. Every function here is
//! synchronous, side-effect-free and total over its numeric domain - the
//! guards in place of error returns are deliberate policy (see the
//! individual modules). Division by zero never happens; unknown asset
//! classes quote the table's documented fallback leverage.

pub mod liquidation;
pub mod margin;
pub mod pnl;

pub use liquidation::{
    liquidation_price, margin_call_price, needs_liquidation, LIQUIDATION_MARGIN_LEVEL,
    MARGIN_CALL_MARGIN_LEVEL,
};
pub use margin::{parse_units, MarginCalculator, TradeQuote, TradeRequest};
pub use pnl::{calculate_pnl, PnlBreakdown};
