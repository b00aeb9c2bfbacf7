use ballast_core::{AssetClass, LeverageTable, Price, Quantity, TradeDirection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Remaining-margin fraction at which a position is forcibly closed
pub const LIQUIDATION_MARGIN_LEVEL: Decimal = dec!(0.2);

/// Remaining-margin fraction at which the trader is warned to add funds
///
/// Higher than the liquidation threshold, so the margin-call price sits
/// closer to entry and triggers first. The two values mirror the risk
/// classifier's danger (50%) and critical (20%) breakpoints.
pub const MARGIN_CALL_MARGIN_LEVEL: Decimal = dec!(0.5);

/// Price at which a position's margin level falls to the given threshold
///
/// The threshold is the fraction of posted margin that must remain: the
/// trigger fires once losses have consumed `(1 - threshold)` of
/// `margin_used = entry * size / leverage`. Buys trigger below entry and
/// are floored at zero; sells trigger above entry. A zero position size
/// has no margin at risk and returns the entry price unchanged rather
/// than dividing by zero.
pub fn liquidation_price(
    table: &LeverageTable,
    direction: TradeDirection,
    entry_price: Price,
    position_size: Quantity,
    asset_class: AssetClass,
    margin_level_threshold: Decimal,
) -> Price {
    if position_size.is_zero() {
        return entry_price;
    }

    let leverage = table.leverage(asset_class);
    let margin_used = entry_price * position_size / leverage;
    let loss_capacity = margin_used * (Decimal::ONE - margin_level_threshold);
    let offset = loss_capacity / position_size;

    match direction {
        TradeDirection::Buy => (entry_price - offset).max(Decimal::ZERO),
        TradeDirection::Sell => entry_price + offset,
    }
}

/// Price at which a margin call fires for the position
///
/// Same computation as [`liquidation_price`] at the less extreme
/// margin-call threshold.
pub fn margin_call_price(
    table: &LeverageTable,
    direction: TradeDirection,
    entry_price: Price,
    position_size: Quantity,
    asset_class: AssetClass,
) -> Price {
    liquidation_price(
        table,
        direction,
        entry_price,
        position_size,
        asset_class,
        MARGIN_CALL_MARGIN_LEVEL,
    )
}

/// Whether the current price has crossed the position's liquidation price
///
/// Buys trigger when the price falls to or below the liquidation price,
/// sells when it rises to or above it.
pub fn needs_liquidation(
    table: &LeverageTable,
    direction: TradeDirection,
    entry_price: Price,
    current_price: Price,
    position_size: Quantity,
    asset_class: AssetClass,
    margin_level_threshold: Decimal,
) -> bool {
    let trigger = liquidation_price(
        table,
        direction,
        entry_price,
        position_size,
        asset_class,
        margin_level_threshold,
    );

    match direction {
        TradeDirection::Buy => current_price <= trigger,
        TradeDirection::Sell => current_price >= trigger,
    }
}
