use ballast_core::{AssetClass, LeverageTable, Price, Quantity, TradeDirection};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Flat fee charged on position value (0.1%)
const DEFAULT_FEE_RATE: Decimal = dec!(0.001);

/// Inputs for a trade quote, constructed per UI input change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRequest {
    /// Asset class of the instrument
    pub asset_class: AssetClass,

    /// Current market price
    pub current_price: Price,

    /// Trade direction
    pub direction: TradeDirection,

    /// Number of units to trade
    pub units: Quantity,

    /// Funds the account has available as collateral
    pub available_funds: Decimal,
}

/// Derived costs for a prospective trade
///
/// Freshly computed from a [`TradeRequest`]; has no identity or lifecycle
/// beyond the calculation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeQuote {
    /// Notional value of the position (units x price)
    pub position_value: Decimal,

    /// Leverage applied for the asset class
    pub leverage: Decimal,

    /// Collateral that must be posted
    pub margin_required: Decimal,

    /// Flat execution fee
    pub fee: Decimal,

    /// Margin plus fee
    pub total: Decimal,

    /// Whether available funds cover the required margin
    ///
    /// The fee is informational here; `total` carries the fee-inclusive
    /// figure for callers that want the stricter check.
    pub can_afford: bool,
}

/// Computes position value, margin, fee and affordability for trades
///
/// Holds the leverage table and fee rate as explicit configuration; there
/// is no global state and instances are cheap to clone for tests.
#[derive(Debug, Clone)]
pub struct MarginCalculator {
    table: LeverageTable,
    fee_rate: Decimal,
}

impl MarginCalculator {
    /// Calculator with the standard leverage table and 0.1% fee
    pub fn new() -> Self {
        Self {
            table: LeverageTable::default(),
            fee_rate: DEFAULT_FEE_RATE,
        }
    }

    /// Calculator with a custom leverage table
    pub fn with_table(table: LeverageTable) -> Self {
        Self {
            table,
            fee_rate: DEFAULT_FEE_RATE,
        }
    }

    /// Override the fee rate
    pub fn with_fee_rate(mut self, fee_rate: Decimal) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    /// The leverage table in use
    pub fn table(&self) -> &LeverageTable {
        &self.table
    }

    /// Quote the full cost breakdown for a prospective trade
    ///
    /// Zero units produce an all-zero quote that still reports affordable;
    /// rejecting zero-size trades is the caller's concern, not this
    /// module's.
    pub fn quote(&self, request: &TradeRequest) -> TradeQuote {
        let leverage = self.table.leverage(request.asset_class);
        let position_value = request.units * request.current_price;
        let margin_required = position_value / leverage;
        let fee = position_value * self.fee_rate;
        let total = margin_required + fee;
        let can_afford = request.available_funds >= margin_required;

        debug!(
            "Trade quote: class={}, direction={}, units={}, price={}, margin={}, fee={}, affordable={}",
            request.asset_class,
            request.direction,
            request.units,
            request.current_price,
            margin_required,
            fee,
            can_afford
        );

        TradeQuote {
            position_value,
            leverage,
            margin_required,
            fee,
            total,
            can_afford,
        }
    }

    /// Margin required to carry a position of the given notional value
    pub fn margin_required(&self, asset_class: AssetClass, position_value: Decimal) -> Decimal {
        position_value / self.table.leverage(asset_class)
    }

    /// Largest position size the available funds can carry at full leverage
    ///
    /// Satisfies `size * price / leverage <= funds` up to rounding. A zero
    /// price yields zero rather than dividing.
    pub fn max_position_size(
        &self,
        asset_class: AssetClass,
        available_funds: Decimal,
        current_price: Price,
    ) -> Quantity {
        if current_price.is_zero() {
            return Decimal::ZERO;
        }
        available_funds * self.table.leverage(asset_class) / current_price
    }
}

impl Default for MarginCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize free-text unit input to a quantity
///
/// The UI delivers units as raw strings; anything that does not parse as a
/// decimal becomes zero, cascading to a zero-valued quote downstream.
/// The whole string must parse: "12abc" is zero, not 12. That is stricter
/// than prefix-parsing input conventions and intentional - a partially
/// numeric entry is treated as a typo, not an order size.
pub fn parse_units(input: &str) -> Quantity {
    Decimal::from_str(input.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forex_request(units: Decimal, price: Decimal, funds: Decimal) -> TradeRequest {
        TradeRequest {
            asset_class: AssetClass::Forex,
            current_price: price,
            direction: TradeDirection::Buy,
            units,
            available_funds: funds,
        }
    }

    #[test]
    fn test_forex_quote() {
        let calc = MarginCalculator::new();
        let quote = calc.quote(&forex_request(dec!(1000), dec!(1.10), dec!(500)));

        assert_eq!(quote.leverage, dec!(100));
        assert_eq!(quote.position_value, dec!(1100));
        assert_eq!(quote.margin_required, dec!(11));
        assert_eq!(quote.fee, dec!(1.1));
        assert_eq!(quote.total, dec!(12.1));
        assert!(quote.can_afford);
    }

    #[test]
    fn test_insufficient_funds() {
        let calc = MarginCalculator::new();
        let quote = calc.quote(&forex_request(dec!(1000), dec!(1.10), dec!(10)));

        assert_eq!(quote.margin_required, dec!(11));
        assert!(!quote.can_afford);
    }

    #[test]
    fn test_fee_not_in_afford_check() {
        let calc = MarginCalculator::new();
        // Funds cover margin (11) but not margin plus fee (12.1)
        let quote = calc.quote(&forex_request(dec!(1000), dec!(1.10), dec!(11.5)));

        assert!(quote.can_afford);
        assert!(quote.total > quote.margin_required);
    }

    #[test]
    fn test_zero_units_quote() {
        let calc = MarginCalculator::new();
        let quote = calc.quote(&forex_request(dec!(0), dec!(1.10), dec!(500)));

        assert_eq!(quote.position_value, Decimal::ZERO);
        assert_eq!(quote.margin_required, Decimal::ZERO);
        assert_eq!(quote.fee, Decimal::ZERO);
        // Zero-size trades are not rejected here
        assert!(quote.can_afford);
    }

    #[test]
    fn test_margin_required() {
        let calc = MarginCalculator::new();

        // Stocks at 20x: 10000 notional needs 500 margin
        assert_eq!(
            calc.margin_required(AssetClass::Stocks, dec!(10000)),
            dec!(500)
        );
        // Crypto at 50x: 10000 notional needs 200 margin
        assert_eq!(
            calc.margin_required(AssetClass::Crypto, dec!(10000)),
            dec!(200)
        );
    }

    #[test]
    fn test_max_position_size_round_trip() {
        let calc = MarginCalculator::new();
        let funds = dec!(500);
        let price = dec!(1.25);

        let size = calc.max_position_size(AssetClass::Forex, funds, price);
        let margin = size * price / calc.table().leverage(AssetClass::Forex);

        assert_eq!(margin, funds);
    }

    #[test]
    fn test_max_position_size_zero_price() {
        let calc = MarginCalculator::new();
        assert_eq!(
            calc.max_position_size(AssetClass::Forex, dec!(500), dec!(0)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_custom_fee_rate() {
        let calc = MarginCalculator::new().with_fee_rate(dec!(0.002));
        let quote = calc.quote(&forex_request(dec!(1000), dec!(1.10), dec!(500)));

        assert_eq!(quote.fee, dec!(2.2));
        assert_eq!(quote.total, dec!(13.2));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("1000"), dec!(1000));
        assert_eq!(parse_units(" 2.5 "), dec!(2.5));
        assert_eq!(parse_units("abc"), Decimal::ZERO);
        assert_eq!(parse_units(""), Decimal::ZERO);
        // Whole string must parse; a numeric prefix is not enough
        assert_eq!(parse_units("12abc"), Decimal::ZERO);
        assert_eq!(parse_units("1.2.3"), Decimal::ZERO);
        // Negative input passes through; callers decide whether to reject
        assert_eq!(parse_units("-3"), dec!(-3));
    }
}
