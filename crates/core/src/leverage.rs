use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::asset::AssetClass;

/// Leverage applied to asset classes the table has no entry for, and to
/// symbols that do not parse as a known class at all.
///
/// Historically two lookup paths disagreed on this value (1 vs 10). The
/// table is now the single source of truth and carries one documented
/// default; callers must not hardcode their own.
pub const DEFAULT_LEVERAGE: Decimal = dec!(10);

/// Errors raised when building leverage configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Max leverage must be positive, got {0}")]
    InvalidLeverage(Decimal),

    #[error("Min margin fraction must be in (0, 1], got {0}")]
    InvalidMarginFraction(Decimal),
}

/// Leverage limits for a single asset class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeverageConfig {
    /// Asset class this entry applies to
    pub asset_class: AssetClass,

    /// Maximum leverage multiple (e.g. 100 for 100:1 forex)
    pub max_leverage: Decimal,

    /// Minimum fraction of position value posted as margin
    pub min_margin_fraction: Decimal,
}

impl LeverageConfig {
    /// Create a validated leverage entry
    pub fn new(
        asset_class: AssetClass,
        max_leverage: Decimal,
        min_margin_fraction: Decimal,
    ) -> Result<Self, ConfigError> {
        if max_leverage <= Decimal::ZERO {
            return Err(ConfigError::InvalidLeverage(max_leverage));
        }
        if min_margin_fraction <= Decimal::ZERO || min_margin_fraction > Decimal::ONE {
            return Err(ConfigError::InvalidMarginFraction(min_margin_fraction));
        }
        Ok(Self {
            asset_class,
            max_leverage,
            min_margin_fraction,
        })
    }

    /// Entry where margin fraction is exactly the reciprocal of leverage
    pub fn from_leverage(
        asset_class: AssetClass,
        max_leverage: Decimal,
    ) -> Result<Self, ConfigError> {
        if max_leverage <= Decimal::ZERO {
            return Err(ConfigError::InvalidLeverage(max_leverage));
        }
        Ok(Self {
            asset_class,
            max_leverage,
            min_margin_fraction: Decimal::ONE / max_leverage,
        })
    }
}

/// Process-wide leverage table, one entry per asset class
///
/// An explicit configuration object passed by reference, not a module
/// global - callers own its lifecycle and tests can build custom tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeverageTable {
    entries: HashMap<AssetClass, LeverageConfig>,
    default_leverage: Decimal,
}

impl Default for LeverageTable {
    fn default() -> Self {
        // Product risk policy: crypto 50x, forex 100x, stocks 20x,
        // indices 50x, commodities 50x.
        let mut entries = HashMap::new();
        for (class, leverage) in [
            (AssetClass::Crypto, dec!(50)),
            (AssetClass::Forex, dec!(100)),
            (AssetClass::Stocks, dec!(20)),
            (AssetClass::Indices, dec!(50)),
            (AssetClass::Commodities, dec!(50)),
        ] {
            entries.insert(
                class,
                LeverageConfig {
                    asset_class: class,
                    max_leverage: leverage,
                    min_margin_fraction: Decimal::ONE / leverage,
                },
            );
        }
        Self {
            entries,
            default_leverage: DEFAULT_LEVERAGE,
        }
    }
}

impl LeverageTable {
    /// Table with the standard product entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table with a custom fallback leverage
    pub fn with_default_leverage(default_leverage: Decimal) -> Result<Self, ConfigError> {
        if default_leverage <= Decimal::ZERO {
            return Err(ConfigError::InvalidLeverage(default_leverage));
        }
        Ok(Self {
            entries: HashMap::new(),
            default_leverage,
        })
    }

    /// Insert or replace the entry for a class
    pub fn set(&mut self, config: LeverageConfig) {
        self.entries.insert(config.asset_class, config);
    }

    /// Leverage for a known asset class
    ///
    /// Every class has exactly one entry in the default table; the fallback
    /// only applies to custom tables with missing entries.
    pub fn leverage(&self, asset_class: AssetClass) -> Decimal {
        self.entries
            .get(&asset_class)
            .map(|c| c.max_leverage)
            .unwrap_or(self.default_leverage)
    }

    /// Leverage for a free-text class name
    ///
    /// Case-insensitive; unknown input silently falls back to the default
    /// leverage rather than raising an error. That is the chosen policy:
    /// an unrecognized class quotes conservative leverage, it does not
    /// block the calculation.
    pub fn leverage_for_symbol(&self, asset_class: &str) -> Decimal {
        match AssetClass::parse(asset_class) {
            Some(class) => self.leverage(class),
            None => self.default_leverage,
        }
    }

    /// Minimum margin fraction for a class (reciprocal of leverage when no
    /// entry exists)
    pub fn min_margin_fraction(&self, asset_class: AssetClass) -> Decimal {
        self.entries
            .get(&asset_class)
            .map(|c| c.min_margin_fraction)
            .unwrap_or(Decimal::ONE / self.default_leverage)
    }

    /// Full entry for a class, if present
    pub fn config(&self, asset_class: AssetClass) -> Option<&LeverageConfig> {
        self.entries.get(&asset_class)
    }

    /// The fallback leverage for unknown classes
    pub fn default_leverage(&self) -> Decimal {
        self.default_leverage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_entries() {
        let table = LeverageTable::default();

        assert_eq!(table.leverage(AssetClass::Crypto), dec!(50));
        assert_eq!(table.leverage(AssetClass::Forex), dec!(100));
        assert_eq!(table.leverage(AssetClass::Stocks), dec!(20));
        assert_eq!(table.leverage(AssetClass::Indices), dec!(50));
        assert_eq!(table.leverage(AssetClass::Commodities), dec!(50));
    }

    #[test]
    fn test_every_class_has_an_entry() {
        let table = LeverageTable::default();
        for class in AssetClass::ALL {
            assert!(table.config(class).is_some());
        }
    }

    #[test]
    fn test_margin_fraction_is_reciprocal() {
        let table = LeverageTable::default();
        for class in AssetClass::ALL {
            let config = table.config(class).unwrap();
            assert_eq!(
                config.min_margin_fraction,
                Decimal::ONE / config.max_leverage
            );
        }
    }

    #[test]
    fn test_symbol_lookup_case_insensitive() {
        let table = LeverageTable::default();
        assert_eq!(
            table.leverage_for_symbol("CRYPTO"),
            table.leverage_for_symbol("crypto")
        );
        assert_eq!(table.leverage_for_symbol("Forex"), dec!(100));
        assert_eq!(table.leverage_for_symbol("stock"), dec!(20));
        assert_eq!(table.leverage_for_symbol("indices"), dec!(50));
    }

    #[test]
    fn test_unknown_symbol_falls_back() {
        let table = LeverageTable::default();
        assert_eq!(table.leverage_for_symbol("bonds"), DEFAULT_LEVERAGE);
        assert_eq!(table.leverage_for_symbol(""), DEFAULT_LEVERAGE);
    }

    #[test]
    fn test_custom_entry_override() {
        let mut table = LeverageTable::default();
        table.set(
            LeverageConfig::from_leverage(AssetClass::Crypto, dec!(25)).unwrap(),
        );

        assert_eq!(table.leverage(AssetClass::Crypto), dec!(25));
        assert_eq!(
            table.min_margin_fraction(AssetClass::Crypto),
            dec!(0.04)
        );
    }

    #[test]
    fn test_config_validation() {
        let bad_leverage = LeverageConfig::new(AssetClass::Forex, dec!(0), dec!(0.01));
        assert_eq!(bad_leverage, Err(ConfigError::InvalidLeverage(dec!(0))));

        let bad_fraction = LeverageConfig::new(AssetClass::Forex, dec!(100), dec!(1.5));
        assert_eq!(
            bad_fraction,
            Err(ConfigError::InvalidMarginFraction(dec!(1.5)))
        );

        let ok = LeverageConfig::new(AssetClass::Forex, dec!(100), dec!(0.01));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_custom_default_leverage() {
        let table = LeverageTable::with_default_leverage(dec!(5)).unwrap();
        assert_eq!(table.leverage(AssetClass::Forex), dec!(5));
        assert_eq!(table.leverage_for_symbol("anything"), dec!(5));

        assert!(LeverageTable::with_default_leverage(dec!(-1)).is_err());
    }
}
