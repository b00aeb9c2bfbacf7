use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Discrete risk tier derived from an account's margin level
///
/// Ordered by severity: `Safe < Warning < Danger < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Margin level above 100% - position is comfortably collateralized
    Safe,
    /// Margin level above 50% - trader should watch exposure
    Warning,
    /// Margin level above 20% - margin call territory
    Danger,
    /// Margin level at or below 20% - liquidation imminent
    Critical,
}

impl RiskLevel {
    /// Classify a margin level percentage into a risk tier
    ///
    /// Strict `>` at each breakpoint: exact ties fall to the lower tier
    /// (a margin level of exactly 100 is Warning, not Safe). Total over
    /// all inputs, including negative margin levels.
    pub fn from_margin_level(margin_level: Decimal) -> Self {
        if margin_level > dec!(100) {
            RiskLevel::Safe
        } else if margin_level > dec!(50) {
            RiskLevel::Warning
        } else if margin_level > dec!(20) {
            RiskLevel::Danger
        } else {
            RiskLevel::Critical
        }
    }

    /// Does this tier warrant an operator warning?
    pub fn is_distressed(&self) -> bool {
        matches!(self, RiskLevel::Danger | RiskLevel::Critical)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Warning => "warning",
            RiskLevel::Danger => "danger",
            RiskLevel::Critical => "critical",
        };
        write!(f, "{}", name)
    }
}

/// Margin level percentage: `equity / used_margin * 100`
///
/// A zero used margin is substituted with 1 so the function stays total -
/// an account with no margin in use reports its raw equity as the level.
pub fn margin_level(equity: Decimal, used_margin: Decimal) -> Decimal {
    let divisor = if used_margin.is_zero() {
        Decimal::ONE
    } else {
        used_margin
    };
    equity / divisor * dec!(100)
}
