use serde::{Deserialize, Serialize};

/// Asset class of a tradeable instrument
///
/// Leverage and margin requirements are set per class, not per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    /// Cryptocurrencies (e.g. BTC, ETH)
    Crypto,
    /// Currency pairs (e.g. EUR/USD)
    Forex,
    /// Individual equities
    Stocks,
    /// Equity indices (e.g. S&P 500)
    Indices,
    /// Commodities (e.g. gold, crude oil)
    Commodities,
}

impl AssetClass {
    /// All known asset classes
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Crypto,
        AssetClass::Forex,
        AssetClass::Stocks,
        AssetClass::Indices,
        AssetClass::Commodities,
    ];

    /// Parse an asset class from free text
    ///
    /// Case-insensitive; accepts singular and plural spellings. Returns
    /// `None` for anything unrecognized - the leverage table decides what
    /// the fallback policy is, not the parser.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "crypto" => Some(AssetClass::Crypto),
            "forex" => Some(AssetClass::Forex),
            "stock" | "stocks" => Some(AssetClass::Stocks),
            "index" | "indices" => Some(AssetClass::Indices),
            "commodity" | "commodities" => Some(AssetClass::Commodities),
            _ => None,
        }
    }

    /// Canonical lowercase name for this class
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Crypto => "crypto",
            AssetClass::Forex => "forex",
            AssetClass::Stocks => "stocks",
            AssetClass::Indices => "indices",
            AssetClass::Commodities => "commodities",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
