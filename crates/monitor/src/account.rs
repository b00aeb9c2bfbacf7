use ballast_core::{RiskLevel, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One message from the external account feed
///
/// The feed delivers these as JSON; field names match the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdate {
    /// Total account equity (balance plus unrealized P&L)
    pub equity: Decimal,

    /// Margin currently locked against open positions
    pub used_margin: Decimal,
}

impl AccountUpdate {
    pub fn new(equity: Decimal, used_margin: Decimal) -> Self {
        Self { equity, used_margin }
    }
}

/// Published account health snapshot
///
/// Superseded wholesale by the next update; consumers hold the handle,
/// not the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountHealth {
    /// Monitor instance that produced this snapshot
    pub monitor_id: Uuid,

    /// Equity from the latest update
    pub equity: Decimal,

    /// Used margin from the latest update
    pub used_margin: Decimal,

    /// Computed margin level percentage
    pub margin_level: Decimal,

    /// Risk tier for the margin level
    pub risk_level: RiskLevel,

    /// When the snapshot was computed
    pub timestamp: Timestamp,

    /// Monotonically increasing version (for consumers to detect updates)
    pub version: u64,
}
