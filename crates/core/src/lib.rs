//! Ballast Core Domain
//!
//! Pure domain types for the Ballast margin engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod asset;
pub mod direction;
pub mod leverage;
pub mod risk_level;
pub mod values;

// Re-export commonly used types at crate root
pub use asset::AssetClass;
pub use direction::TradeDirection;
pub use leverage::{ConfigError, LeverageConfig, LeverageTable, DEFAULT_LEVERAGE};
pub use risk_level::{margin_level, RiskLevel};
pub use values::{Price, Quantity, Timestamp};
