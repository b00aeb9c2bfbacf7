//! Ballast Account Monitor
//!
//! Consumes the external account-update feed and turns raw equity and
//! used-margin figures into an account health snapshot:
//!
//! - **Margin Level**: `equity / used_margin * 100`, zero-guarded
//! - **Risk Classification**: safe / warning / danger / critical tiers
//! - **Transition Tracking**: one-shot notifications on tier changes,
//!   extracted from the UI layer into an explicit state machine
//! - **Published Snapshot**: versioned `AccountHealth` behind a shared
//!   handle for any number of consumers
//!
//! Updates are processed in feed-delivery order; the monitor performs no
//! reordering, deduplication or retries of its own.

pub mod account;
pub mod monitor;
pub mod tracker;

// Re-export main types
pub use account::{AccountHealth, AccountUpdate};
pub use monitor::{MonitorConfig, RiskMonitor};
pub use tracker::{RiskLevelTracker, RiskTransition};
