//! Account Risk Monitor
//!
//! Sits between the external account feed and everything that wants to
//! know how healthy the account is. Each update is classified, checked
//! for a tier transition, logged, and published as a versioned snapshot.

use crate::account::{AccountHealth, AccountUpdate};
use crate::tracker::{RiskLevelTracker, RiskTransition};
use ballast_core::{margin_level, RiskLevel};
use chrono::Utc;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Configuration for the risk monitor
#[derive(Debug, Clone, Default)]
pub struct MonitorConfig {
    /// Log every update at debug level, not just transitions
    pub log_all_updates: bool,
}

/// Stateful account health monitor
///
/// Applies feed updates in delivery order. Consumers read the published
/// snapshot through [`health_handle`](Self::health_handle) and compare
/// versions to detect changes.
pub struct RiskMonitor {
    id: Uuid,
    config: MonitorConfig,
    tracker: RiskLevelTracker,
    current: Arc<RwLock<Option<AccountHealth>>>,
    version: AtomicU64,
}

impl RiskMonitor {
    pub fn new() -> Self {
        Self::with_config(MonitorConfig::default())
    }

    pub fn with_config(config: MonitorConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            tracker: RiskLevelTracker::new(),
            current: Arc::new(RwLock::new(None)),
            version: AtomicU64::new(0),
        }
    }

    /// Process one account update
    ///
    /// Computes the margin level, classifies it, publishes the snapshot
    /// and returns the tier transition if one occurred.
    pub async fn apply_update(&mut self, update: AccountUpdate) -> Option<RiskTransition> {
        let level = margin_level(update.equity, update.used_margin);
        let risk = RiskLevel::from_margin_level(level);
        let transition = self.tracker.observe(risk);

        if let Some(t) = transition {
            if t.is_escalation() && risk.is_distressed() {
                warn!(
                    "[MONITOR] Risk escalated to {}: margin level {:.2}%, equity {}, used margin {}",
                    risk, level, update.equity, update.used_margin
                );
            } else {
                info!(
                    "[MONITOR] Risk level changed to {}: margin level {:.2}%",
                    risk, level
                );
            }
        } else if self.config.log_all_updates {
            debug!(
                "[MONITOR] Update: margin level {:.2}%, risk {}",
                level, risk
            );
        }

        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = AccountHealth {
            monitor_id: self.id,
            equity: update.equity,
            used_margin: update.used_margin,
            margin_level: level,
            risk_level: risk,
            timestamp: Utc::now(),
            version,
        };

        let mut current = self.current.write().await;
        *current = Some(snapshot);

        transition
    }

    /// Handle to the published snapshot (for async consumers)
    pub fn health_handle(&self) -> Arc<RwLock<Option<AccountHealth>>> {
        self.current.clone()
    }

    /// The last classified risk tier, if any update has arrived
    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.tracker.current()
    }

    /// Margin level for a raw equity / used-margin pair
    ///
    /// Exposed so callers can preview a level without feeding the monitor.
    pub fn margin_level_of(equity: Decimal, used_margin: Decimal) -> Decimal {
        margin_level(equity, used_margin)
    }
}

impl Default for RiskMonitor {
    fn default() -> Self {
        Self::new()
    }
}
