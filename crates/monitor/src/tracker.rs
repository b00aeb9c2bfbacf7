use ballast_core::RiskLevel;
use serde::{Deserialize, Serialize};

/// A risk tier change worth notifying about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskTransition {
    /// Tier before the change; `None` on the first observation
    pub from: Option<RiskLevel>,

    /// Tier after the change
    pub to: RiskLevel,
}

impl RiskTransition {
    /// Did risk get worse?
    ///
    /// A first observation of a distressed account counts as an
    /// escalation.
    pub fn is_escalation(&self) -> bool {
        match self.from {
            Some(from) => self.to > from,
            None => self.to > RiskLevel::Safe,
        }
    }
}

/// Transition detector for risk tiers
///
/// The account feed redelivers the same tier on almost every update;
/// consumers only want a notification when the tier actually changes.
/// This is that debounce as an explicit, UI-free state machine: feed
/// every classification through [`observe`](Self::observe) and act only
/// when it returns `Some`.
#[derive(Debug, Clone, Default)]
pub struct RiskLevelTracker {
    previous: Option<RiskLevel>,
}

impl RiskLevelTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classification, reporting a transition if the tier moved
    ///
    /// Repeated observations of the same tier are suppressed. The very
    /// first observation only reports when the account is not Safe - a
    /// healthy account produces no startup notification.
    pub fn observe(&mut self, level: RiskLevel) -> Option<RiskTransition> {
        let previous = self.previous;
        self.previous = Some(level);

        match previous {
            Some(prev) if prev == level => None,
            Some(prev) => Some(RiskTransition {
                from: Some(prev),
                to: level,
            }),
            None if level == RiskLevel::Safe => None,
            None => Some(RiskTransition {
                from: None,
                to: level,
            }),
        }
    }

    /// The last tier observed, if any
    pub fn current(&self) -> Option<RiskLevel> {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_levels_are_suppressed() {
        let mut tracker = RiskLevelTracker::new();

        assert!(tracker.observe(RiskLevel::Warning).is_some());
        assert!(tracker.observe(RiskLevel::Warning).is_none());
        assert!(tracker.observe(RiskLevel::Warning).is_none());
        assert_eq!(tracker.current(), Some(RiskLevel::Warning));
    }

    #[test]
    fn test_transition_reported_once_per_change() {
        let mut tracker = RiskLevelTracker::new();
        tracker.observe(RiskLevel::Warning);

        let transition = tracker.observe(RiskLevel::Danger).unwrap();
        assert_eq!(transition.from, Some(RiskLevel::Warning));
        assert_eq!(transition.to, RiskLevel::Danger);

        assert!(tracker.observe(RiskLevel::Danger).is_none());
    }

    #[test]
    fn test_first_safe_observation_is_silent() {
        let mut tracker = RiskLevelTracker::new();
        assert!(tracker.observe(RiskLevel::Safe).is_none());
        assert_eq!(tracker.current(), Some(RiskLevel::Safe));
    }

    #[test]
    fn test_first_distressed_observation_notifies() {
        let mut tracker = RiskLevelTracker::new();

        let transition = tracker.observe(RiskLevel::Critical).unwrap();
        assert_eq!(transition.from, None);
        assert_eq!(transition.to, RiskLevel::Critical);
        assert!(transition.is_escalation());
    }

    #[test]
    fn test_recovery_is_a_transition_but_not_escalation() {
        let mut tracker = RiskLevelTracker::new();
        tracker.observe(RiskLevel::Danger);

        let transition = tracker.observe(RiskLevel::Safe).unwrap();
        assert_eq!(transition.to, RiskLevel::Safe);
        assert!(!transition.is_escalation());
    }

    #[test]
    fn test_escalation_ordering() {
        let up = RiskTransition {
            from: Some(RiskLevel::Warning),
            to: RiskLevel::Critical,
        };
        let down = RiskTransition {
            from: Some(RiskLevel::Critical),
            to: RiskLevel::Warning,
        };

        assert!(up.is_escalation());
        assert!(!down.is_escalation());
    }
}
