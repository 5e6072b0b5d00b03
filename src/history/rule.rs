//! Status-code classification of probe outcomes.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Status recorded when a probe got no HTTP response at all (timeout, refused
/// connection, DNS failure). Always a failure.
pub const NO_RESPONSE_STATUS: u16 = 0;

/// Status codes a real HTTP response can carry.
pub const HTTP_STATUS_RANGE: RangeInclusive<u16> = 100..=599;

/// 2xx and 3xx responses count as "up".
pub const DEFAULT_SUCCESS_RULE: SuccessRule = SuccessRule {
    min: 200,
    max_exclusive: 400,
};

/// Half-open range `[min, max_exclusive)` of status codes treated as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessRule {
    pub min: u16,
    pub max_exclusive: u16,
}

impl SuccessRule {
    pub fn new(min: u16, max_exclusive: u16) -> Self {
        Self { min, max_exclusive }
    }

    pub fn accepts(&self, status_code: u16) -> bool {
        (self.min..self.max_exclusive).contains(&status_code)
    }

    pub fn is_empty(&self) -> bool {
        self.min >= self.max_exclusive
    }
}

impl Default for SuccessRule {
    fn default() -> Self {
        DEFAULT_SUCCESS_RULE
    }
}

/// Whether a status code is something a probe could plausibly have recorded.
pub fn is_plausible_status(status_code: u16) -> bool {
    status_code == NO_RESPONSE_STATUS || HTTP_STATUS_RANGE.contains(&status_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_accepts_2xx_and_3xx() {
        let rule = SuccessRule::default();
        assert!(rule.accepts(200));
        assert!(rule.accepts(204));
        assert!(rule.accepts(301));
        assert!(rule.accepts(399));
        assert!(!rule.accepts(199));
        assert!(!rule.accepts(400));
        assert!(!rule.accepts(503));
        assert!(!rule.accepts(NO_RESPONSE_STATUS));
    }

    #[test]
    fn test_custom_rule_can_exclude_redirects() {
        let rule = SuccessRule::new(200, 300);
        assert!(rule.accepts(200));
        assert!(!rule.accepts(302));
        assert!(SuccessRule::new(300, 300).is_empty());
    }

    #[test]
    fn test_plausible_status() {
        assert!(is_plausible_status(0));
        assert!(is_plausible_status(100));
        assert!(is_plausible_status(599));
        assert!(!is_plausible_status(42));
        assert!(!is_plausible_status(600));
    }
}
