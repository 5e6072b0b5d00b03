//! Probe records and the per-endpoint history snapshot.

pub mod rule;

pub use self::rule::{SuccessRule, DEFAULT_SUCCESS_RULE, NO_RESPONSE_STATUS};

use crate::error::{HistoryError, MalformedReason};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One observation of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeRecord {
    pub time: DateTime<Utc>,
    #[serde(alias = "msec")]
    pub latency_ms: f64,
    #[serde(alias = "code")]
    pub status_code: u16,
}

impl ProbeRecord {
    pub fn new(time: DateTime<Utc>, latency_ms: f64, status_code: u16) -> Self {
        Self {
            time,
            latency_ms,
            status_code,
        }
    }

    /// Time elapsed between the probe and `now`. Negative for records
    /// stamped after `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.time
    }

    fn check(&self) -> Result<(), MalformedReason> {
        if !self.latency_ms.is_finite() {
            return Err(MalformedReason::NonFiniteLatency);
        }
        if self.latency_ms < 0.0 {
            return Err(MalformedReason::NegativeLatency(self.latency_ms));
        }
        if !rule::is_plausible_status(self.status_code) {
            return Err(MalformedReason::StatusOutOfRange(self.status_code));
        }
        Ok(())
    }

    /// Total order used wherever records are sorted: time, then latency,
    /// then status. Any permutation of the same records sorts identically.
    fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.latency_ms.total_cmp(&other.latency_ms))
            .then_with(|| self.status_code.cmp(&other.status_code))
    }
}

/// Validated, read-only snapshot of one endpoint's probe records.
///
/// Construction rejects malformed records, so every consumer can assume
/// finite non-negative latencies and plausible status codes. Record order is
/// whatever the caller supplied; use [`History::chronological`] when order
/// matters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    records: Vec<ProbeRecord>,
    rule: SuccessRule,
}

impl History {
    pub fn new(records: Vec<ProbeRecord>) -> Result<Self, HistoryError> {
        Self::with_rule(records, SuccessRule::default())
    }

    pub fn with_rule(records: Vec<ProbeRecord>, rule: SuccessRule) -> Result<Self, HistoryError> {
        for (index, record) in records.iter().enumerate() {
            record
                .check()
                .map_err(|reason| HistoryError::MalformedRecord { index, reason })?;
        }
        Ok(Self { records, rule })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ProbeRecord] {
        &self.records
    }

    pub fn rule(&self) -> SuccessRule {
        self.rule
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_success(&self, record: &ProbeRecord) -> bool {
        self.rule.accepts(record.status_code)
    }

    /// Records sorted oldest first.
    pub fn chronological(&self) -> Vec<&ProbeRecord> {
        let mut sorted: Vec<&ProbeRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.chronological_cmp(b));
        sorted
    }

    /// Records taken at or after `cutoff`, for rolling-window statistics.
    pub fn since(&self, cutoff: DateTime<Utc>) -> History {
        History {
            records: self
                .records
                .iter()
                .filter(|r| r.time >= cutoff)
                .copied()
                .collect(),
            rule: self.rule,
        }
    }

    pub fn first_probe(&self) -> Option<DateTime<Utc>> {
        self.records.iter().map(|r| r.time).min()
    }

    pub fn last_probe(&self) -> Option<DateTime<Utc>> {
        self.records.iter().map(|r| r.time).max()
    }
}
