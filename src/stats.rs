//! Scalar summaries of a probe history: average latency and uptime.

use crate::error::HistoryError;
use crate::history::History;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Mean latency in whole milliseconds, rounded half up.
pub fn average_latency(history: &History) -> Result<u64, HistoryError> {
    if history.is_empty() {
        return Err(HistoryError::EmptyHistory);
    }
    let sum: f64 = history.records().iter().map(|r| r.latency_ms).sum();
    let mean = sum / history.len() as f64;
    // Latencies are validated non-negative, so round() is half-up here.
    Ok(mean.round() as u64)
}

/// Fraction of probes classified successful, in `[0, 1]`.
pub fn success_ratio(history: &History) -> Result<f64, HistoryError> {
    if history.is_empty() {
        return Err(HistoryError::EmptyHistory);
    }
    let ok = history.len() - failure_count(history);
    Ok(ok as f64 / history.len() as f64)
}

pub fn failure_count(history: &History) -> usize {
    history
        .records()
        .iter()
        .filter(|r| !history.is_success(r))
        .count()
}

/// Uptime as a percentage with four decimals, from probe counts. Truncated
/// rather than rounded, so a single failure never shows up as `100.0000%`.
/// `None` when there are no probes.
pub fn format_uptime(successes: usize, total: usize) -> Option<String> {
    if total == 0 {
        return None;
    }
    let scaled = successes.min(total) as u128 * 1_000_000 / total as u128;
    Some(format!("{}.{:04}%", scaled / 10_000, scaled % 10_000))
}

/// Everything a status page or data endpoint shows about one history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub probes: usize,
    pub failures: usize,
    pub avg_latency_ms: Option<u64>,
    pub uptime: Option<f64>,
    pub first_probe: Option<DateTime<Utc>>,
    pub last_probe: Option<DateTime<Utc>>,
}

impl Summary {
    pub fn from_history(history: &History) -> Self {
        Self {
            probes: history.len(),
            failures: failure_count(history),
            avg_latency_ms: average_latency(history).ok(),
            uptime: success_ratio(history).ok(),
            first_probe: history.first_probe(),
            last_probe: history.last_probe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ProbeRecord;
    use chrono::{Duration, TimeZone};

    fn history(samples: &[(f64, u16)]) -> History {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let n = samples.len() as i64;
        let records = samples
            .iter()
            .enumerate()
            .map(|(i, &(ms, code))| ProbeRecord::new(now - Duration::seconds(60 * (n - 1 - i as i64)), ms, code))
            .collect();
        History::new(records).unwrap()
    }

    #[test]
    fn test_average_latency_rounds_to_510() {
        let h = history(&[(1298.0, 200), (217.0, 200), (451.0, 503), (75.0, 200)]);
        assert_eq!(average_latency(&h).unwrap(), 510);
    }

    #[test]
    fn test_average_latency_rounds_half_up() {
        let h = history(&[(1.0, 200), (2.0, 200)]);
        assert_eq!(average_latency(&h).unwrap(), 2);
        let h = history(&[(10.4, 200)]);
        assert_eq!(average_latency(&h).unwrap(), 10);
    }

    #[test]
    fn test_empty_history_is_an_error_not_nan() {
        let h = History::empty();
        assert_eq!(average_latency(&h), Err(HistoryError::EmptyHistory));
        assert_eq!(success_ratio(&h), Err(HistoryError::EmptyHistory));
        assert_eq!(failure_count(&h), 0);
    }

    #[test]
    fn test_success_ratio_counts_failures() {
        let h = history(&[(1298.0, 200), (217.0, 200), (451.0, 503), (75.0, 200)]);
        assert_eq!(success_ratio(&h).unwrap(), 0.75);
        assert_eq!(failure_count(&h), 1);

        let h = history(&[(10.0, 0), (10.0, 500)]);
        assert_eq!(success_ratio(&h).unwrap(), 0.0);
    }

    #[test]
    fn test_format_uptime_truncates() {
        assert_eq!(format_uptime(10, 10).as_deref(), Some("100.0000%"));
        assert_eq!(format_uptime(3, 4).as_deref(), Some("75.0000%"));
        assert_eq!(format_uptime(9_999_999, 10_000_000).as_deref(), Some("99.9999%"));
        assert_eq!(format_uptime(0, 4).as_deref(), Some("0.0000%"));
        assert_eq!(format_uptime(0, 0), None);
    }

    #[test]
    fn test_format_uptime_exact_for_every_small_ratio() {
        assert_eq!(format_uptime(41, 80).as_deref(), Some("51.2500%"));
        assert_eq!(format_uptime(41, 320).as_deref(), Some("12.8125%"));
        for total in 1..=1000usize {
            for ok in 0..=total {
                let scaled = ok * 1_000_000 / total;
                let expected = format!("{}.{:04}%", scaled / 10_000, scaled % 10_000);
                assert_eq!(format_uptime(ok, total), Some(expected), "{ok}/{total}");
            }
        }
    }

    #[test]
    fn test_summary_of_empty_history() {
        let s = Summary::from_history(&History::empty());
        assert_eq!(s.probes, 0);
        assert_eq!(s.avg_latency_ms, None);
        assert_eq!(s.uptime, None);
        assert_eq!(s.last_probe, None);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let h = history(&[(100.0, 200), (300.0, 503)]);
        let json = serde_json::to_value(Summary::from_history(&h)).unwrap();
        assert_eq!(json["probes"], 2);
        assert_eq!(json["failures"], 1);
        assert_eq!(json["avg_latency_ms"], 200);
        assert_eq!(json["uptime"], 0.5);
    }
}
