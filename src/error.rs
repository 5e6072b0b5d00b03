//! Error taxonomy for history aggregation and rendering.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistoryError {
    /// A metric that needs at least one record was asked of an empty history.
    #[error("history is empty: at least one probe record is required")]
    EmptyHistory,

    #[error("malformed probe record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: MalformedReason },
}

/// Why a probe record was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedReason {
    #[error("latency {0} ms is negative")]
    NegativeLatency(f64),

    #[error("latency is not a finite number")]
    NonFiniteLatency,

    #[error("status code {0} is outside the plausible HTTP range")]
    StatusOutOfRange(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message_names_index_and_reason() {
        let err = HistoryError::MalformedRecord {
            index: 3,
            reason: MalformedReason::StatusOutOfRange(42),
        };
        let msg = err.to_string();
        assert!(msg.contains("index 3"));
        assert!(msg.contains("status code 42"));
    }
}
