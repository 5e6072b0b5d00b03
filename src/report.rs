//! Human-readable formatting of history summaries.

use crate::stats::{format_uptime, Summary};

/// One-line summary, e.g. `9 probes, 2 failures, avg 610 ms, uptime 77.7777%`.
pub fn format_summary(summary: &Summary) -> String {
    if summary.probes == 0 {
        return "0 probes, no data".to_string();
    }

    let mut line = format!(
        "{} probe{}, {} failure{}",
        summary.probes,
        if summary.probes == 1 { "" } else { "s" },
        summary.failures,
        if summary.failures == 1 { "" } else { "s" },
    );

    if let Some(avg) = summary.avg_latency_ms {
        line.push_str(&format!(", avg {} ms", avg));
    }
    let successes = summary.probes.saturating_sub(summary.failures);
    if let Some(uptime) = format_uptime(successes, summary.probes) {
        line.push_str(&format!(", uptime {}", uptime));
    }

    line
}
