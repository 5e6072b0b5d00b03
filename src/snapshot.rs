//! Read a materialized history snapshot from JSON.
//!
//! The document is a JSON array of probe records:
//!
//! ```json
//! [
//!   { "time": "2026-10-16T11:58:00Z", "latency_ms": 120, "status_code": 200 },
//!   { "time": "2026-10-16T11:59:00Z", "msec": 450, "code": 503 }
//! ]
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use crate::history::{History, ProbeRecord, SuccessRule};

pub fn from_json(json: &str, rule: SuccessRule) -> Result<History> {
    let records: Vec<ProbeRecord> =
        serde_json::from_str(json).context("history snapshot is not a JSON array of probe records")?;
    let history = History::with_rule(records, rule)?;
    Ok(history)
}

pub fn load(path: &Path, rule: SuccessRule) -> Result<History> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read history snapshot: {}", path.display()))?;
    let history = from_json(&content, rule)
        .with_context(|| format!("invalid history snapshot: {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = history.len(), "loaded history snapshot");
    Ok(history)
}
