//! SixNines -- uptime history aggregation and SVG latency graphs.
//!
//! This crate turns one endpoint's probe history into the numbers and
//! pictures a status page shows: average latency, uptime ratio, a latency
//! graph with failure markers, and an uptime badge. Everything here is a pure
//! function of an already fetched [`History`]; probing and storage live
//! elsewhere.

pub mod badge;
pub mod config;
pub mod error;
pub mod graph;
pub mod history;
pub mod report;
pub mod snapshot;
pub mod stats;

pub use crate::badge::render_badge;
pub use crate::error::{HistoryError, MalformedReason};
pub use crate::graph::{render_svg, render_svg_with};
pub use crate::history::{History, ProbeRecord, SuccessRule};
pub use crate::stats::{average_latency, success_ratio, Summary};
