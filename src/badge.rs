//! Two-segment uptime badge, e.g. `uptime | 99.9871%`.

use crate::graph::svg::{escape, SvgDocument};
use crate::history::History;
use crate::stats::{failure_count, format_uptime, success_ratio};

pub const DEFAULT_LABEL: &str = "uptime";

const HEIGHT: u32 = 20;
const CHAR_WIDTH: u32 = 7;
const PADDING: u32 = 10;

const LABEL_BG: &str = "#555";
const GOOD: &str = "#4c1";
const FAIR: &str = "#dfb317";
const POOR: &str = "#e05d44";
const UNKNOWN: &str = "#9f9f9f";

fn value_color(ratio: Option<f64>) -> &'static str {
    match ratio {
        None => UNKNOWN,
        Some(r) if r >= 0.999 => GOOD,
        Some(r) if r >= 0.99 => FAIR,
        Some(_) => POOR,
    }
}

fn segment_width(text: &str) -> u32 {
    text.chars().count() as u32 * CHAR_WIDTH + PADDING
}

/// Render the uptime badge for `history`. An empty history reads `n/a`.
pub fn render_badge(history: &History, label: &str) -> String {
    let ratio = success_ratio(history).ok();
    let successes = history.len() - failure_count(history);
    let value = format_uptime(successes, history.len()).unwrap_or_else(|| "n/a".to_string());

    let left = segment_width(label);
    let right = segment_width(&value);
    let width = left + right;

    let mut doc = SvgDocument::new(width, HEIGHT);
    doc.raw(&format!(
        "<title>{}: {}</title>",
        escape(label),
        escape(&value)
    ));
    doc.rect("label-bg", 0.0, 0.0, left as f64, HEIGHT as f64, LABEL_BG);
    doc.rect(
        "value-bg",
        left as f64,
        0.0,
        right as f64,
        HEIGHT as f64,
        value_color(ratio),
    );
    doc.raw("<g fill=\"#fff\" font-family=\"Verdana,DejaVu Sans,sans-serif\" font-size=\"11\">");
    doc.text("label", (left as f64 / 2.0, 14.0), "middle", label);
    doc.text("value", (left as f64 + right as f64 / 2.0, 14.0), "middle", &value);
    doc.raw("</g>");
    doc.finish()
}
