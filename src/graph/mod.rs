//! SVG latency graph of one endpoint's probe history.
//!
//! The horizontal axis is continuous time measured backwards from `now`, so
//! unevenly spaced probes land where they happened rather than at evenly
//! spaced indices. The vertical axis is latency. Failing probes get a red
//! marker on top of the latency line.

mod downsample;
pub(crate) mod scale;
pub(crate) mod svg;

use self::downsample::{downsample, ChartPoint};
use self::scale::{PlotArea, TimeAxis, ValueScale};
use self::svg::SvgDocument;
use crate::config::GraphConfig;
use crate::history::{History, ProbeRecord};
use chrono::{DateTime, Utc};

struct GraphStyle;

impl GraphStyle {
    const BACKGROUND: &'static str = "#ffffff";
    const AXIS: &'static str = "#b0b0b0";
    const LABEL_FONT: &'static str = "font-family:sans-serif;font-size:10px;fill:#666";
    const LINE: &'static str = "#2a7ae2";
    const FAILURE: &'static str = "#d9534f";
    const LABEL_GAP: f64 = 4.0;
}

/// Render `history` with the default geometry.
pub fn render_svg(history: &History, now: DateTime<Utc>) -> String {
    render_svg_with(history, now, &GraphConfig::default())
}

/// Render `history` as a standalone SVG document.
///
/// Pure function of its inputs: the same history and `now` always produce
/// byte-identical markup, whatever order the records arrive in.
pub fn render_svg_with(history: &History, now: DateTime<Utc>, config: &GraphConfig) -> String {
    let area = config.plot_area();
    let sorted = history.chronological();
    let ages: Vec<f64> = sorted.iter().map(|r| age_secs(r, now)).collect();
    let oldest = ages.iter().copied().fold(0.0, f64::max);
    let axis = TimeAxis::fit(oldest, config.min_span_secs as f64);
    let scale = ValueScale::fit(sorted.iter().map(|r| r.latency_ms), config.default_ceiling_ms);

    tracing::debug!(
        records = sorted.len(),
        span_secs = axis.span_secs,
        low_ms = scale.low,
        high_ms = scale.high,
        "rendering latency graph"
    );

    let mut doc = SvgDocument::new(config.width, config.height);
    doc.rect(
        "background",
        0.0,
        0.0,
        config.width as f64,
        config.height as f64,
        GraphStyle::BACKGROUND,
    );
    doc.raw(&format!("<style>text{{{}}}</style>", GraphStyle::LABEL_FONT));
    draw_axes(&mut doc, &area, &axis, &scale);

    if sorted.is_empty() {
        doc.text(
            "placeholder",
            (area.left + area.width / 2.0, area.top + area.height / 2.0),
            "middle",
            "no data",
        );
        return doc.finish();
    }

    let points: Vec<ChartPoint> = sorted
        .iter()
        .zip(&ages)
        .enumerate()
        .map(|(seq, (record, &age))| ChartPoint {
            seq,
            x: axis.x(age, &area),
            y: scale.y(record.latency_ms, &area),
            latency_ms: record.latency_ms,
        })
        .collect();

    if let [only] = points.as_slice() {
        let (class, fill) = if history.is_success(sorted[0]) {
            ("probe", GraphStyle::LINE)
        } else {
            ("failure", GraphStyle::FAILURE)
        };
        doc.circle(class, (only.x, only.y), config.marker_radius, fill);
        return doc.finish();
    }

    let line = downsample(&points, area.left, area.width as usize);
    let coords: Vec<(f64, f64)> = line.iter().map(|p| (p.x, p.y)).collect();
    doc.polyline("latency", &coords, GraphStyle::LINE);

    for (point, record) in points.iter().zip(&sorted) {
        if !history.is_success(record) {
            doc.circle(
                "failure",
                (point.x, point.y),
                config.marker_radius,
                GraphStyle::FAILURE,
            );
        }
    }

    doc.finish()
}

fn age_secs(record: &ProbeRecord, now: DateTime<Utc>) -> f64 {
    record.age(now).num_milliseconds() as f64 / 1000.0
}

fn draw_axes(doc: &mut SvgDocument, area: &PlotArea, axis: &TimeAxis, scale: &ValueScale) {
    doc.line(
        "axis",
        (area.left, area.bottom()),
        (area.right(), area.bottom()),
        GraphStyle::AXIS,
    );
    doc.line(
        "axis",
        (area.left, area.top),
        (area.left, area.bottom()),
        GraphStyle::AXIS,
    );

    let label_x = area.left - GraphStyle::LABEL_GAP;
    doc.text(
        "label",
        (label_x, area.top + GraphStyle::LABEL_GAP * 2.0),
        "end",
        format!("{} ms", scale.high.round() as u64),
    );
    doc.text(
        "label",
        (label_x, area.bottom()),
        "end",
        format!("{} ms", scale.low.round() as u64),
    );

    let label_y = area.bottom() + GraphStyle::LABEL_GAP * 3.0;
    doc.text(
        "label",
        (area.left, label_y),
        "start",
        format!("{} ago", humanize_secs(axis.span_secs)),
    );
    doc.text("label", (area.right(), label_y), "end", "now");
}

/// Coarse human age: `45s`, `12m`, `5h`, `3d`.
fn humanize_secs(secs: f64) -> String {
    let secs = secs.max(0.0).round() as u64;
    match secs {
        0..=119 => format!("{}s", secs),
        120..=7_199 => format!("{}m", secs / 60),
        7_200..=172_799 => format!("{}h", secs / 3_600),
        _ => format!("{}d", secs / 86_400),
    }
}
