//! Minimal SVG markup writer.
//!
//! Coordinates are written with one decimal so output is byte-stable across
//! runs and platforms.

use std::fmt::Display;

pub(crate) struct SvgDocument {
    body: String,
    width: u32,
    height: u32,
}

impl SvgDocument {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            body: String::new(),
            width,
            height,
        }
    }

    pub(crate) fn rect(&mut self, class: &str, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.body.push_str(&format!(
            "<rect class=\"{}\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>",
            class, x, y, w, h, fill
        ));
    }

    pub(crate) fn line(&mut self, class: &str, from: (f64, f64), to: (f64, f64), stroke: &str) {
        self.body.push_str(&format!(
            "<line class=\"{}\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"1\"/>",
            class, from.0, from.1, to.0, to.1, stroke
        ));
    }

    pub(crate) fn polyline(&mut self, class: &str, points: &[(f64, f64)], stroke: &str) {
        let coords: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect();
        self.body.push_str(&format!(
            "<polyline class=\"{}\" points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" stroke-linejoin=\"round\"/>",
            class,
            coords.join(" "),
            stroke
        ));
    }

    pub(crate) fn circle(&mut self, class: &str, center: (f64, f64), r: f64, fill: &str) {
        self.body.push_str(&format!(
            "<circle class=\"{}\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\"/>",
            class, center.0, center.1, r, fill
        ));
    }

    pub(crate) fn text(&mut self, class: &str, at: (f64, f64), anchor: &str, content: impl Display) {
        self.body.push_str(&format!(
            "<text class=\"{}\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{}\">{}</text>",
            class,
            at.0,
            at.1,
            anchor,
            escape(&content.to_string())
        ));
    }

    pub(crate) fn raw(&mut self, markup: &str) {
        self.body.push_str(markup);
    }

    pub(crate) fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{body}</svg>",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Escape text content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_body_in_root() {
        let mut doc = SvgDocument::new(10, 20);
        doc.circle("probe", (1.25, 2.0), 3.0, "#000");
        let svg = doc.finish();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"20\""));
        assert!(svg.contains("cx=\"1.2\"") || svg.contains("cx=\"1.3\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = SvgDocument::new(1, 1);
        doc.text("label", (0.0, 0.0), "start", "a<b & \"c\"");
        let svg = doc.finish();
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
    }
}
