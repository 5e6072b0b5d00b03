//! Mapping of probe age and latency onto canvas coordinates.

/// Drawable area inside the canvas margins, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Continuous time axis: age 0 at the right edge, `span_secs` at the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimeAxis {
    pub span_secs: f64,
}

impl TimeAxis {
    /// Fit the axis to the oldest age present, never narrower than
    /// `min_span_secs` so a burst of recent probes is not stretched edge to
    /// edge.
    pub fn fit(oldest_age_secs: f64, min_span_secs: f64) -> Self {
        let floor = min_span_secs.max(1.0);
        Self {
            span_secs: oldest_age_secs.max(floor),
        }
    }

    pub fn x(&self, age_secs: f64, area: &PlotArea) -> f64 {
        let age = age_secs.clamp(0.0, self.span_secs);
        area.right() - age / self.span_secs * area.width
    }
}

/// Linear latency scale between `low` (bottom edge) and `high` (top edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ValueScale {
    pub low: f64,
    pub high: f64,
}

impl ValueScale {
    /// Scale spanning the observed extremes. With no values, or no variance,
    /// falls back to `[0, max(ceiling, 2v)]` so a flat series sits inside
    /// the chart instead of dividing by zero.
    pub fn fit(values: impl IntoIterator<Item = f64>, default_ceiling: f64) -> Self {
        let mut bounds: Option<(f64, f64)> = None;
        for v in values {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        let ceiling = default_ceiling.max(1.0);
        match bounds {
            Some((lo, hi)) if hi - lo > f64::EPSILON => Self { low: lo, high: hi },
            Some((_, hi)) => Self {
                low: 0.0,
                high: ceiling.max(hi * 2.0),
            },
            None => Self {
                low: 0.0,
                high: ceiling,
            },
        }
    }

    pub fn y(&self, value: f64, area: &PlotArea) -> f64 {
        let fraction = ((value - self.low) / (self.high - self.low)).clamp(0.0, 1.0);
        area.bottom() - fraction * area.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlotArea = PlotArea {
        left: 10.0,
        top: 5.0,
        width: 100.0,
        height: 50.0,
    };

    #[test]
    fn test_time_axis_places_now_right_and_oldest_left() {
        let axis = TimeAxis::fit(3600.0, 60.0);
        assert_eq!(axis.x(0.0, &AREA), 110.0);
        assert_eq!(axis.x(3600.0, &AREA), 10.0);
        assert_eq!(axis.x(1800.0, &AREA), 60.0);
    }

    #[test]
    fn test_time_axis_respects_min_span_and_clamps_future() {
        let axis = TimeAxis::fit(0.0, 60.0);
        assert_eq!(axis.span_secs, 60.0);
        assert_eq!(axis.x(-30.0, &AREA), 110.0);
        assert_eq!(axis.x(30.0, &AREA), 60.0);
    }

    #[test]
    fn test_value_scale_uses_observed_extremes() {
        let scale = ValueScale::fit([100.0, 300.0, 200.0], 1000.0);
        assert_eq!(scale, ValueScale { low: 100.0, high: 300.0 });
        assert_eq!(scale.y(100.0, &AREA), 55.0);
        assert_eq!(scale.y(300.0, &AREA), 5.0);
        assert_eq!(scale.y(200.0, &AREA), 30.0);
    }

    #[test]
    fn test_value_scale_falls_back_without_variance() {
        let flat = ValueScale::fit([250.0, 250.0], 1000.0);
        assert_eq!(flat, ValueScale { low: 0.0, high: 1000.0 });
        assert!(flat.y(250.0, &AREA).is_finite());

        let slow = ValueScale::fit([4000.0], 1000.0);
        assert_eq!(slow.high, 8000.0);

        let empty = ValueScale::fit(std::iter::empty(), 1000.0);
        assert_eq!(empty, ValueScale { low: 0.0, high: 1000.0 });
    }
}
