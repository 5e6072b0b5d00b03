//! Reduce a dense series to at most two points per pixel column.

/// A record placed on the canvas. `seq` is its chronological index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartPoint {
    pub seq: usize,
    pub x: f64,
    pub y: f64,
    pub latency_ms: f64,
}

struct ColumnExtremes {
    min: ChartPoint,
    max: ChartPoint,
}

/// Keep the fastest and slowest probe of every pixel column, in
/// chronological order, so latency spikes survive the reduction.
///
/// `points` must already be sorted chronologically. Series that fit into
/// `columns` are returned unchanged.
pub(crate) fn downsample(points: &[ChartPoint], left: f64, columns: usize) -> Vec<ChartPoint> {
    if points.len() <= 2 || points.len() <= columns.saturating_mul(2) {
        return points.to_vec();
    }

    let columns = columns.max(1);
    let mut buckets: Vec<Option<ColumnExtremes>> =
        std::iter::repeat_with(|| None).take(columns).collect();

    for point in points {
        let offset = (point.x - left).floor().max(0.0) as usize;
        let bucket = &mut buckets[offset.min(columns - 1)];
        match bucket {
            Some(existing) => {
                if point.latency_ms < existing.min.latency_ms {
                    existing.min = *point;
                }
                if point.latency_ms > existing.max.latency_ms {
                    existing.max = *point;
                }
            }
            None => {
                *bucket = Some(ColumnExtremes {
                    min: *point,
                    max: *point,
                });
            }
        }
    }

    let mut reduced = Vec::with_capacity(columns * 2);
    for bucket in buckets.into_iter().flatten() {
        let (first, second) = if bucket.min.seq <= bucket.max.seq {
            (bucket.min, bucket.max)
        } else {
            (bucket.max, bucket.min)
        };
        reduced.push(first);
        if second.seq != first.seq {
            reduced.push(second);
        }
    }
    reduced
}
