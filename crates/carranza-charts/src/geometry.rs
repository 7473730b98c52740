//! Pure proportion math behind the chart components.
//!
//! Nothing here renders or holds state: the components call these on every
//! render and draw whatever comes back. Guards against empty and zero-total
//! input live here so no NaN ever reaches a style attribute.

use std::f64::consts::TAU;

use crate::data::{SeriesKeys, StackedRecord};

/// Quarter turn back from the mathematical zero angle, so the first segment
/// starts at 12 o'clock and segments proceed clockwise.
const START_OFFSET: f64 = -TAU / 4.0;

/// One pie segment on the unit circle.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Share of the whole circle, in `0.0..=1.0`.
    pub fraction: f64,
    /// Entry point on the unit circle.
    pub start: (f64, f64),
    /// Exit point on the unit circle.
    pub end: (f64, f64),
    /// SVG large-arc flag: set when this segment alone spans more than half
    /// the circle. Exactly half stays false.
    pub large_arc: bool,
}

/// Compute arc segments for an ordered set of magnitudes.
///
/// Returns `None` when there is nothing to draw (empty input or zero total)
/// so callers fall back to a placeholder instead of dividing by zero.
pub fn pie_layout(values: &[f64]) -> Option<Vec<ArcSegment>> {
    let total: f64 = values.iter().sum();
    if values.is_empty() || total <= 0.0 {
        return None;
    }

    let point_at = |cumulative: f64| {
        let angle = START_OFFSET + TAU * cumulative;
        (angle.cos(), angle.sin())
    };

    let mut segments = Vec::with_capacity(values.len());
    let mut cumulative = 0.0;
    for &value in values {
        let fraction = value / total;
        let start = point_at(cumulative);
        cumulative += fraction;
        segments.push(ArcSegment {
            fraction,
            start,
            end: point_at(cumulative),
            large_arc: fraction > 0.5,
        });
    }
    Some(segments)
}

/// SVG path for one segment: move to the center, line out to the entry
/// point, arc to the exit point, close back to the center.
pub fn arc_path(segment: &ArcSegment, cx: f64, cy: f64, r: f64) -> String {
    let (sx, sy) = segment.start;
    let (ex, ey) = segment.end;
    format!(
        "M {cx:.4} {cy:.4} L {:.4} {:.4} A {r:.4} {r:.4} 0 {} 1 {:.4} {:.4} Z",
        cx + r * sx,
        cy + r * sy,
        if segment.large_arc { 1 } else { 0 },
        cx + r * ex,
        cy + r * ey,
    )
}

/// One colored band inside a stacked bar.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentLayout {
    pub key: String,
    pub value: f64,
    /// Share of the bar's own rendered height, in `0.0..=1.0`.
    pub frac_of_bar: f64,
}

/// One bar of the stacked chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub name: String,
    pub total: f64,
    /// Share of the full chart height, scaled against the tallest bar.
    pub height_frac: f64,
    /// Bands in key order, first key on the baseline.
    pub segments: Vec<SegmentLayout>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackedLayout {
    pub bars: Vec<BarLayout>,
    /// Largest single record total, floored at 0.
    pub max_total: f64,
}

/// Compute bar and band proportions for a set of records over a fixed key
/// set. Missing keys contribute 0; a zero `max_total` collapses every bar to
/// zero height rather than dividing by it.
pub fn stacked_layout(records: &[StackedRecord], keys: &SeriesKeys) -> StackedLayout {
    let max_total = records
        .iter()
        .map(|record| record.total(keys))
        .fold(0.0, f64::max);

    let bars = records
        .iter()
        .map(|record| {
            let total = record.total(keys);
            let height_frac = if max_total > 0.0 { total / max_total } else { 0.0 };
            let segments = keys
                .iter()
                .map(|key| {
                    let value = record.value_for(key);
                    let frac_of_bar = if total > 0.0 { value / total } else { 0.0 };
                    SegmentLayout {
                        key: key.to_string(),
                        value,
                        frac_of_bar,
                    }
                })
                .collect();
            BarLayout {
                name: record.name().to_string(),
                total,
                height_frac,
                segments,
            }
        })
        .collect();

    StackedLayout { bars, max_total }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn record(name: &str, cita: f64, cotizacion: f64, consulta: f64) -> StackedRecord {
        StackedRecord::new(name)
            .with_value("cita", cita)
            .unwrap()
            .with_value("cotizacion", cotizacion)
            .unwrap()
            .with_value("consulta", consulta)
            .unwrap()
    }

    fn request_keys() -> SeriesKeys {
        SeriesKeys::new(["cita", "cotizacion", "consulta"])
    }

    #[test]
    fn test_fractions_and_sweeps_sum_to_whole() {
        let segments = pie_layout(&[3.0, 7.0, 10.0]).unwrap();
        let fraction_sum: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!((fraction_sum - 1.0).abs() < EPS);
        let sweep_sum: f64 = segments.iter().map(|s| s.fraction * TAU).sum();
        assert!((sweep_sum - TAU).abs() < EPS);
    }

    #[test]
    fn test_single_slice_spans_full_circle() {
        let segments = pie_layout(&[10.0]).unwrap();
        assert_eq!(segments.len(), 1);
        let seg = &segments[0];
        assert!(seg.large_arc);
        // One full turn brings the exit point back onto the entry point.
        assert!((seg.start.0 - seg.end.0).abs() < EPS);
        assert!((seg.start.1 - seg.end.1).abs() < EPS);
    }

    #[test]
    fn test_empty_and_zero_total_have_no_layout() {
        assert!(pie_layout(&[]).is_none());
        assert!(pie_layout(&[0.0]).is_none());
        assert!(pie_layout(&[0.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_large_arc_only_strictly_past_half() {
        let halves = pie_layout(&[1.0, 1.0]).unwrap();
        assert!(halves.iter().all(|s| !s.large_arc));

        let uneven = pie_layout(&[3.0, 1.0]).unwrap();
        assert!(uneven[0].large_arc);
        assert!(!uneven[1].large_arc);
    }

    #[test]
    fn test_many_tiny_slices_never_set_large_arc() {
        let values = vec![1.0; 20];
        let segments = pie_layout(&values).unwrap();
        assert!(segments.iter().all(|s| !s.large_arc));
    }

    #[test]
    fn test_segments_chain_around_the_circle() {
        let segments = pie_layout(&[1.0, 2.0, 3.0]).unwrap();
        for pair in segments.windows(2) {
            assert!((pair[0].end.0 - pair[1].start.0).abs() < EPS);
            assert!((pair[0].end.1 - pair[1].start.1).abs() < EPS);
        }
        let (x, y) = segments[0].start;
        assert!(x.abs() < EPS);
        assert!((y + 1.0).abs() < EPS);
    }

    #[test]
    fn test_arc_path_carries_flags_and_closes() {
        let seg = ArcSegment {
            fraction: 0.75,
            start: (0.0, -1.0),
            end: (-1.0, 0.0),
            large_arc: true,
        };
        let d = arc_path(&seg, 0.0, 0.0, 1.0);
        assert_eq!(
            d,
            "M 0.0000 0.0000 L 0.0000 -1.0000 A 1.0000 1.0000 0 1 1 -1.0000 0.0000 Z"
        );
    }

    #[test]
    fn test_stacked_heights_scale_against_tallest_bar() {
        let records = vec![record("Jan", 2.0, 3.0, 0.0), record("Feb", 5.0, 0.0, 5.0)];
        let layout = stacked_layout(&records, &request_keys());

        assert_eq!(layout.max_total, 10.0);
        assert!((layout.bars[0].height_frac - 0.5).abs() < EPS);
        assert!((layout.bars[1].height_frac - 1.0).abs() < EPS);

        let jan = &layout.bars[0];
        assert!((jan.segments[0].frac_of_bar - 0.4).abs() < EPS);
        assert!((jan.segments[1].frac_of_bar - 0.6).abs() < EPS);
        assert!((jan.segments[2].frac_of_bar - 0.0).abs() < EPS);
    }

    #[test]
    fn test_zero_total_record_collapses_without_artifacts() {
        let records = vec![record("Jan", 0.0, 0.0, 0.0)];
        let layout = stacked_layout(&records, &request_keys());
        assert_eq!(layout.max_total, 0.0);

        let bar = &layout.bars[0];
        assert_eq!(bar.height_frac, 0.0);
        assert!(bar.height_frac.is_finite());
        assert!(bar.segments.iter().all(|s| s.frac_of_bar == 0.0));
    }

    #[test]
    fn test_key_never_present_in_any_record_counts_as_zero() {
        let records = vec![StackedRecord::new("MAR").with_value("cita", 4.0).unwrap()];
        let keys = SeriesKeys::new(["cita", "garantia"]);
        let layout = stacked_layout(&records, &keys);
        assert_eq!(layout.bars[0].total, 4.0);
        assert_eq!(layout.bars[0].segments[1].value, 0.0);
        assert_eq!(layout.bars[0].segments[1].frac_of_bar, 0.0);
    }

    #[test]
    fn test_layouts_are_idempotent() {
        let records = vec![record("Jan", 2.0, 3.0, 0.0), record("Feb", 5.0, 0.0, 5.0)];
        let keys = request_keys();
        assert_eq!(stacked_layout(&records, &keys), stacked_layout(&records, &keys));

        let values = [1.0, 2.0, 3.0];
        assert_eq!(pie_layout(&values), pie_layout(&values));
    }
}
