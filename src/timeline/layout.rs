//! Geometry derivation for the rock-band widget.
//!
//! Everything here is pure. The layout is computed once when a batch of
//! segment data arrives and cached by the widget, so hover-driven repaints
//! never re-sort or re-scale.

use super::scale::{parse_time_secs, HourTick, TimeScale};
use super::types::{Lithology, RockPalette, RockSegment};
use egui::Color32;

/// Minimum visible band width in percent of the track, applied to
/// zero-duration and inverted segments so they stay visible and hoverable.
pub const MIN_BAND_WIDTH_PCT: f32 = 0.5;

/// Computed geometry for one segment's band.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Index into the sorted segment list.
    pub segment: usize,
    pub left_pct: f32,
    pub width_pct: f32,
    pub color: Color32,
}

/// One legend row: a distinct label paired with its resolved color.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: Lithology,
    pub color: Color32,
}

/// Fully derived rock-band geometry for one batch of segment data.
///
/// Segments are stored sorted ascending by parsed start time (stable, so
/// equal starts keep their input order). Overlapping source intervals are
/// left overlapping; there is no collision resolution beyond the separator
/// stroke drawn between adjacent bands.
#[derive(Debug, Clone)]
pub struct BandLayout {
    pub segments: Vec<RockSegment>,
    pub scale: TimeScale,
    pub ticks: Vec<HourTick>,
    pub bands: Vec<Band>,
    pub legend: Vec<LegendEntry>,
}

impl BandLayout {
    /// Derive the layout for a batch of segments. Returns `None` for an
    /// empty batch; the widget renders its placeholder instead.
    pub fn new(segments: &[RockSegment], palette: &RockPalette) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        let mut sorted = segments.to_vec();
        sorted.sort_by_key(|s| parse_time_secs(&s.start));

        let scale = TimeScale::from_segments(&sorted)?;
        let ticks = scale.hour_ticks();

        let bands = sorted
            .iter()
            .enumerate()
            .map(|(i, seg)| {
                let left_pct = scale.to_percent(parse_time_secs(&seg.start));
                let width = scale.to_percent(parse_time_secs(&seg.end)) - left_pct;
                Band {
                    segment: i,
                    left_pct,
                    width_pct: if width <= 0.0 { MIN_BAND_WIDTH_PCT } else { width },
                    color: palette.resolve(&seg.label),
                }
            })
            .collect();

        let mut labels: Vec<Lithology> = sorted.iter().map(|s| s.label.clone()).collect();
        labels.sort();
        labels.dedup();
        let legend = labels
            .into_iter()
            .map(|label| LegendEntry {
                color: palette.resolve(&label),
                label,
            })
            .collect();

        Some(Self {
            segments: sorted,
            scale,
            ticks,
            bands,
            legend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(label: i64, start: &str, end: &str) -> RockSegment {
        RockSegment {
            label: Lithology::Code(label),
            start: start.to_string(),
            end: end.to_string(),
            duration: 0.0,
        }
    }

    #[test]
    fn empty_batch_yields_no_layout() {
        assert!(BandLayout::new(&[], &RockPalette::default()).is_none());
    }

    #[test]
    fn two_contiguous_segments_split_the_track() {
        let segments = [seg(0, "08:00:00", "09:30:00"), seg(1, "09:30:00", "10:00:00")];
        let layout = BandLayout::new(&segments, &RockPalette::default()).unwrap();

        assert_eq!(layout.scale.min_sec, 28800);
        assert_eq!(layout.scale.max_sec, 36000);
        assert_eq!(layout.scale.total_sec, 7200);

        assert_eq!(layout.bands[0].left_pct, 0.0);
        assert_eq!(layout.bands[0].width_pct, 75.0);
        assert_eq!(layout.bands[1].left_pct, 75.0);
        assert_eq!(layout.bands[1].width_pct, 25.0);
    }

    #[test]
    fn segments_are_sorted_by_start_and_sort_is_stable() {
        let segments = [
            seg(2, "10:00:00", "11:00:00"),
            seg(0, "08:00:00", "09:00:00"),
            seg(3, "08:00:00", "08:30:00"),
        ];
        let layout = BandLayout::new(&segments, &RockPalette::default()).unwrap();
        let order: Vec<&Lithology> = layout.segments.iter().map(|s| &s.label).collect();
        // The two 08:00 segments keep their input order.
        assert_eq!(
            order,
            vec![
                &Lithology::Code(0),
                &Lithology::Code(3),
                &Lithology::Code(2),
            ]
        );
    }

    #[test]
    fn degenerate_segment_gets_floor_width() {
        let segments = [seg(2, "12:00:00", "12:00:00")];
        let layout = BandLayout::new(&segments, &RockPalette::default()).unwrap();
        assert_eq!(layout.bands[0].width_pct, MIN_BAND_WIDTH_PCT);
    }

    #[test]
    fn inverted_segment_gets_floor_width() {
        let segments = [seg(0, "08:00:00", "10:00:00"), seg(1, "09:00:00", "08:30:00")];
        let layout = BandLayout::new(&segments, &RockPalette::default()).unwrap();
        let inverted = layout
            .bands
            .iter()
            .find(|b| layout.segments[b.segment].label == Lithology::Code(1))
            .unwrap();
        assert_eq!(inverted.width_pct, MIN_BAND_WIDTH_PCT);
    }

    #[test]
    fn contiguous_widths_sum_to_full_track() {
        let segments = [
            seg(0, "08:00:00", "08:45:00"),
            seg(1, "08:45:00", "09:10:00"),
            seg(0, "09:10:00", "10:00:00"),
        ];
        let layout = BandLayout::new(&segments, &RockPalette::default()).unwrap();
        let total: f32 = layout.bands.iter().map(|b| b.width_pct).sum();
        assert!((total - 100.0).abs() < 0.01, "total = {total}");
    }

    #[test]
    fn malformed_start_pins_segment_to_left_edge() {
        let segments = [seg(0, "08:00:00", "10:00:00"), seg(1, "??", "09:00:00")];
        let layout = BandLayout::new(&segments, &RockPalette::default()).unwrap();
        // The malformed start parses as 0 and becomes the timeline minimum.
        assert_eq!(layout.scale.min_sec, 0);
        assert_eq!(layout.segments[0].label, Lithology::Code(1));
        assert_eq!(layout.bands[0].left_pct, 0.0);
    }

    #[test]
    fn legend_is_deduplicated_and_sorted() {
        let segments = [
            seg(4, "08:00:00", "08:10:00"),
            seg(1, "08:10:00", "08:20:00"),
            seg(4, "08:20:00", "08:30:00"),
            seg(0, "08:30:00", "08:40:00"),
        ];
        let layout = BandLayout::new(&segments, &RockPalette::default()).unwrap();
        let labels: Vec<&Lithology> = layout.legend.iter().map(|e| &e.label).collect();
        assert_eq!(
            labels,
            vec![
                &Lithology::Code(0),
                &Lithology::Code(1),
                &Lithology::Code(4),
            ]
        );
    }

    #[test]
    fn band_colors_follow_the_palette_with_fallback() {
        let palette = RockPalette::default();
        let segments = [seg(0, "08:00:00", "09:00:00"), seg(42, "09:00:00", "10:00:00")];
        let layout = BandLayout::new(&segments, &palette).unwrap();
        assert_eq!(layout.bands[0].color, palette.resolve(&Lithology::Code(0)));
        assert_eq!(
            layout.bands[1].color,
            Color32::from_rgb(0x94, 0xa3, 0xb8)
        );
    }
}
