//! Time-of-day parsing and the linear time→percent scale.

use super::types::RockSegment;

/// Parse a `"HH:MM:SS"` time of day into seconds since midnight.
///
/// Accepts an optional date prefix (`"YYYY-MM-DD HH:MM:SS"`, everything up
/// to the first space is discarded) and a missing seconds field. Malformed
/// input parses as `0`, pinning the value to the start of the timeline
/// instead of failing. Known limitation: a bad timestamp is therefore
/// indistinguishable from midnight.
pub fn parse_time_secs(raw: &str) -> u32 {
    if raw.is_empty() {
        return 0;
    }
    let time_part = match raw.split_once(' ') {
        Some((_, rest)) => rest,
        None => raw,
    };

    // [h, m, s]; seconds default to 0 when omitted, extra fields ignored.
    let mut fields = [0u32; 3];
    let mut count = 0;
    for part in time_part.split(':') {
        let Ok(value) = part.parse::<u32>() else {
            return 0;
        };
        if count < fields.len() {
            fields[count] = value;
        }
        count += 1;
    }
    if count < 2 {
        return 0;
    }

    fields[0] * 3600 + fields[1] * 60 + fields[2]
}

/// Derived timeline bounds and the linear time→percent mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub min_sec: u32,
    pub max_sec: u32,
    pub total_sec: u32,
}

impl TimeScale {
    /// Bounds over a batch of segments: minimum over parsed starts, maximum
    /// over parsed ends. The two may come from different segments. The span
    /// is floored at one second so a single instant still yields a usable
    /// scale.
    pub fn from_segments(segments: &[RockSegment]) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        let min_sec = segments
            .iter()
            .map(|s| parse_time_secs(&s.start))
            .min()
            .unwrap_or(0);
        let max_sec = segments
            .iter()
            .map(|s| parse_time_secs(&s.end))
            .max()
            .unwrap_or(0);
        let total_sec = max_sec.saturating_sub(min_sec).max(1);
        Some(Self {
            min_sec,
            max_sec,
            total_sec,
        })
    }

    /// Map a time to a percent position along the track. Only guaranteed to
    /// land in `[0, 100]` for times within the bounds; callers drop anything
    /// outside.
    pub fn to_percent(&self, time_sec: u32) -> f32 {
        ((time_sec as f64 - self.min_sec as f64) / self.total_sec as f64 * 100.0) as f32
    }

    /// Hourly tick marks covering the scaled range. Ticks whose position
    /// falls outside the track are dropped.
    pub fn hour_ticks(&self) -> Vec<HourTick> {
        let start_hour = self.min_sec / 3600;
        let end_hour = self.max_sec.div_ceil(3600);
        (start_hour..=end_hour)
            .filter_map(|hour| {
                let percent = self.to_percent(hour * 3600);
                (0.0..=100.0)
                    .contains(&percent)
                    .then_some(HourTick { hour, percent })
            })
            .collect()
    }
}

/// One whole-hour marker on the timeline axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourTick {
    pub hour: u32,
    pub percent: f32,
}

impl HourTick {
    pub fn label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::types::Lithology;

    fn seg(label: i64, start: &str, end: &str) -> RockSegment {
        RockSegment {
            label: Lithology::Code(label),
            start: start.to_string(),
            end: end.to_string(),
            duration: 0.0,
        }
    }

    #[test]
    fn parses_plain_time_of_day() {
        assert_eq!(parse_time_secs("08:00:00"), 28800);
        assert_eq!(parse_time_secs("09:30:15"), 34215);
        assert_eq!(parse_time_secs("00:00:00"), 0);
    }

    #[test]
    fn date_prefix_is_discarded() {
        assert_eq!(
            parse_time_secs("2023-10-24 08:00:00"),
            parse_time_secs("08:00:00")
        );
    }

    #[test]
    fn seconds_field_is_optional() {
        assert_eq!(parse_time_secs("9:30"), 34200);
    }

    #[test]
    fn malformed_input_parses_as_zero() {
        assert_eq!(parse_time_secs(""), 0);
        assert_eq!(parse_time_secs("abc"), 0);
        assert_eq!(parse_time_secs("12"), 0);
        assert_eq!(parse_time_secs("??"), 0);
        assert_eq!(parse_time_secs("12:x0:00"), 0);
    }

    #[test]
    fn bounds_come_from_independent_segments() {
        let segments = [seg(0, "09:00:00", "12:00:00"), seg(1, "08:00:00", "10:00:00")];
        let scale = TimeScale::from_segments(&segments).unwrap();
        assert_eq!(scale.min_sec, 28800);
        assert_eq!(scale.max_sec, 43200);
        assert_eq!(scale.total_sec, 14400);
    }

    #[test]
    fn collapsed_span_floors_at_one_second() {
        let segments = [seg(2, "12:00:00", "12:00:00")];
        let scale = TimeScale::from_segments(&segments).unwrap();
        assert_eq!(scale.total_sec, 1);
    }

    #[test]
    fn to_percent_stays_in_range_within_bounds() {
        let segments = [seg(0, "08:00:00", "10:00:00")];
        let scale = TimeScale::from_segments(&segments).unwrap();
        for sec in (scale.min_sec..=scale.max_sec).step_by(600) {
            let pct = scale.to_percent(sec);
            assert!((0.0..=100.0).contains(&pct), "{sec} -> {pct}");
        }
        assert_eq!(scale.to_percent(scale.min_sec), 0.0);
        assert_eq!(scale.to_percent(scale.max_sec), 100.0);
    }

    #[test]
    fn hour_ticks_cover_the_range() {
        let segments = [seg(0, "08:00:00", "09:30:00"), seg(1, "09:30:00", "10:00:00")];
        let scale = TimeScale::from_segments(&segments).unwrap();
        let ticks = scale.hour_ticks();
        let hours: Vec<u32> = ticks.iter().map(|t| t.hour).collect();
        assert_eq!(hours, vec![8, 9, 10]);
        assert_eq!(ticks[0].percent, 0.0);
        assert_eq!(ticks[1].percent, 50.0);
        assert_eq!(ticks[2].percent, 100.0);
        assert_eq!(ticks[0].label(), "8:00");
    }

    #[test]
    fn out_of_track_ticks_are_dropped() {
        // 08:15–09:45: the 8:00 and 10:00 boundaries land outside the track.
        let segments = [seg(0, "08:15:00", "09:45:00")];
        let scale = TimeScale::from_segments(&segments).unwrap();
        let hours: Vec<u32> = scale.hour_ticks().iter().map(|t| t.hour).collect();
        assert_eq!(hours, vec![9]);
    }
}
