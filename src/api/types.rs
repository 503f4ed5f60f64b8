//! Wire types for the analysis backend's REST endpoints.

use crate::timeline::{Lithology, RockSegment};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Response of `GET /api/tbm/summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryData {
    pub work_count: u32,
    pub stop_count: u32,
    pub work_total_min: f64,
    pub stop_total_min: f64,
}

impl SummaryData {
    /// Share of total shift time spent advancing, in percent. Guarded
    /// against an empty shift.
    pub fn work_rate(&self) -> f64 {
        let total = self.work_total_min + self.stop_total_min;
        if total > 0.0 {
            self.work_total_min / total * 100.0
        } else {
            0.0
        }
    }

    /// Share of total shift time spent stopped, in percent.
    pub fn stop_rate(&self) -> f64 {
        let total = self.work_total_min + self.stop_total_min;
        if total > 0.0 {
            self.stop_total_min / total * 100.0
        } else {
            0.0
        }
    }
}

/// Per-class advance efficiency aggregates.
#[derive(Debug, Clone, Deserialize)]
pub struct EfficiencyRow {
    pub label: Lithology,
    /// mm per cutterhead revolution.
    pub mean_penetration: f64,
    /// mm/min.
    pub mean_advance_rate: f64,
    /// kN.
    pub mean_thrust: f64,
    /// Thrust per unit penetration; absent when penetration is zero.
    #[serde(default)]
    pub specific_energy: Option<f64>,
}

/// Response of `GET /api/tbm/lithology`.
#[derive(Debug, Clone, Deserialize)]
pub struct LithologyData {
    pub segments: Vec<RockSegment>,
    pub efficiency: Vec<EfficiencyRow>,
}

/// One interval during which a gas exceeded its safety threshold.
#[derive(Debug, Clone, Deserialize)]
pub struct ExceedSegment {
    pub start: String,
    pub end: String,
    pub duration_sec: f64,
}

/// Statistics for one monitored gas channel.
#[derive(Debug, Clone, Deserialize)]
pub struct GasStat {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Absent for gases without a configured safety threshold.
    #[serde(default)]
    pub exceed_count: Option<u32>,
    #[serde(default)]
    pub exceed_segments: Vec<ExceedSegment>,
}

impl GasStat {
    pub fn is_exceeding(&self) -> bool {
        self.exceed_count.unwrap_or(0) > 0
    }

    /// The longest recorded exceedance interval, if any.
    pub fn longest_exceedance(&self) -> Option<&ExceedSegment> {
        self.exceed_segments
            .iter()
            .max_by(|a, b| a.duration_sec.total_cmp(&b.duration_sec))
    }
}

/// Response of `GET /api/tbm/gas`: gas key → statistics. A `BTreeMap`
/// keeps page and chart ordering deterministic.
pub type GasData = BTreeMap<String, GasStat>;

/// Response of `POST /api/tbm/report`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportResponse {
    pub report: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_rates_split_the_shift() {
        let data: SummaryData = serde_json::from_str(
            r#"{"work_count": 12, "stop_count": 11, "work_total_min": 300.0, "stop_total_min": 100.0}"#,
        )
        .unwrap();
        assert_eq!(data.work_count, 12);
        assert_eq!(data.work_rate(), 75.0);
        assert_eq!(data.stop_rate(), 25.0);
    }

    #[test]
    fn summary_rates_survive_an_empty_shift() {
        let data = SummaryData {
            work_count: 0,
            stop_count: 0,
            work_total_min: 0.0,
            stop_total_min: 0.0,
        };
        assert_eq!(data.work_rate(), 0.0);
        assert_eq!(data.stop_rate(), 0.0);
    }

    #[test]
    fn lithology_payload_deserializes_with_float_labels() {
        let json = r#"{
            "segments": [
                {"label": 0.0, "start": "08:00:00", "end": "09:30:00", "duration": 5400.0},
                {"label": 1.0, "start": "09:30:00", "end": "10:00:00", "duration": 1800.0}
            ],
            "efficiency": [
                {"label": 0.0, "mean_penetration": 8.2, "mean_advance_rate": 42.5, "mean_thrust": 9100.0, "specific_energy": 1109.7}
            ]
        }"#;
        let data: LithologyData = serde_json::from_str(json).unwrap();
        assert_eq!(data.segments.len(), 2);
        assert_eq!(data.segments[0].label, Lithology::Code(0));
        assert_eq!(data.efficiency[0].label, Lithology::Code(0));
        assert_eq!(data.efficiency[0].specific_energy, Some(1109.7));
    }

    #[test]
    fn gas_payload_tolerates_missing_threshold_fields() {
        let json = r#"{
            "oxygen": {"min": 19.8, "max": 21.2, "mean": 20.6, "exceed_count": 0},
            "dust": {"min": 0.2, "max": 14.0, "mean": 3.1, "exceed_count": 2,
                     "exceed_segments": [
                        {"start": "09:10:00", "end": "09:12:00", "duration_sec": 120.0},
                        {"start": "11:00:00", "end": "11:05:00", "duration_sec": 300.0}
                     ]},
            "nitrogen": {"min": 77.0, "max": 79.0, "mean": 78.1}
        }"#;
        let data: GasData = serde_json::from_str(json).unwrap();
        assert!(!data["oxygen"].is_exceeding());
        assert!(data["dust"].is_exceeding());
        assert_eq!(
            data["dust"].longest_exceedance().unwrap().duration_sec,
            300.0
        );
        assert_eq!(data["nitrogen"].exceed_count, None);
        assert!(data["nitrogen"].exceed_segments.is_empty());
    }

    #[test]
    fn report_response_carries_markdown() {
        let resp: ReportResponse =
            serde_json::from_str(r##"{"report": "# Shift Report\n\nAll nominal."}"##).unwrap();
        assert!(resp.report.starts_with("# Shift Report"));
    }
}
