//! Segment and palette types shared by the rock-band pipeline.

use egui::Color32;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// Lithology class identifier: a small integer code for clustered classes,
/// or a free-form name for pre-labeled data. Ordered ascending (numeric
/// codes before names) so legend output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lithology {
    Code(i64),
    Name(String),
}

impl fmt::Display for Lithology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lithology::Code(code) => write!(f, "{code}"),
            Lithology::Name(name) => write!(f, "{name}"),
        }
    }
}

impl<'de> Deserialize<'de> for Lithology {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The backend emits cluster codes as JSON floats; normalize those to
        // integer codes so 0.0 and 0 name the same class.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(code) => Lithology::Code(code),
            Raw::Float(code) => Lithology::Code(code as i64),
            Raw::Text(name) => Lithology::Name(name),
        })
    }
}

/// One contiguous interval of a single lithology class during the shift.
///
/// `start` and `end` are `"HH:MM:SS"` time-of-day strings, optionally with a
/// date prefix. `duration` is elapsed seconds as computed upstream; it is
/// displayed as-is and never recomputed from `start`/`end`.
#[derive(Debug, Clone, Deserialize)]
pub struct RockSegment {
    pub label: Lithology,
    pub start: String,
    pub end: String,
    pub duration: f64,
}

/// Neutral gray for labels without a palette entry.
const FALLBACK_COLOR: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);

/// Immutable label→color mapping, owned by the page that renders the band
/// and passed by reference into the widget. The widget never mutates it.
#[derive(Debug, Clone)]
pub struct RockPalette {
    colors: BTreeMap<Lithology, Color32>,
}

impl Default for RockPalette {
    /// Built-in five-class palette indexed by small integer codes.
    fn default() -> Self {
        Self::new([
            (Lithology::Code(0), Color32::from_rgb(0x4a, 0x90, 0xe2)),
            (Lithology::Code(1), Color32::from_rgb(0x50, 0xe3, 0xc2)),
            (Lithology::Code(2), Color32::from_rgb(0xf5, 0xa6, 0x23)),
            (Lithology::Code(3), Color32::from_rgb(0xbd, 0x10, 0xe0)),
            (Lithology::Code(4), Color32::from_rgb(0x7e, 0xd3, 0x21)),
        ])
    }
}

impl RockPalette {
    pub fn new(entries: impl IntoIterator<Item = (Lithology, Color32)>) -> Self {
        Self {
            colors: entries.into_iter().collect(),
        }
    }

    /// Color for a label, falling back to neutral gray for unknown classes.
    pub fn resolve(&self, label: &Lithology) -> Color32 {
        self.colors.get(label).copied().unwrap_or(FALLBACK_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_deserializes_from_float_int_and_string() {
        let float: Lithology = serde_json::from_str("2.0").unwrap();
        assert_eq!(float, Lithology::Code(2));

        let int: Lithology = serde_json::from_str("3").unwrap();
        assert_eq!(int, Lithology::Code(3));

        let name: Lithology = serde_json::from_str("\"granite\"").unwrap();
        assert_eq!(name, Lithology::Name("granite".into()));
    }

    #[test]
    fn labels_order_codes_numerically_before_names() {
        let mut labels = vec![
            Lithology::Name("basalt".into()),
            Lithology::Code(10),
            Lithology::Code(2),
        ];
        labels.sort();
        assert_eq!(
            labels,
            vec![
                Lithology::Code(2),
                Lithology::Code(10),
                Lithology::Name("basalt".into()),
            ]
        );
    }

    #[test]
    fn unknown_label_resolves_to_fallback_gray() {
        let palette = RockPalette::default();
        assert_eq!(
            palette.resolve(&Lithology::Code(99)),
            Color32::from_rgb(0x94, 0xa3, 0xb8)
        );
        assert_ne!(
            palette.resolve(&Lithology::Code(0)),
            palette.resolve(&Lithology::Code(1))
        );
    }
}
