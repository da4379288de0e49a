//! Radar chart data for the comparison view
//!
//! A `RadarChart` is an owned value built for one render and dropped after it.
//! Re-rendering builds a new one; nothing is cached between requests.

use crate::types::ScoredStrategy;
use serde::Serialize;

pub const AXIS_LABELS: [&str; 5] = ["Latency", "Cost", "Scalability", "Difficulty", "Cold Start"];

/// (background, border) colour pairs, cycled over datasets
const PALETTE: [(&str, &str); 5] = [
    ("rgba(255,180,60,0.2)", "#ffb43c"),
    ("rgba(100,200,255,0.2)", "#64c8ff"),
    ("rgba(255,100,150,0.2)", "#ff6496"),
    ("rgba(150,255,100,0.2)", "#96ff64"),
    ("rgba(200,100,255,0.2)", "#c864ff"),
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RadarDataset {
    pub label: String,
    pub data: [u8; 5],
    pub background_color: &'static str,
    pub border_color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RadarChart {
    pub labels: [&'static str; 5],
    pub datasets: Vec<RadarDataset>,
    /// Radial axis bounds
    pub min: u8,
    pub max: u8,
}

impl RadarChart {
    /// One dataset per comparison, in ranked order
    pub fn from_comparisons(comparisons: &[ScoredStrategy]) -> Self {
        let datasets = comparisons
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                let (background_color, border_color) = PALETTE[idx % PALETTE.len()];
                RadarDataset {
                    label: s.name().to_string(),
                    data: s.radar.values(),
                    background_color,
                    border_color,
                }
            })
            .collect();

        Self {
            labels: AXIS_LABELS,
            datasets,
            min: 0,
            max: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recommend;
    use crate::types::UserConstraints;

    #[test]
    fn test_chart_has_dataset_per_comparison() {
        let rec = recommend(&UserConstraints::default());
        let chart = RadarChart::from_comparisons(&rec.comparisons);
        assert_eq!(chart.labels, AXIS_LABELS);
        assert_eq!(chart.datasets.len(), rec.comparisons.len());
        for (ds, s) in chart.datasets.iter().zip(&rec.comparisons) {
            assert_eq!(ds.label, s.name());
            assert_eq!(ds.data, s.radar.values());
        }
    }

    #[test]
    fn test_palette_cycles() {
        let rec = recommend(&UserConstraints::default());
        let mut comparisons = rec.comparisons.clone();
        comparisons.extend(rec.comparisons.iter().cloned());
        let chart = RadarChart::from_comparisons(&comparisons);
        assert_eq!(chart.datasets.len(), 10);
        assert_eq!(chart.datasets[0].border_color, chart.datasets[5].border_color);
        assert_ne!(chart.datasets[0].border_color, chart.datasets[1].border_color);
    }

    #[test]
    fn test_chart_serializes_camel_case() {
        let rec = recommend(&UserConstraints::default());
        let json = serde_json::to_value(RadarChart::from_comparisons(&rec.comparisons)).unwrap();
        assert_eq!(json["labels"][4], "Cold Start");
        assert_eq!(json["datasets"][0]["borderColor"], "#ffb43c");
        assert_eq!(json["max"], 10);
    }

    #[test]
    fn test_empty_comparisons() {
        let chart = RadarChart::from_comparisons(&[]);
        assert!(chart.datasets.is_empty());
    }
}
