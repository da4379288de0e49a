//! Attribute levels and the 0-10 radar scale
//!
//! Catalog entries describe their qualitative traits with a closed set of
//! levels. Each level maps to a radar magnitude through a lookup table, where
//! "lower latency/cost/difficulty/cold start" is the more favorable end and so
//! gets the higher number.
//!
//! `normalize` keeps the free-text rule set for labels that do not come from
//! the catalog. The table below reproduces exactly what `normalize` yields for
//! every level label, including the levels no rule singles out (`Edge-only`,
//! `Easy`, `Hard`, `None` stay at the neutral 5).

use serde::{Deserialize, Serialize};

/// Neutral radar value for labels no rule recognizes
pub const NEUTRAL: u8 = 5;

/// Qualitative level used by catalog attributes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeLevel {
    #[serde(rename = "Ultra Low")]
    UltraLow,
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Easy,
    Hard,
    None,
    #[serde(rename = "Edge-only")]
    EdgeOnly,
}

/// Radar lookup table, one row per level
const RADAR_TABLE: [(AttributeLevel, u8); 10] = [
    (AttributeLevel::UltraLow, 10),
    (AttributeLevel::VeryLow, 9),
    (AttributeLevel::Low, 8),
    (AttributeLevel::Medium, 5),
    (AttributeLevel::High, 3),
    (AttributeLevel::VeryHigh, 3),
    (AttributeLevel::Easy, NEUTRAL),
    (AttributeLevel::Hard, NEUTRAL),
    (AttributeLevel::None, NEUTRAL),
    (AttributeLevel::EdgeOnly, NEUTRAL),
];

impl AttributeLevel {
    pub const ALL: [AttributeLevel; 10] = [
        AttributeLevel::UltraLow,
        AttributeLevel::VeryLow,
        AttributeLevel::Low,
        AttributeLevel::Medium,
        AttributeLevel::High,
        AttributeLevel::VeryHigh,
        AttributeLevel::Easy,
        AttributeLevel::Hard,
        AttributeLevel::None,
        AttributeLevel::EdgeOnly,
    ];

    /// Display label, identical to the wire text
    pub fn label(&self) -> &'static str {
        match self {
            AttributeLevel::UltraLow => "Ultra Low",
            AttributeLevel::VeryLow => "Very Low",
            AttributeLevel::Low => "Low",
            AttributeLevel::Medium => "Medium",
            AttributeLevel::High => "High",
            AttributeLevel::VeryHigh => "Very High",
            AttributeLevel::Easy => "Easy",
            AttributeLevel::Hard => "Hard",
            AttributeLevel::None => "None",
            AttributeLevel::EdgeOnly => "Edge-only",
        }
    }

    /// Exact (case-insensitive) label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn radar_value(&self) -> u8 {
        RADAR_TABLE
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, value)| *value)
            .unwrap_or(NEUTRAL)
    }
}

impl std::fmt::Display for AttributeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a free-text attribute label onto the 0-10 radar scale.
///
/// Ordered substring rules, first match wins. Unmatched or empty text is
/// neutral. Never fails.
pub fn normalize(label: &str) -> u8 {
    let t = label.to_lowercase();
    let rules: [(&str, u8); 5] = [
        ("ultra low", 10),
        ("very low", 9),
        ("low", 8),
        ("medium", 5),
        ("high", 3),
    ];

    rules
        .iter()
        .find(|(needle, _)| t.contains(needle))
        .map(|(_, value)| *value)
        .unwrap_or(NEUTRAL)
}
