//! Core types for the Inference Pathway Advisor
//!
//! Two families live here:
//! - The wire records exchanged with callers (`AnalyzeRequest`, `Recommendation`)
//! - The normalized constraint record the engine scores against (`UserConstraints`)

use crate::catalog::StrategyDescriptor;
use crate::error::AdvisorError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape of the traffic the model will serve
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrafficPattern {
    Spiky,
    Steady,
    Burst,
    Offline,
    #[default]
    Unspecified,
}

/// How much the caller is willing to spend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CostPreference {
    Low,
    Medium,
    High,
    #[default]
    Unspecified,
}

/// How well the workload tolerates cold starts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ColdStartTolerance {
    Low,
    Medium,
    High,
    #[default]
    Unspecified,
}

impl TrafficPattern {
    /// Parse a wire label. Matching is exact; anything else is `Unspecified`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Spiky") => TrafficPattern::Spiky,
            Some("Steady") => TrafficPattern::Steady,
            Some("Burst") => TrafficPattern::Burst,
            Some("Offline") => TrafficPattern::Offline,
            _ => TrafficPattern::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrafficPattern::Spiky => "Spiky",
            TrafficPattern::Steady => "Steady",
            TrafficPattern::Burst => "Burst",
            TrafficPattern::Offline => "Offline",
            TrafficPattern::Unspecified => "Unspecified",
        }
    }
}

impl CostPreference {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Low") => CostPreference::Low,
            Some("Medium") => CostPreference::Medium,
            Some("High") => CostPreference::High,
            _ => CostPreference::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostPreference::Low => "Low",
            CostPreference::Medium => "Medium",
            CostPreference::High => "High",
            CostPreference::Unspecified => "Unspecified",
        }
    }
}

impl ColdStartTolerance {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Low") => ColdStartTolerance::Low,
            Some("Medium") => ColdStartTolerance::Medium,
            Some("High") => ColdStartTolerance::High,
            _ => ColdStartTolerance::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColdStartTolerance::Low => "Low",
            ColdStartTolerance::Medium => "Medium",
            ColdStartTolerance::High => "High",
            ColdStartTolerance::Unspecified => "Unspecified",
        }
    }
}

/// Normalized constraints for one request
///
/// Numeric fields use 0 for "no preference"; the engine never rejects a value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct UserConstraints {
    pub model_size_mb: f64,
    pub latency_target_ms: f64,
    pub needs_gpu: bool,
    pub traffic_pattern: TrafficPattern,
    pub cost_preference: CostPreference,
    pub cold_start_tolerance: ColdStartTolerance,
}

impl UserConstraints {
    /// Reject requests without a positive model size and latency target.
    ///
    /// The engine does not call this; it is the boundary check callers run first.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        if self.model_size_mb.is_nan() || self.model_size_mb <= 0.0 {
            return Err(AdvisorError::InvalidInput(
                "Please enter a valid model size".to_string(),
            ));
        }
        if self.latency_target_ms.is_nan() || self.latency_target_ms <= 0.0 {
            return Err(AdvisorError::InvalidInput(
                "Please enter a valid latency target".to_string(),
            ));
        }
        Ok(())
    }
}

/// Raw request body from the HTTP boundary
///
/// Field names are the wire contract and must not change. Every field is kept
/// as raw JSON so a wrongly typed value degrades to "no preference" instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub model_size: Value,
    #[serde(default)]
    pub latency: Value,
    #[serde(default)]
    pub gpu_flag: Value,
    #[serde(default)]
    pub traffic_flow: Value,
    #[serde(default)]
    pub cost_preference: Value,
    #[serde(default)]
    pub boot_tolerance: Value,
}

impl AnalyzeRequest {
    /// Coerce the raw fields into `UserConstraints`. Never fails.
    pub fn normalize(&self) -> UserConstraints {
        UserConstraints {
            model_size_mb: coerce_number(&self.model_size),
            latency_target_ms: coerce_number(&self.latency),
            needs_gpu: self.gpu_flag.as_str() == Some("Yes"),
            traffic_pattern: TrafficPattern::from_label(self.traffic_flow.as_str()),
            cost_preference: CostPreference::from_label(self.cost_preference.as_str()),
            cold_start_tolerance: ColdStartTolerance::from_label(self.boot_tolerance.as_str()),
        }
    }
}

/// Numbers and numeric strings pass through, `true` counts as 1, everything
/// else becomes 0.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Attribute magnitudes on the 0-10 chart scale (higher = more favorable)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Radar {
    pub latency: u8,
    pub cost: u8,
    pub scalability: u8,
    pub difficulty: u8,
    pub cold_start: u8,
}

impl Radar {
    /// Values in chart axis order
    pub fn values(&self) -> [u8; 5] {
        [
            self.latency,
            self.cost,
            self.scalability,
            self.difficulty,
            self.cold_start,
        ]
    }
}

/// A catalog entry scored against one request
#[derive(Debug, Clone, Serialize)]
pub struct ScoredStrategy {
    #[serde(flatten)]
    pub strategy: &'static StrategyDescriptor,
    pub score: u32,
    pub radar: Radar,
}

impl ScoredStrategy {
    pub fn name(&self) -> &'static str {
        self.strategy.id
    }
}

/// Engine output: best pick plus the full ranked comparison
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub recommended: String,
    pub reason: String,
    pub comparisons: Vec<ScoredStrategy>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> AnalyzeRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_numeric_strings() {
        let req = request(json!({
            "modelSize": "120",
            "latency": " 250 ",
            "gpuFlag": "Yes",
            "trafficFlow": "Burst",
            "costPreference": "Medium",
            "bootTolerance": "Low"
        }));
        let c = req.normalize();
        assert_eq!(c.model_size_mb, 120.0);
        assert_eq!(c.latency_target_ms, 250.0);
        assert!(c.needs_gpu);
        assert_eq!(c.traffic_pattern, TrafficPattern::Burst);
        assert_eq!(c.cost_preference, CostPreference::Medium);
        assert_eq!(c.cold_start_tolerance, ColdStartTolerance::Low);
    }

    #[test]
    fn test_normalize_numbers() {
        let c = request(json!({"modelSize": 80.5, "latency": 40})).normalize();
        assert_eq!(c.model_size_mb, 80.5);
        assert_eq!(c.latency_target_ms, 40.0);
    }

    #[test]
    fn test_normalize_empty_body() {
        let c = request(json!({})).normalize();
        assert_eq!(c, UserConstraints::default());
    }

    #[test]
    fn test_normalize_garbage_coerces_to_zero() {
        let c = request(json!({
            "modelSize": "lots",
            "latency": [1, 2],
            "gpuFlag": "yes",
            "trafficFlow": "Chaotic",
            "costPreference": 3
        }))
        .normalize();
        assert_eq!(c.model_size_mb, 0.0);
        assert_eq!(c.latency_target_ms, 0.0);
        // Only the exact "Yes" flag enables GPU
        assert!(!c.needs_gpu);
        assert_eq!(c.traffic_pattern, TrafficPattern::Unspecified);
        assert_eq!(c.cost_preference, CostPreference::Unspecified);
    }

    #[test]
    fn test_coerce_booleans_like_numbers() {
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&json!(false)), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!({"mb": 5})), 0.0);

        let c = request(json!({"modelSize": true, "latency": false})).normalize();
        assert_eq!(c.model_size_mb, 1.0);
        assert_eq!(c.latency_target_ms, 0.0);
    }

    #[test]
    fn test_enum_labels_are_case_sensitive() {
        assert_eq!(CostPreference::from_label(Some("low")), CostPreference::Unspecified);
        assert_eq!(CostPreference::from_label(Some("Low")), CostPreference::Low);
        assert_eq!(
            ColdStartTolerance::from_label(Some("Unspecified")),
            ColdStartTolerance::Unspecified
        );
        assert_eq!(TrafficPattern::from_label(None), TrafficPattern::Unspecified);
    }

    #[test]
    fn test_validate_rejects_missing_size_and_latency() {
        let mut c = UserConstraints::default();
        let err = c.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid input: Please enter a valid model size");

        c.model_size_mb = 100.0;
        let err = c.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: Please enter a valid latency target"
        );

        c.latency_target_ms = -5.0;
        assert!(c.validate().is_err());

        c.latency_target_ms = 5.0;
        assert!(c.validate().is_ok());
    }
}
