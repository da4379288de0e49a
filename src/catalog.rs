//! Strategy Catalog: the fixed set of inference hosting strategies
//!
//! Entries are compiled into the binary and never change at runtime, so every
//! request can borrow them without synchronization.

use crate::attribute::AttributeLevel;
use serde::Serialize;

/// Icon used when a strategy name is not in the catalog
pub const DEFAULT_ICON: &str = "🔧";

/// A deployment strategy with its qualitative profile
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDescriptor {
    #[serde(rename = "name")]
    pub id: &'static str,
    pub latency: AttributeLevel,
    pub cost: AttributeLevel,
    pub scalability: AttributeLevel,
    pub difficulty: AttributeLevel,
    pub cold_start: AttributeLevel,
    pub best_for: &'static str,
    pub summary: &'static str,
    #[serde(rename = "pros")]
    pub advantages: &'static [&'static str],
    #[serde(rename = "cons")]
    pub limitations: &'static [&'static str],
    #[serde(skip)]
    pub icon: &'static str,
}

pub const LAMBDA_S3: &str = "Lambda + S3";
pub const SAGEMAKER_SERVERLESS: &str = "SageMaker Serverless";
pub const SAGEMAKER_REALTIME: &str = "SageMaker Real-Time Endpoint";
pub const FARGATE_GPU: &str = "ECS/Fargate GPU";
pub const GREENGRASS_EDGE: &str = "AWS Greengrass (Edge Execution)";

static CATALOG: [StrategyDescriptor; 5] = [
    StrategyDescriptor {
        id: LAMBDA_S3,
        latency: AttributeLevel::Medium,
        cost: AttributeLevel::Low,
        scalability: AttributeLevel::High,
        difficulty: AttributeLevel::Easy,
        cold_start: AttributeLevel::High,
        best_for: "Small models, low traffic, minimal cost",
        summary: "Cheap and simple, but cold starts hurt performance.",
        advantages: &["Very low cost", "Simple to maintain", "Scales automatically"],
        limitations: &[
            "Cold starts increase latency",
            "No GPU support",
            "Bad for large models",
        ],
        icon: "⚡",
    },
    StrategyDescriptor {
        id: SAGEMAKER_SERVERLESS,
        latency: AttributeLevel::Medium,
        cost: AttributeLevel::Medium,
        scalability: AttributeLevel::High,
        difficulty: AttributeLevel::Medium,
        cold_start: AttributeLevel::Medium,
        best_for: "Spiky or unpredictable workloads",
        summary: "Flexible and cost-efficient for variable traffic.",
        advantages: &["Auto-scaling", "Pay-per-use", "Supports medium-sized models"],
        limitations: &[
            "Cold starts happen under load",
            "Not ideal for ultra-low latency apps",
        ],
        icon: "🔄",
    },
    StrategyDescriptor {
        id: SAGEMAKER_REALTIME,
        latency: AttributeLevel::Low,
        cost: AttributeLevel::High,
        scalability: AttributeLevel::VeryHigh,
        difficulty: AttributeLevel::Medium,
        cold_start: AttributeLevel::None,
        best_for: "Strict latency, always-on workloads",
        summary: "Fastest stable inference with no cold starts.",
        advantages: &[
            "Zero cold starts",
            "Highly scalable",
            "Consistent low latency",
        ],
        limitations: &["High cost", "Needs endpoint always running"],
        icon: "🚀",
    },
    StrategyDescriptor {
        id: FARGATE_GPU,
        latency: AttributeLevel::VeryLow,
        cost: AttributeLevel::High,
        scalability: AttributeLevel::High,
        difficulty: AttributeLevel::Hard,
        cold_start: AttributeLevel::Low,
        best_for: "Heavy GPU workloads, large models",
        summary: "Powerful containerized GPU inference.",
        advantages: &[
            "Full GPU acceleration",
            "Consistent performance",
            "Great for large parallel workloads",
        ],
        limitations: &[
            "High cost",
            "Complexity in setup",
            "Overkill for small models",
        ],
        icon: "🖥️",
    },
    StrategyDescriptor {
        id: GREENGRASS_EDGE,
        latency: AttributeLevel::UltraLow,
        cost: AttributeLevel::Low,
        scalability: AttributeLevel::EdgeOnly,
        difficulty: AttributeLevel::Medium,
        cold_start: AttributeLevel::None,
        best_for: "Offline or local inference",
        summary: "Ultra-low latency on edge devices.",
        advantages: &[
            "Zero cloud dependency",
            "Instant inference",
            "Very low cost",
        ],
        limitations: &["Requires edge hardware", "Not cloud scalable"],
        icon: "📱",
    },
];

/// All strategies in catalog order. Stable for the life of the process.
pub fn list() -> &'static [StrategyDescriptor] {
    &CATALOG
}

/// Look up a strategy by its id
pub fn find(id: &str) -> Option<&'static StrategyDescriptor> {
    CATALOG.iter().find(|s| s.id == id)
}

/// Display icon for a strategy name, falling back to the generic one
pub fn icon_for(name: &str) -> &'static str {
    find(name).map(|s| s.icon).unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_returns_all_5() {
        let strategies = list();
        assert_eq!(strategies.len(), 5);

        let ids: Vec<_> = strategies.iter().map(|s| s.id).collect();
        let mut unique_ids = ids.clone();
        unique_ids.sort();
        unique_ids.dedup();
        assert_eq!(ids.len(), unique_ids.len(), "Strategy IDs should be unique");
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = list().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                LAMBDA_S3,
                SAGEMAKER_SERVERLESS,
                SAGEMAKER_REALTIME,
                FARGATE_GPU,
                GREENGRASS_EDGE
            ]
        );
    }

    #[test]
    fn test_list_is_stable_across_calls() {
        assert!(std::ptr::eq(list(), list()));
    }

    #[test]
    fn test_entries_have_required_fields() {
        for s in list() {
            assert!(!s.best_for.is_empty(), "{} needs best_for", s.id);
            assert!(!s.summary.is_empty(), "{} needs summary", s.id);
            assert!(!s.advantages.is_empty(), "{} needs advantages", s.id);
            assert!(!s.limitations.is_empty(), "{} needs limitations", s.id);
            assert_ne!(s.icon, DEFAULT_ICON);
        }
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(icon_for(LAMBDA_S3), "⚡");
        assert_eq!(icon_for(GREENGRASS_EDGE), "📱");
        assert_eq!(icon_for("Bare Metal"), DEFAULT_ICON);
    }

    #[test]
    fn test_descriptor_wire_names() {
        let json = serde_json::to_value(find(GREENGRASS_EDGE).unwrap()).unwrap();
        assert_eq!(json["name"], GREENGRASS_EDGE);
        assert_eq!(json["latency"], "Ultra Low");
        assert_eq!(json["scalability"], "Edge-only");
        assert_eq!(json["coldStart"], "None");
        assert_eq!(json["bestFor"], "Offline or local inference");
        assert_eq!(json["pros"][0], "Zero cloud dependency");
        assert_eq!(json["cons"][1], "Not cloud scalable");
        assert!(json.get("icon").is_none());
    }
}
