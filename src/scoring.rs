//! Per-strategy scoring rules
//!
//! Each strategy owns an ordered list of (condition, weight) rules. A request's
//! score for a strategy is the sum of weights whose condition holds; there is
//! no partial credit and no negative weight.
//!
//! The weights are a hand-tuned heuristic carried over unchanged. They are not
//! derived from any cost or latency model.

use crate::catalog::{
    FARGATE_GPU, GREENGRASS_EDGE, LAMBDA_S3, SAGEMAKER_REALTIME, SAGEMAKER_SERVERLESS,
};
use crate::types::{ColdStartTolerance, CostPreference, TrafficPattern, UserConstraints};
use serde::Serialize;

/// A boolean test against one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    CostIs(CostPreference),
    TrafficIs(TrafficPattern),
    ColdStartIs(ColdStartTolerance),
    NeedsGpu,
    /// Model size strictly below the threshold (MB). 0 means "no preference" and never matches.
    ModelSizeBelow(f64),
    ModelSizeAbove(f64),
    /// Latency target strictly below the threshold (ms). 0 means "no preference" and never matches.
    LatencyBelow(f64),
}

impl Condition {
    pub fn holds(&self, c: &UserConstraints) -> bool {
        match *self {
            Condition::CostIs(want) => c.cost_preference == want && want != CostPreference::Unspecified,
            Condition::TrafficIs(want) => {
                c.traffic_pattern == want && want != TrafficPattern::Unspecified
            }
            Condition::ColdStartIs(want) => {
                c.cold_start_tolerance == want && want != ColdStartTolerance::Unspecified
            }
            Condition::NeedsGpu => c.needs_gpu,
            Condition::ModelSizeBelow(limit) => below(c.model_size_mb, limit),
            Condition::ModelSizeAbove(limit) => c.model_size_mb > limit,
            Condition::LatencyBelow(limit) => below(c.latency_target_ms, limit),
        }
    }

    /// Short human description, e.g. "cost preference is Low"
    pub fn describe(&self) -> String {
        match self {
            Condition::CostIs(p) => format!("cost preference is {}", p.label()),
            Condition::TrafficIs(t) => format!("traffic pattern is {}", t.label()),
            Condition::ColdStartIs(t) => format!("cold-start tolerance is {}", t.label()),
            Condition::NeedsGpu => "GPU required".to_string(),
            Condition::ModelSizeBelow(mb) => format!("model size under {} MB", mb),
            Condition::ModelSizeAbove(mb) => format!("model size over {} MB", mb),
            Condition::LatencyBelow(ms) => format!("latency target under {} ms", ms),
        }
    }
}

fn below(value: f64, limit: f64) -> bool {
    value > 0.0 && value < limit
}

/// One weighted rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub condition: Condition,
    pub weight: u32,
}

const fn rule(condition: Condition, weight: u32) -> Rule {
    Rule { condition, weight }
}

const LAMBDA_RULES: &[Rule] = &[
    rule(Condition::CostIs(CostPreference::Low), 3),
    rule(Condition::ModelSizeBelow(150.0), 2),
    rule(Condition::ColdStartIs(ColdStartTolerance::High), 1),
];

const SERVERLESS_RULES: &[Rule] = &[
    rule(Condition::TrafficIs(TrafficPattern::Spiky), 3),
    rule(Condition::CostIs(CostPreference::Medium), 1),
    rule(Condition::ColdStartIs(ColdStartTolerance::Medium), 1),
];

const REALTIME_RULES: &[Rule] = &[
    rule(Condition::LatencyBelow(200.0), 3),
    rule(Condition::ColdStartIs(ColdStartTolerance::Low), 3),
    rule(Condition::TrafficIs(TrafficPattern::Steady), 2),
];

const FARGATE_RULES: &[Rule] = &[
    rule(Condition::NeedsGpu, 4),
    rule(Condition::ModelSizeAbove(350.0), 3),
    rule(Condition::TrafficIs(TrafficPattern::Burst), 2),
];

const GREENGRASS_RULES: &[Rule] = &[
    rule(Condition::TrafficIs(TrafficPattern::Offline), 5),
    rule(Condition::LatencyBelow(100.0), 2),
];

/// Rule table for a strategy id. Unknown ids have no rules and always score 0.
pub fn rules_for(id: &str) -> &'static [Rule] {
    match id {
        LAMBDA_S3 => LAMBDA_RULES,
        SAGEMAKER_SERVERLESS => SERVERLESS_RULES,
        SAGEMAKER_REALTIME => REALTIME_RULES,
        FARGATE_GPU => FARGATE_RULES,
        GREENGRASS_EDGE => GREENGRASS_RULES,
        _ => &[],
    }
}

/// Sum of weights of the rules that hold
pub fn score(rules: &[Rule], constraints: &UserConstraints) -> u32 {
    rules
        .iter()
        .filter(|r| r.condition.holds(constraints))
        .map(|r| r.weight)
        .sum()
}

/// Outcome of a single rule, for explaining a score
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: String,
    pub weight: u32,
    pub matched: bool,
}

/// Evaluate every rule of a strategy and report which fired.
///
/// The matched weights always add up to `score(rules_for(id), constraints)`.
pub fn explain(id: &str, constraints: &UserConstraints) -> Vec<RuleOutcome> {
    rules_for(id)
        .iter()
        .map(|r| RuleOutcome {
            rule: r.condition.describe(),
            weight: r.weight,
            matched: r.condition.holds(constraints),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn constraints() -> UserConstraints {
        UserConstraints::default()
    }

    #[test]
    fn test_every_catalog_entry_has_rules() {
        for s in catalog::list() {
            assert!(!rules_for(s.id).is_empty(), "{} has no rules", s.id);
        }
        assert!(rules_for("Bare Metal").is_empty());
    }

    #[test]
    fn test_lambda_rules() {
        let mut c = constraints();
        c.cost_preference = CostPreference::Low;
        c.model_size_mb = 100.0;
        c.cold_start_tolerance = ColdStartTolerance::High;
        assert_eq!(score(rules_for(LAMBDA_S3), &c), 6);

        c.model_size_mb = 150.0;
        assert_eq!(score(rules_for(LAMBDA_S3), &c), 4);
    }

    #[test]
    fn test_serverless_rules() {
        let mut c = constraints();
        c.traffic_pattern = TrafficPattern::Spiky;
        c.cost_preference = CostPreference::Medium;
        c.cold_start_tolerance = ColdStartTolerance::Medium;
        assert_eq!(score(rules_for(SAGEMAKER_SERVERLESS), &c), 5);
    }

    #[test]
    fn test_realtime_rules() {
        let mut c = constraints();
        c.latency_target_ms = 199.0;
        c.cold_start_tolerance = ColdStartTolerance::Low;
        c.traffic_pattern = TrafficPattern::Steady;
        assert_eq!(score(rules_for(SAGEMAKER_REALTIME), &c), 8);

        c.latency_target_ms = 200.0;
        assert_eq!(score(rules_for(SAGEMAKER_REALTIME), &c), 5);
    }

    #[test]
    fn test_fargate_rules() {
        let mut c = constraints();
        c.needs_gpu = true;
        c.model_size_mb = 351.0;
        c.traffic_pattern = TrafficPattern::Burst;
        assert_eq!(score(rules_for(FARGATE_GPU), &c), 9);

        c.model_size_mb = 350.0;
        assert_eq!(score(rules_for(FARGATE_GPU), &c), 6);
    }

    #[test]
    fn test_greengrass_rules() {
        let mut c = constraints();
        c.traffic_pattern = TrafficPattern::Offline;
        c.latency_target_ms = 50.0;
        assert_eq!(score(rules_for(GREENGRASS_EDGE), &c), 7);
    }

    #[test]
    fn test_zero_measurements_match_nothing() {
        let c = constraints();
        for s in catalog::list() {
            assert_eq!(score(rules_for(s.id), &c), 0, "{} scored at zero input", s.id);
        }
    }

    #[test]
    fn test_negative_measurements_are_no_preference() {
        let mut c = constraints();
        c.model_size_mb = -10.0;
        c.latency_target_ms = -1.0;
        assert!(!Condition::ModelSizeBelow(150.0).holds(&c));
        assert!(!Condition::LatencyBelow(100.0).holds(&c));
        assert!(!Condition::ModelSizeAbove(350.0).holds(&c));
    }

    #[test]
    fn test_explain_sums_to_score() {
        let mut c = constraints();
        c.cost_preference = CostPreference::Low;
        c.model_size_mb = 500.0;
        c.cold_start_tolerance = ColdStartTolerance::High;

        let outcomes = explain(LAMBDA_S3, &c);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].matched);
        assert!(!outcomes[1].matched);
        assert!(outcomes[2].matched);
        assert_eq!(outcomes[0].rule, "cost preference is Low");

        let total: u32 = outcomes.iter().filter(|o| o.matched).map(|o| o.weight).sum();
        assert_eq!(total, score(rules_for(LAMBDA_S3), &c));
    }

    #[test]
    fn test_describe_thresholds() {
        assert_eq!(
            Condition::ModelSizeBelow(150.0).describe(),
            "model size under 150 MB"
        );
        assert_eq!(Condition::LatencyBelow(100.0).describe(), "latency target under 100 ms");
        assert_eq!(Condition::NeedsGpu.describe(), "GPU required");
    }
}
