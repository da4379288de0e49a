//! Recommendation Engine
//!
//! Scores every catalog strategy against one request, ranks them, and picks the
//! best. Pure and synchronous: no I/O, no hidden state, so identical input
//! always yields identical output.

use crate::catalog::{self, StrategyDescriptor};
use crate::scoring::{self, RuleOutcome};
use crate::types::*;

/// The engine that turns constraints into a ranked recommendation
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    catalog: &'static [StrategyDescriptor],
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::with_catalog(catalog::list())
    }

    /// Engine over a custom catalog.
    ///
    /// The catalog must be non-empty (checked in debug builds). In release
    /// builds an empty catalog yields an empty `recommended` and no comparisons.
    pub fn with_catalog(catalog: &'static [StrategyDescriptor]) -> Self {
        debug_assert!(!catalog.is_empty(), "strategy catalog must not be empty");
        Self { catalog }
    }

    /// Recommend a deployment pathway
    pub fn recommend(&self, constraints: &UserConstraints) -> Recommendation {
        // 1. Score each strategy and compute its radar profile
        let mut comparisons: Vec<ScoredStrategy> = self
            .catalog
            .iter()
            .map(|strategy| score_strategy(strategy, constraints))
            .collect();

        // 2. Rank by score; sort_by is stable so ties keep catalog order
        comparisons.sort_by(|a, b| b.score.cmp(&a.score));

        // 3. Pick the winner
        let recommended = comparisons
            .first()
            .map(|s| s.name().to_string())
            .unwrap_or_default();

        tracing::debug!(
            recommended = %recommended,
            top_score = comparisons.first().map(|s| s.score).unwrap_or(0),
            "ranked {} strategies",
            comparisons.len()
        );

        Recommendation {
            reason: reason_for(&recommended),
            recommended,
            comparisons,
        }
    }

    /// Per-rule breakdown for every strategy, in catalog order
    pub fn explain(&self, constraints: &UserConstraints) -> Vec<(&'static str, Vec<RuleOutcome>)> {
        self.catalog
            .iter()
            .map(|s| (s.id, scoring::explain(s.id, constraints)))
            .collect()
    }
}

/// Score one strategy and derive its radar values
pub fn score_strategy(
    strategy: &'static StrategyDescriptor,
    constraints: &UserConstraints,
) -> ScoredStrategy {
    ScoredStrategy {
        strategy,
        score: scoring::score(scoring::rules_for(strategy.id), constraints),
        radar: radar_for(strategy),
    }
}

pub fn radar_for(strategy: &StrategyDescriptor) -> Radar {
    Radar {
        latency: strategy.latency.radar_value(),
        cost: strategy.cost.radar_value(),
        scalability: strategy.scalability.radar_value(),
        difficulty: strategy.difficulty.radar_value(),
        cold_start: strategy.cold_start.radar_value(),
    }
}

/// Fixed explanation sentence for the winning strategy
pub fn reason_for(name: &str) -> String {
    format!(
        "Based on your constraints, \"{}\" aligns the closest with your performance, scaling, and cost needs.",
        name
    )
}

/// Convenience: recommend against the built-in catalog
pub fn recommend(constraints: &UserConstraints) -> Recommendation {
    RecommendationEngine::new().recommend(constraints)
}
