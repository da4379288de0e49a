//! Inference Pathway Advisor
//!
//! Recommends where to host a machine-learning inference workload, chosen from
//! a fixed catalog of AWS strategies, given a handful of constraints: model
//! size, latency target, GPU need, traffic shape, cost preference and
//! cold-start tolerance.
//!
//! # Quick Start
//!
//! ```rust
//! use pathway_advisor::{recommend, CostPreference, ColdStartTolerance, UserConstraints};
//!
//! let constraints = UserConstraints {
//!     model_size_mb: 100.0,
//!     latency_target_ms: 500.0,
//!     cost_preference: CostPreference::Low,
//!     cold_start_tolerance: ColdStartTolerance::High,
//!     ..Default::default()
//! };
//!
//! let rec = recommend(&constraints);
//! assert_eq!(rec.recommended, "Lambda + S3");
//! assert_eq!(rec.comparisons.len(), 5);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │        Caller (browser form, CLI, HTTP client)       │
//! └─────────────────────┬───────────────────────────────┘
//!                       │ AnalyzeRequest (JSON)
//!                       ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  normalize() → validate() → RecommendationEngine     │
//! │     scoring rules  ×  catalog  →  ranked radar view  │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod attribute;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod engine;
pub mod error;
pub mod estimate;
pub mod scoring;
pub mod server;
pub mod types;

// Core types
pub use attribute::{normalize, AttributeLevel};
pub use catalog::StrategyDescriptor;
pub use engine::{recommend, RecommendationEngine};
pub use error::{AdvisorError, AdvisorResult};
pub use types::*;

// Presentation helpers
pub use chart::RadarChart;
pub use estimate::CostEstimate;
pub use scoring::{Condition, Rule, RuleOutcome};

// Transport
pub use config::ServerConfig;
