//! Decision Module - Weighted-sum multi-criteria decision analysis.
//!
//! # Components
//!
//! - `Criterion` / `DecisionOption` - Inputs (weights, per-criterion scores, pros/cons)
//! - `DecisionSession` - Per-request accumulator with boundary validation
//! - `WeightedSumAnalyzer` - Scoring, stable ranking, confidence, reasoning
//! - `SensitivityStrategy` / `ConsRiskStrategy` - Secondary analyses behind a fixed report schema
//! - `DecisionReport` - Serializable result
//!
//! # Design Philosophy
//!
//! Scoring is a pure function of the session contents. Nothing here performs
//! I/O or keeps state between analyses.

mod analyzer;
mod criterion;
mod option;
mod report;
mod session;
mod strategy;

pub use analyzer::{WeightedSumAnalyzer, REASONING_PRO_LIMIT};
pub use criterion::Criterion;
pub use option::DecisionOption;
pub use report::{
    Confidence, ConsRisk, CriterionSensitivity, DecisionReport, RankedOption, Recommendation,
    SensitivityAnalysis, SensitivityLevel,
};
pub use session::DecisionSession;
pub use strategy::{
    BasicConsRisk, BasicSensitivity, ConsRiskStrategy, OneAtATimeSensitivity, ScoredOption,
    SensitivityStrategy,
};
