//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod decision;
mod goal;
mod risk;

pub use decision::{AnalyzeDecisionCommand, AnalyzeDecisionHandler};
pub use goal::{PlanGoalCommand, PlanGoalHandler};
pub use risk::{AssessRisksCommand, AssessRisksHandler};
