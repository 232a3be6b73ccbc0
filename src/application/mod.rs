//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations for one request at a time.
//! Handlers own only immutable, shareable engine configuration.

pub mod handlers;

pub use handlers::{
    // Decision handlers
    AnalyzeDecisionCommand, AnalyzeDecisionHandler,
    // Risk handlers
    AssessRisksCommand, AssessRisksHandler,
    // Goal handlers
    PlanGoalCommand, PlanGoalHandler,
};
