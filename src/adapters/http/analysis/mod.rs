//! HTTP adapter for decision, risk, and goal endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeDecisionRequest, AnalyzeDecisionResponse, AssessRisksRequest, CriterionRequest,
    ErrorResponse, HealthResponse, OptionRequest, PlanGoalRequest, RiskFactorRequest,
};
pub use handlers::AnalysisHandlers;
pub use routes::analysis_routes;
