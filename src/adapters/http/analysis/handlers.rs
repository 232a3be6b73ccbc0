//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;
use uuid::Uuid;

use crate::application::{AnalyzeDecisionHandler, AssessRisksHandler, PlanGoalCommand, PlanGoalHandler};
use crate::config::AnalysisConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::risk::RiskAssessor;

use super::dto::{
    AnalyzeDecisionRequest, AnalyzeDecisionResponse, AssessRisksRequest, ErrorResponse,
    PlanGoalRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisHandlers {
    decision_handler: Arc<AnalyzeDecisionHandler>,
    risk_handler: Arc<AssessRisksHandler>,
    goal_handler: Arc<PlanGoalHandler>,
}

impl AnalysisHandlers {
    pub fn new(
        decision_handler: Arc<AnalyzeDecisionHandler>,
        risk_handler: Arc<AssessRisksHandler>,
        goal_handler: Arc<PlanGoalHandler>,
    ) -> Self {
        Self {
            decision_handler,
            risk_handler,
            goal_handler,
        }
    }

    /// Wires every handler from the analysis configuration.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            Arc::new(AnalyzeDecisionHandler::new(Arc::new(config.build_analyzer()))),
            Arc::new(AssessRisksHandler::new(RiskAssessor::new())),
            Arc::new(PlanGoalHandler::new()),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/decisions/analyze - Rank options against weighted criteria
pub async fn analyze_decision(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<AnalyzeDecisionRequest>,
) -> Response {
    let cmd = match req.into_command() {
        Ok(cmd) => cmd,
        Err(e) => return handle_analysis_error(e),
    };

    match handlers.decision_handler.handle(cmd) {
        Ok(report) => {
            let response = AnalyzeDecisionResponse {
                success: true,
                analysis_id: Uuid::new_v4().to_string(),
                analysis: report,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// POST /api/risks/assess - Score and band risk factors
pub async fn assess_risks(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<AssessRisksRequest>,
) -> Response {
    let cmd = match req.into_command() {
        Ok(cmd) => cmd,
        Err(e) => return handle_analysis_error(e),
    };

    match handlers.risk_handler.handle(cmd) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => handle_analysis_error(e),
    }
}

/// POST /api/goals/plan - Validate a SMART goal and generate milestones
pub async fn plan_goal(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<PlanGoalRequest>,
) -> Response {
    match handlers.goal_handler.handle(PlanGoalCommand::from(req)) {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) => handle_analysis_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_analysis_error(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidState | ErrorCode::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if !error.code.is_client_error() {
        warn!(code = %error.code, message = %error.message, "Analysis failed");
        return (
            status,
            Json(ErrorResponse::internal("An unexpected error occurred")),
        )
            .into_response();
    }

    warn!(code = %error.code, message = %error.message, "Analysis request rejected");
    (status, Json(ErrorResponse::from(&error))).into_response()
}
