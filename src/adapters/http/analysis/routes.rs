//! HTTP routes for analysis endpoints.

use axum::{routing::post, Router};

use super::handlers::{analyze_decision, assess_risks, plan_goal, AnalysisHandlers};

/// Creates the analysis router.
///
/// # Routes
///
/// - `POST /decisions/analyze` - Weighted-sum decision analysis
/// - `POST /risks/assess` - Risk factor scoring
/// - `POST /goals/plan` - SMART goal milestone planning
///
/// Suitable for mounting at `/api`.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/decisions/analyze", post(analyze_decision))
        .route("/risks/assess", post(assess_risks))
        .route("/goals/plan", post(plan_goal))
        .with_state(handlers)
}
