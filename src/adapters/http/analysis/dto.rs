//! Request/response DTOs for analysis endpoints.
//!
//! Numeric inputs arrive as plain numbers and are range-checked when the
//! request is converted into a command, so out-of-range values surface as
//! `VALIDATION_FAILED` rather than as body rejections.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{AnalyzeDecisionCommand, AssessRisksCommand, PlanGoalCommand};
use crate::domain::decision::{Criterion, DecisionOption, DecisionReport};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::goal::Goal;
use crate::domain::risk::RiskFactor;

// ════════════════════════════════════════════════════════════════════════════
// Decision analysis
// ════════════════════════════════════════════════════════════════════════════

/// Criterion as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CriterionRequest {
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

/// Option as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub criteria_scores: HashMap<String, f64>,
}

/// Request to analyze a decision.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeDecisionRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub criteria: Vec<CriterionRequest>,
    #[serde(default)]
    pub options: Vec<OptionRequest>,
}

impl AnalyzeDecisionRequest {
    /// Converts into a command, checking each criterion.
    pub fn into_command(self) -> Result<AnalyzeDecisionCommand, DomainError> {
        let criteria = self
            .criteria
            .into_iter()
            .enumerate()
            .map(|(index, c)| {
                Criterion::new(c.name, c.weight, c.description).map_err(|err| {
                    DomainError::from(err).with_detail("criterion_index", index.to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let options = self
            .options
            .into_iter()
            .map(|o| DecisionOption {
                title: o.title,
                description: o.description,
                pros: o.pros,
                cons: o.cons,
                criteria_scores: o.criteria_scores,
            })
            .collect();

        Ok(AnalyzeDecisionCommand { criteria, options })
    }
}

/// Response for a completed decision analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeDecisionResponse {
    pub success: bool,
    pub analysis_id: String,
    pub analysis: DecisionReport,
}

// ════════════════════════════════════════════════════════════════════════════
// Risk assessment
// ════════════════════════════════════════════════════════════════════════════

/// Risk factor as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskFactorRequest {
    pub name: String,
    pub probability: f64,
    pub impact: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mitigation: String,
}

/// Request to assess risks.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessRisksRequest {
    #[serde(default)]
    pub risk_factors: Vec<RiskFactorRequest>,
}

impl AssessRisksRequest {
    /// Converts into a command, range-checking probability and impact.
    pub fn into_command(self) -> Result<AssessRisksCommand, DomainError> {
        let risk_factors = self
            .risk_factors
            .into_iter()
            .enumerate()
            .map(|(index, f)| {
                RiskFactor::new(f.name, f.probability, f.impact, f.description, f.mitigation)
                    .map_err(|err| {
                        DomainError::from(err).with_detail("factor_index", index.to_string())
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AssessRisksCommand { risk_factors })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Goal planning
// ════════════════════════════════════════════════════════════════════════════

/// Request to plan a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanGoalRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub priority: u8,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub smart_criteria: HashMap<String, Value>,
}

impl From<PlanGoalRequest> for PlanGoalCommand {
    fn from(req: PlanGoalRequest) -> Self {
        PlanGoalCommand {
            goal: Goal {
                title: req.title,
                description: req.description,
                category: req.category,
                priority: req.priority,
                start_date: req.start_date,
                end_date: req.end_date,
                progress: req.progress,
                smart_criteria: req.smart_criteria,
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Shared
// ════════════════════════════════════════════════════════════════════════════

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = (!error.details.is_empty()).then(|| {
            Value::Object(
                error
                    .details
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            )
        });

        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
