//! Risk report shapes.

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Per-factor assessment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub factor: String,
    pub score: f64,
    pub level: RiskLevel,
    pub probability: f64,
    pub impact: f64,
    pub description: String,
    pub mitigation: String,
}

/// Portfolio-level aggregate over all assessed factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub average_score: f64,
    pub max_score: f64,
    /// Level of the average score under the same bands used per factor.
    pub risk_level: RiskLevel,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
}

/// Result of a risk assessment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub risk_factors: Vec<RiskAssessment>,
    pub overall_assessment: OverallAssessment,
}

impl RiskReport {
    /// Returns assessments at the given level, in input order.
    pub fn at_level(&self, level: RiskLevel) -> impl Iterator<Item = &RiskAssessment> {
        self.risk_factors.iter().filter(move |a| a.level == level)
    }
}
