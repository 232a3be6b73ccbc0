//! Decision report shapes.
//!
//! Field names are part of the wire contract consumed by the service layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::risk::RiskLevel;

/// Confidence in the top recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Bands the winner's margin.
    ///
    /// # Algorithm
    /// - range == 0 (all options tie): Low
    /// - ratio = best / range; ratio > 2: High, ratio > 1.5: Medium, else Low
    ///
    /// The ratio is signed; a negative best score is not clamped.
    pub fn from_scores(best_score: f64, score_range: f64) -> Self {
        if score_range == 0.0 {
            return Confidence::Low;
        }

        let ratio = best_score / score_range;
        if ratio > 2.0 {
            Confidence::High
        } else if ratio > 1.5 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How strongly the recommendation depends on a criterion's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityLevel {
    Low,
    Medium,
    High,
}

/// The recommended option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub best_option: String,
    pub confidence: Confidence,
    pub reasoning: String,
}

/// One row of the ranking, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOption {
    /// 1-based position.
    pub rank: usize,
    pub title: String,
    pub score: f64,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Per-criterion result of a perturbation analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSensitivity {
    pub criterion: String,
    pub weight: f64,
    /// Smallest relative weight change that lets a challenger tie the leader,
    /// or `None` when no feasible change does.
    pub flip_change: Option<f64>,
    pub flips_to: Option<String>,
}

/// Which criterion the recommendation is most sensitive to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityAnalysis {
    pub most_sensitive_criterion: Option<String>,
    pub sensitivity_level: SensitivityLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub criteria: Vec<CriterionSensitivity>,
}

/// A risk derived from an option's listed con.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsRisk {
    pub option: String,
    pub risk: String,
    pub severity: RiskLevel,
}

/// Complete result of a decision analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub recommendation: Recommendation,
    pub rankings: Vec<RankedOption>,
    pub sensitivity_analysis: SensitivityAnalysis,
    pub risk_analysis: Vec<ConsRisk>,
}

impl DecisionReport {
    /// Returns the ranking row for a title.
    pub fn ranking_of(&self, title: &str) -> Option<&RankedOption> {
        self.rankings.iter().find(|r| r.title == title)
    }
}
