//! Decision option (alternative) with per-criterion scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::ValidationError;

/// One alternative under consideration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    /// Score per criterion name. Missing entries count as zero.
    #[serde(default)]
    pub criteria_scores: HashMap<String, f64>,
}

impl DecisionOption {
    /// Creates an option with a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Appends a pro.
    pub fn with_pro(mut self, pro: impl Into<String>) -> Self {
        self.pros.push(pro.into());
        self
    }

    /// Appends a con.
    pub fn with_con(mut self, con: impl Into<String>) -> Self {
        self.cons.push(con.into());
        self
    }

    /// Sets the score for a criterion.
    pub fn with_score(mut self, criterion: impl Into<String>, score: f64) -> Self {
        self.criteria_scores.insert(criterion.into(), score);
        self
    }

    /// Returns the score for a criterion, or zero when absent.
    pub fn score_for(&self, criterion: &str) -> f64 {
        self.criteria_scores.get(criterion).copied().unwrap_or(0.0)
    }

    /// Checks invariants that do not depend on the registered criteria.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        for (criterion, score) in &self.criteria_scores {
            if !score.is_finite() {
                return Err(ValidationError::not_finite(format!(
                    "criteria_scores.{}",
                    criterion
                )));
            }
        }
        Ok(())
    }
}
