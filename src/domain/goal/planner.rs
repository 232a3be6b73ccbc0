//! Goal Planner - Validation and milestone plan for a goal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{DomainError, Timestamp, ValidationError};

use super::{Milestone, MilestonePlanner, SmartValidator};

/// Inclusive priority bounds (1 = highest).
pub const PRIORITY_RANGE: (u8, u8) = (1, 5);

/// A goal as submitted for planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
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

/// Validated goal with its generated milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    pub title: String,
    pub total_days: i64,
    pub milestones: Vec<Milestone>,
}

/// Goal validation and planning functions.
pub struct GoalPlanner;

impl GoalPlanner {
    /// Validates a goal and generates its milestones.
    ///
    /// # Errors
    /// `VALIDATION_FAILED` for a blank title, priority outside 1..=5,
    /// progress outside [0, 100], missing SMART criteria (listed in the
    /// `missing` detail), or an end date before the start date.
    pub fn plan(goal: &Goal) -> Result<GoalPlan, DomainError> {
        if goal.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        Self::validate_priority(goal.priority)?;
        Self::validate_progress(goal.progress)?;

        let missing = SmartValidator::missing(&goal.smart_criteria);
        if !missing.is_empty() {
            return Err(DomainError::validation(
                "smart_criteria",
                "Goal does not meet SMART criteria",
            )
            .with_detail("missing", missing.join(",")));
        }

        let milestones = MilestonePlanner::generate(&goal.start_date, &goal.end_date)?;

        Ok(GoalPlan {
            title: goal.title.clone(),
            total_days: goal.end_date.days_since(&goal.start_date),
            milestones,
        })
    }

    /// Checks a progress value (percent).
    pub fn validate_progress(progress: f64) -> Result<f64, ValidationError> {
        if !progress.is_finite() {
            return Err(ValidationError::not_finite("progress"));
        }
        if !(0.0..=100.0).contains(&progress) {
            return Err(ValidationError::out_of_range("progress", 0.0, 100.0, progress));
        }
        Ok(progress)
    }

    /// Checks a priority value.
    pub fn validate_priority(priority: u8) -> Result<u8, ValidationError> {
        let (min, max) = PRIORITY_RANGE;
        if !(min..=max).contains(&priority) {
            return Err(ValidationError::out_of_range(
                "priority",
                f64::from(min),
                f64::from(max),
                f64::from(priority),
            ));
        }
        Ok(priority)
    }
}
