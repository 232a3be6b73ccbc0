//! Milestone generation for a goal's time span.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Fewest milestones generated for any span.
pub const MIN_MILESTONES: i64 = 3;

/// Target spacing between milestones on long spans.
pub const DAYS_PER_MILESTONE: i64 = 30;

/// Longest goal span accepted for planning (100 years).
pub const MAX_SPAN_DAYS: i64 = 36_500;

/// Progress state of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

/// A checkpoint on the way to a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub due_date: Timestamp,
    pub progress: f64,
    pub status: MilestoneStatus,
}

/// Evenly spaced milestone generation.
pub struct MilestonePlanner;

impl MilestonePlanner {
    /// Number of milestones for a span: one per 30 days, at least 3.
    pub fn milestone_count(total_days: i64) -> i64 {
        (total_days / DAYS_PER_MILESTONE).max(MIN_MILESTONES)
    }

    /// Generates pending milestones between `start` and `end`.
    ///
    /// # Algorithm
    /// total = whole days from start to end; n = max(3, total / 30);
    /// milestone i (0-based) is due at start + total·(i+1)/n days, using
    /// integer division, so the last one lands on `start + total`.
    ///
    /// # Errors
    /// `end_date` before `start_date`, or more than [`MAX_SPAN_DAYS`] after it.
    pub fn generate(start: &Timestamp, end: &Timestamp) -> Result<Vec<Milestone>, ValidationError> {
        if end.is_before(start) {
            return Err(ValidationError::invalid_format(
                "end_date",
                "must not be before start_date",
            ));
        }

        let total_days = end.days_since(start);
        if total_days > MAX_SPAN_DAYS {
            return Err(ValidationError::out_of_range(
                "end_date",
                0.0,
                MAX_SPAN_DAYS as f64,
                total_days as f64,
            ));
        }
        let count = Self::milestone_count(total_days);

        let milestones = (0..count)
            .map(|i| {
                let number = i + 1;
                Milestone {
                    title: format!("Milestone {}", number),
                    description: format!("Auto-generated milestone {}", number),
                    due_date: start.add_days(total_days * number / count),
                    progress: 0.0,
                    status: MilestoneStatus::Pending,
                }
            })
            .collect();

        Ok(milestones)
    }
}
