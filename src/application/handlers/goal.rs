//! PlanGoalHandler - Command handler for goal validation and milestones.

use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::goal::{Goal, GoalPlan, GoalPlanner};

/// Command to validate a goal and lay out its milestones.
#[derive(Debug, Clone)]
pub struct PlanGoalCommand {
    pub goal: Goal,
}

/// Handler for goal planning.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGoalHandler;

impl PlanGoalHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: PlanGoalCommand) -> Result<GoalPlan, DomainError> {
        let plan = GoalPlanner::plan(&cmd.goal)?;

        debug!(
            title = %plan.title,
            total_days = plan.total_days,
            milestones = plan.milestones.len(),
            "Goal planned"
        );

        Ok(plan)
    }
}
