//! Goal Module - SMART checks and milestone planning.
//!
//! # Components
//!
//! - `SmartValidator` - Presence check for the five SMART criteria
//! - `MilestonePlanner` - Evenly spaced milestones over the goal span
//! - `GoalPlanner` - Validates a goal and assembles its plan

mod milestone;
mod planner;
mod smart;

pub use milestone::{
    Milestone, MilestonePlanner, MilestoneStatus, DAYS_PER_MILESTONE, MAX_SPAN_DAYS, MIN_MILESTONES,
};
pub use planner::{Goal, GoalPlan, GoalPlanner, PRIORITY_RANGE};
pub use smart::{SmartValidator, SMART_CRITERIA};
