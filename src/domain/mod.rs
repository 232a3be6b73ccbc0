//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `decision` - Weighted-sum multi-criteria analysis
//! - `risk` - Probability × impact risk scoring
//! - `goal` - SMART goal checks and milestone planning

pub mod decision;
pub mod foundation;
pub mod goal;
pub mod risk;
