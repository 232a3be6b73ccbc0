//! Risk Module - Probability × impact scoring of independent risk factors.
//!
//! # Components
//!
//! - `RiskFactor` - Input record (probability and impact on [0, 1])
//! - `RiskBands` - Fixed low/medium/high score intervals
//! - `RiskAssessor` - Per-factor scoring plus portfolio aggregate
//! - `RiskReport` - Serializable result (`risk_factors`, `overall_assessment`)

mod assessor;
mod factor;
mod level;
mod report;

pub use assessor::RiskAssessor;
pub use factor::RiskFactor;
pub use level::{Band, RiskBands, RiskLevel};
pub use report::{OverallAssessment, RiskAssessment, RiskReport};
