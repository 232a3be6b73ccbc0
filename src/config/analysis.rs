//! Analysis engine configuration

use serde::Deserialize;

use crate::domain::decision::{BasicSensitivity, OneAtATimeSensitivity, WeightedSumAnalyzer};

use super::error::ValidationError;

/// How the sensitivity section of a decision report is produced
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityMethod {
    /// First criterion at a fixed medium level
    #[default]
    Basic,
    /// Weight perturbation per criterion
    OneAtATime,
}

/// Decision engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Divide criterion weights by their total before scoring
    #[serde(default)]
    pub normalize_weights: bool,

    /// Sensitivity analysis method
    #[serde(default)]
    pub sensitivity_method: SensitivityMethod,

    /// Relative weight change at or below which sensitivity is high
    #[serde(default = "default_high_threshold")]
    pub sensitivity_high_threshold: f64,

    /// Relative weight change at or below which sensitivity is medium
    #[serde(default = "default_medium_threshold")]
    pub sensitivity_medium_threshold: f64,
}

impl AnalysisConfig {
    /// Builds the analyzer described by this configuration
    pub fn build_analyzer(&self) -> WeightedSumAnalyzer {
        let analyzer = WeightedSumAnalyzer::new().with_normalized_weights(self.normalize_weights);
        match self.sensitivity_method {
            SensitivityMethod::Basic => analyzer.with_sensitivity(BasicSensitivity),
            SensitivityMethod::OneAtATime => analyzer.with_sensitivity(OneAtATimeSensitivity::new(
                self.sensitivity_high_threshold,
                self.sensitivity_medium_threshold,
            )),
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let high = self.sensitivity_high_threshold;
        let medium = self.sensitivity_medium_threshold;
        if !high.is_finite() || !medium.is_finite() || high <= 0.0 || high > medium {
            return Err(ValidationError::InvalidSensitivityThresholds);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            normalize_weights: false,
            sensitivity_method: SensitivityMethod::default(),
            sensitivity_high_threshold: default_high_threshold(),
            sensitivity_medium_threshold: default_medium_threshold(),
        }
    }
}

fn default_high_threshold() -> f64 {
    0.1
}

fn default_medium_threshold() -> f64 {
    0.5
}
