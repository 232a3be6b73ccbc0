//! Risk factor input record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UnitInterval, ValidationError};

/// An independent risk with a probability and impact on the unit scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub probability: UnitInterval,
    pub impact: UnitInterval,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mitigation: String,
}

impl RiskFactor {
    /// Creates a risk factor, rejecting empty names and values outside [0, 1].
    pub fn new(
        name: impl Into<String>,
        probability: f64,
        impact: f64,
        description: impl Into<String>,
        mitigation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let factor = Self {
            name: name.into(),
            probability: UnitInterval::try_new("probability", probability)?,
            impact: UnitInterval::try_new("impact", impact)?,
            description: description.into(),
            mitigation: mitigation.into(),
        };
        factor.validate()?;
        Ok(factor)
    }

    /// Checks invariants that deserialization cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }

    /// Composite score: probability × impact.
    pub fn score(&self) -> f64 {
        self.probability.value() * self.impact.value()
    }
}
