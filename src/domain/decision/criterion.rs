//! Weighted decision criterion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A named criterion with a non-negative relative weight.
///
/// Weights are not required to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

impl Criterion {
    /// Creates a criterion, rejecting blank names and negative or non-finite weights.
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let criterion = Self {
            name: name.into(),
            weight,
            description: description.into(),
        };
        criterion.validate()?;
        Ok(criterion)
    }

    /// Checks the criterion invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !self.weight.is_finite() {
            return Err(ValidationError::not_finite("weight"));
        }
        if self.weight < 0.0 {
            return Err(ValidationError::out_of_range(
                "weight",
                0.0,
                f64::MAX,
                self.weight,
            ));
        }
        Ok(())
    }
}
