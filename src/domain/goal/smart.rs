//! SMART completeness check for goals.

use std::collections::HashMap;

use serde_json::Value;

/// Keys a goal's criteria map must contain to count as SMART.
pub const SMART_CRITERIA: &[&str] = &[
    "specific",
    "measurable",
    "achievable",
    "relevant",
    "time_bound",
];

/// SMART criteria checks.
pub struct SmartValidator;

impl SmartValidator {
    /// Returns the required keys absent from `criteria`, in canonical order.
    pub fn missing(criteria: &HashMap<String, Value>) -> Vec<&'static str> {
        SMART_CRITERIA
            .iter()
            .filter(|key| !criteria.contains_key(**key))
            .copied()
            .collect()
    }

    /// Checks that every SMART key is present.
    pub fn is_complete(criteria: &HashMap<String, Value>) -> bool {
        SMART_CRITERIA.iter().all(|key| criteria.contains_key(*key))
    }
}
