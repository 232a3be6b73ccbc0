//! Risk levels and the fixed score bands that select them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Returns the serialized label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A score interval mapped to a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub level: RiskLevel,
    pub min: f64,
    pub max: f64,
    /// Whether `max` itself belongs to the band.
    pub closed_max: bool,
}

impl Band {
    const fn half_open(level: RiskLevel, min: f64, max: f64) -> Self {
        Self {
            level,
            min,
            max,
            closed_max: false,
        }
    }

    const fn closed(level: RiskLevel, min: f64, max: f64) -> Self {
        Self {
            level,
            min,
            max,
            closed_max: true,
        }
    }

    /// Returns true if the score falls inside this band.
    pub fn contains(&self, score: f64) -> bool {
        if score < self.min {
            return false;
        }
        if self.closed_max {
            score <= self.max
        } else {
            score < self.max
        }
    }
}

/// Ordered set of bands checked low to high.
///
/// Scores matched by no band (at or above 1, or otherwise outside every
/// interval) classify as [`RiskLevel::High`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskBands {
    bands: [Band; 3],
}

impl RiskBands {
    /// low = [0, 0.3), medium = [0.3, 0.6), high = [0.6, 1.0].
    pub const STANDARD: Self = Self {
        bands: [
            Band::half_open(RiskLevel::Low, 0.0, 0.3),
            Band::half_open(RiskLevel::Medium, 0.3, 0.6),
            Band::closed(RiskLevel::High, 0.6, 1.0),
        ],
    };

    /// Classifies a composite score.
    pub fn classify(&self, score: f64) -> RiskLevel {
        self.bands
            .iter()
            .find(|band| band.contains(score))
            .map(|band| band.level)
            .unwrap_or(RiskLevel::High)
    }

    /// Returns the bands in evaluation order.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

impl Default for RiskBands {
    fn default() -> Self {
        Self::STANDARD
    }
}
