//! Pluggable secondary analyses run after ranking.
//!
//! The report schema is fixed; strategies only decide how its
//! `sensitivity_analysis` and `risk_analysis` sections are filled.

use crate::domain::risk::RiskLevel;

use super::{
    ConsRisk, Criterion, CriterionSensitivity, DecisionOption, SensitivityAnalysis,
    SensitivityLevel,
};

/// An option paired with its weighted score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredOption<'a> {
    pub option: &'a DecisionOption,
    pub score: f64,
}

/// Determines which criterion weight the recommendation hinges on.
pub trait SensitivityStrategy: Send + Sync {
    /// `weights[i]` is the effective weight of `criteria[i]`; `ranked` is best first.
    fn analyze(
        &self,
        criteria: &[Criterion],
        weights: &[f64],
        ranked: &[ScoredOption<'_>],
    ) -> SensitivityAnalysis;
}

/// Turns option cons into risk records.
pub trait ConsRiskStrategy: Send + Sync {
    fn analyze(&self, options: &[DecisionOption]) -> Vec<ConsRisk>;
}

/// Reports the first registered criterion at a fixed medium level.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSensitivity;

impl SensitivityStrategy for BasicSensitivity {
    fn analyze(
        &self,
        criteria: &[Criterion],
        _weights: &[f64],
        _ranked: &[ScoredOption<'_>],
    ) -> SensitivityAnalysis {
        SensitivityAnalysis {
            most_sensitive_criterion: criteria.first().map(|c| c.name.clone()),
            sensitivity_level: SensitivityLevel::Medium,
            criteria: Vec::new(),
        }
    }
}

/// One-factor-at-a-time weight perturbation.
///
/// For each criterion, holds every other weight fixed and solves for the
/// smallest change to this weight that lets some challenger tie the leader.
/// The change is expressed relative to the current weight; zero-weight
/// criteria are skipped. The criterion with the smallest relative change is
/// the most sensitive.
#[derive(Debug, Clone, Copy)]
pub struct OneAtATimeSensitivity {
    /// Relative change at or below which sensitivity is high.
    pub high_threshold: f64,
    /// Relative change at or below which sensitivity is medium.
    pub medium_threshold: f64,
}

impl Default for OneAtATimeSensitivity {
    fn default() -> Self {
        Self {
            high_threshold: 0.1,
            medium_threshold: 0.5,
        }
    }
}

impl OneAtATimeSensitivity {
    /// Creates the strategy with explicit level thresholds.
    pub fn new(high_threshold: f64, medium_threshold: f64) -> Self {
        Self {
            high_threshold,
            medium_threshold,
        }
    }

    fn level_for(&self, relative_change: f64) -> SensitivityLevel {
        if relative_change <= self.high_threshold {
            SensitivityLevel::High
        } else if relative_change <= self.medium_threshold {
            SensitivityLevel::Medium
        } else {
            SensitivityLevel::Low
        }
    }

    /// Relative weight change on `criterion` that equalizes the two scores.
    fn flip_change(
        leader: &ScoredOption<'_>,
        challenger: &ScoredOption<'_>,
        criterion: &str,
        weight: f64,
    ) -> Option<f64> {
        let gap = leader.score - challenger.score;
        if gap == 0.0 {
            return Some(0.0);
        }

        let slope = challenger.option.score_for(criterion) - leader.option.score_for(criterion);
        if slope == 0.0 {
            return None;
        }

        let delta = gap / slope;
        if weight + delta < 0.0 {
            return None;
        }

        Some(delta.abs() / weight)
    }
}

impl SensitivityStrategy for OneAtATimeSensitivity {
    fn analyze(
        &self,
        criteria: &[Criterion],
        weights: &[f64],
        ranked: &[ScoredOption<'_>],
    ) -> SensitivityAnalysis {
        let challengers = ranked.get(1..).unwrap_or_default();

        let details: Vec<CriterionSensitivity> = criteria
            .iter()
            .zip(weights)
            .map(|(criterion, &weight)| {
                let mut closest: Option<(f64, &str)> = None;

                if let Some(leader) = ranked.first().filter(|_| weight > 0.0) {
                    for challenger in challengers {
                        let Some(change) =
                            Self::flip_change(leader, challenger, &criterion.name, weight)
                        else {
                            continue;
                        };
                        if closest.map_or(true, |(best, _)| change < best) {
                            closest = Some((change, challenger.option.title.as_str()));
                        }
                    }
                }

                CriterionSensitivity {
                    criterion: criterion.name.clone(),
                    weight,
                    flip_change: closest.map(|(change, _)| change),
                    flips_to: closest.map(|(_, title)| title.to_string()),
                }
            })
            .collect();

        let mut most_sensitive: Option<(f64, &str)> = None;
        for detail in &details {
            if let Some(change) = detail.flip_change {
                if most_sensitive.map_or(true, |(best, _)| change < best) {
                    most_sensitive = Some((change, detail.criterion.as_str()));
                }
            }
        }

        let (most_sensitive_criterion, sensitivity_level) = match most_sensitive {
            Some((change, name)) => (Some(name.to_string()), self.level_for(change)),
            None => (
                criteria.first().map(|c| c.name.clone()),
                SensitivityLevel::Low,
            ),
        };

        SensitivityAnalysis {
            most_sensitive_criterion,
            sensitivity_level,
            criteria: details,
        }
    }
}

/// Emits one medium-severity risk per listed con.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicConsRisk;

impl ConsRiskStrategy for BasicConsRisk {
    fn analyze(&self, options: &[DecisionOption]) -> Vec<ConsRisk> {
        options
            .iter()
            .flat_map(|option| {
                option.cons.iter().map(move |con| ConsRisk {
                    option: option.title.clone(),
                    risk: con.clone(),
                    severity: RiskLevel::Medium,
                })
            })
            .collect()
    }
}
