//! Risk Assessor - Composite scoring, banding, and aggregation of risk factors.

use crate::domain::foundation::DomainError;

use super::{OverallAssessment, RiskAssessment, RiskBands, RiskFactor, RiskLevel, RiskReport};

/// Scores independent risk factors and summarizes the portfolio.
///
/// Stateless apart from the bands fixed at construction; one instance may be
/// shared across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    bands: RiskBands,
}

impl RiskAssessor {
    /// Creates an assessor with the standard bands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bands in use.
    pub fn bands(&self) -> &RiskBands {
        &self.bands
    }

    /// Assesses every factor and aggregates the results.
    ///
    /// # Algorithm
    /// score = probability × impact (factors are assumed independent).
    /// The aggregate level is the band of the mean score.
    ///
    /// # Errors
    /// - `EMPTY_INPUT` if `factors` is empty (mean and max are undefined)
    /// - `VALIDATION_FAILED` if a factor has a blank name
    pub fn assess_risks(&self, factors: &[RiskFactor]) -> Result<RiskReport, DomainError> {
        if factors.is_empty() {
            return Err(DomainError::empty_input(
                "At least one risk factor is required",
            )
            .with_detail("operation", "assess_risks"));
        }

        let mut assessments = Vec::with_capacity(factors.len());
        for factor in factors {
            factor.validate()?;
            let score = factor.score();
            assessments.push(RiskAssessment {
                factor: factor.name.clone(),
                score,
                level: self.determine_risk_level(score),
                probability: factor.probability.value(),
                impact: factor.impact.value(),
                description: factor.description.clone(),
                mitigation: factor.mitigation.clone(),
            });
        }

        let overall_assessment = self.calculate_overall_risk(&assessments);

        Ok(RiskReport {
            risk_factors: assessments,
            overall_assessment,
        })
    }

    /// Maps a composite score to its band.
    pub fn determine_risk_level(&self, score: f64) -> RiskLevel {
        self.bands.classify(score)
    }

    /// Aggregates a non-empty slice of assessments.
    fn calculate_overall_risk(&self, assessments: &[RiskAssessment]) -> OverallAssessment {
        let total: f64 = assessments.iter().map(|a| a.score).sum();
        let average_score = total / assessments.len() as f64;
        let max_score = assessments
            .iter()
            .map(|a| a.score)
            .fold(f64::NEG_INFINITY, f64::max);

        let count = |level: RiskLevel| assessments.iter().filter(|a| a.level == level).count();

        OverallAssessment {
            average_score,
            max_score,
            risk_level: self.determine_risk_level(average_score),
            high_risk_count: count(RiskLevel::High),
            medium_risk_count: count(RiskLevel::Medium),
            low_risk_count: count(RiskLevel::Low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    const EPS: f64 = 1e-9;

    fn factor(name: &str, probability: f64, impact: f64) -> RiskFactor {
        RiskFactor::new(name, probability, impact, "", "").unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = RiskAssessor::new().assess_risks(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyInput);
    }

    #[test]
    fn low_band_at_small_product() {
        let report = RiskAssessor::new()
            .assess_risks(&[factor("minor", 0.3, 0.3)])
            .unwrap();

        let assessment = &report.risk_factors[0];
        assert!((assessment.score - 0.09).abs() < EPS);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn product_at_point_six_is_high() {
        let report = RiskAssessor::new()
            .assess_risks(&[factor("edge", 0.6, 1.0)])
            .unwrap();

        assert_eq!(report.risk_factors[0].level, RiskLevel::High);
    }

    #[test]
    fn certain_total_loss_is_high() {
        let report = RiskAssessor::new()
            .assess_risks(&[factor("certain", 1.0, 1.0)])
            .unwrap();

        assert_eq!(report.risk_factors[0].level, RiskLevel::High);
        assert_eq!(report.overall_assessment.risk_level, RiskLevel::High);
    }

    #[test]
    fn aggregate_uses_level_of_mean() {
        let report = RiskAssessor::new()
            .assess_risks(&[factor("X", 0.2, 0.2), factor("Y", 0.9, 0.9)])
            .unwrap();

        assert!((report.risk_factors[0].score - 0.04).abs() < EPS);
        assert_eq!(report.risk_factors[0].level, RiskLevel::Low);
        assert!((report.risk_factors[1].score - 0.81).abs() < EPS);
        assert_eq!(report.risk_factors[1].level, RiskLevel::High);

        let overall = &report.overall_assessment;
        assert!((overall.average_score - 0.425).abs() < EPS);
        assert!((overall.max_score - 0.81).abs() < EPS);
        assert_eq!(overall.risk_level, RiskLevel::Medium);
        assert_eq!(overall.high_risk_count, 1);
        assert_eq!(overall.medium_risk_count, 0);
        assert_eq!(overall.low_risk_count, 1);
    }

    #[test]
    fn assessment_carries_factor_fields() {
        let input = RiskFactor::new("vendor", 0.5, 0.8, "Single supplier", "Dual-source").unwrap();
        let report = RiskAssessor::new().assess_risks(&[input]).unwrap();

        let assessment = &report.risk_factors[0];
        assert_eq!(assessment.factor, "vendor");
        assert!((assessment.probability - 0.5).abs() < EPS);
        assert!((assessment.impact - 0.8).abs() < EPS);
        assert_eq!(assessment.description, "Single supplier");
        assert_eq!(assessment.mitigation, "Dual-source");
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn zero_scores_aggregate_without_nan() {
        let report = RiskAssessor::new()
            .assess_risks(&[factor("a", 0.0, 0.7), factor("b", 0.4, 0.0)])
            .unwrap();

        let overall = &report.overall_assessment;
        assert_eq!(overall.average_score, 0.0);
        assert_eq!(overall.max_score, 0.0);
        assert_eq!(overall.risk_level, RiskLevel::Low);
        assert_eq!(overall.low_risk_count, 2);
    }

    #[test]
    fn report_serializes_expected_keys() {
        let report = RiskAssessor::new()
            .assess_risks(&[factor("X", 0.5, 0.5)])
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["risk_factors"].is_array());
        assert!(json["overall_assessment"].is_object());
        assert_eq!(json["risk_factors"][0]["level"], "low");
        assert_eq!(json["overall_assessment"]["low_risk_count"], 1);
    }

    #[test]
    fn at_level_filters_in_input_order() {
        let report = RiskAssessor::new()
            .assess_risks(&[
                factor("a", 0.9, 0.9),
                factor("b", 0.1, 0.1),
                factor("c", 0.8, 0.8),
            ])
            .unwrap();

        let high: Vec<_> = report.at_level(RiskLevel::High).map(|a| a.factor.as_str()).collect();
        assert_eq!(high, vec!["a", "c"]);
    }
}
