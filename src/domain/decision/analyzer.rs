//! Weighted Sum Analyzer - Scoring, ranking, and recommendation.

use std::cmp::Ordering;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{
    BasicConsRisk, BasicSensitivity, Confidence, ConsRiskStrategy, Criterion, DecisionOption,
    DecisionReport, RankedOption, Recommendation, ScoredOption, SensitivityStrategy,
};

/// Maximum number of pros quoted in the reasoning text.
pub const REASONING_PRO_LIMIT: usize = 3;

const REASONING_PREFIX: &str = "The main strengths of this option are: ";
const REASONING_CONNECTIVE: &str = ", ";

/// Multi-criteria analysis using the weighted-sum model.
///
/// Holds no per-request state: every call to [`analyze`](Self::analyze)
/// works only on the slices it is given, so one analyzer can serve many
/// sessions concurrently.
pub struct WeightedSumAnalyzer {
    normalize_weights: bool,
    sensitivity: Box<dyn SensitivityStrategy>,
    cons_risk: Box<dyn ConsRiskStrategy>,
}

impl Default for WeightedSumAnalyzer {
    fn default() -> Self {
        Self {
            normalize_weights: false,
            sensitivity: Box::new(BasicSensitivity),
            cons_risk: Box::new(BasicConsRisk),
        }
    }
}

impl WeightedSumAnalyzer {
    /// Creates an analyzer with raw weights and the basic strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Divides each weight by the total weight before scoring.
    pub fn with_normalized_weights(mut self, normalize: bool) -> Self {
        self.normalize_weights = normalize;
        self
    }

    /// Replaces the sensitivity strategy.
    pub fn with_sensitivity(mut self, strategy: impl SensitivityStrategy + 'static) -> Self {
        self.sensitivity = Box::new(strategy);
        self
    }

    /// Replaces the cons-to-risk strategy.
    pub fn with_cons_risk(mut self, strategy: impl ConsRiskStrategy + 'static) -> Self {
        self.cons_risk = Box::new(strategy);
        self
    }

    pub fn normalizes_weights(&self) -> bool {
        self.normalize_weights
    }

    /// Runs the full analysis.
    ///
    /// # Errors
    /// - `INVALID_STATE` if there are no options or no criteria
    /// - `INVALID_STATE` if normalization is on and the weights sum to zero
    pub fn analyze(
        &self,
        criteria: &[Criterion],
        options: &[DecisionOption],
    ) -> Result<DecisionReport, DomainError> {
        if options.is_empty() || criteria.is_empty() {
            return Err(DomainError::invalid_state(
                "At least one option and one criterion are required",
            )
            .with_detail("options", options.len().to_string())
            .with_detail("criteria", criteria.len().to_string()));
        }

        let weights = self.effective_weights(criteria)?;
        let ranked = Self::rank(options, criteria, &weights);

        // Finite inputs can still overflow the sum
        if let Some(bad) = ranked.iter().find(|r| !r.score.is_finite()) {
            return Err(DomainError::validation(
                "criteria_scores",
                "Weighted score is not a finite number",
            )
            .with_detail("option", bad.option.title.clone()));
        }

        let best = ranked.first().ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Ranking produced no options")
        })?;
        let max_score = ranked.iter().map(|r| r.score).fold(f64::NEG_INFINITY, f64::max);
        let min_score = ranked.iter().map(|r| r.score).fold(f64::INFINITY, f64::min);

        let recommendation = Recommendation {
            best_option: best.option.title.clone(),
            confidence: Confidence::from_scores(best.score, max_score - min_score),
            reasoning: Self::reasoning(best.option),
        };

        let rankings = ranked
            .iter()
            .enumerate()
            .map(|(i, scored)| RankedOption {
                rank: i + 1,
                title: scored.option.title.clone(),
                score: scored.score,
                pros: scored.option.pros.clone(),
                cons: scored.option.cons.clone(),
            })
            .collect();

        Ok(DecisionReport {
            recommendation,
            rankings,
            sensitivity_analysis: self.sensitivity.analyze(criteria, &weights, &ranked),
            risk_analysis: self.cons_risk.analyze(options),
        })
    }

    /// Returns the weights used for scoring, in criteria order.
    pub fn effective_weights(&self, criteria: &[Criterion]) -> Result<Vec<f64>, DomainError> {
        let raw: Vec<f64> = criteria.iter().map(|c| c.weight).collect();
        if !self.normalize_weights {
            return Ok(raw);
        }

        let total: f64 = raw.iter().sum();
        if total == 0.0 {
            return Err(DomainError::invalid_state(
                "Cannot normalize criterion weights that sum to zero",
            ));
        }
        Ok(raw.into_iter().map(|w| w / total).collect())
    }

    /// Computes Σ score_c(option) × weight_c over the given criteria.
    ///
    /// Scores for criteria not in `criteria` are ignored; criteria the option
    /// has no score for contribute zero.
    pub fn weighted_score(option: &DecisionOption, criteria: &[Criterion], weights: &[f64]) -> f64 {
        criteria
            .iter()
            .zip(weights)
            .map(|(criterion, weight)| option.score_for(&criterion.name) * weight)
            .sum()
    }

    /// Scores and sorts options best first.
    ///
    /// The sort is stable, so equal scores keep insertion order.
    pub fn rank<'a>(
        options: &'a [DecisionOption],
        criteria: &[Criterion],
        weights: &[f64],
    ) -> Vec<ScoredOption<'a>> {
        let mut ranked: Vec<ScoredOption<'a>> = options
            .iter()
            .map(|option| ScoredOption {
                option,
                score: Self::weighted_score(option, criteria, weights),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Builds the recommendation text from the first few pros.
    pub fn reasoning(option: &DecisionOption) -> String {
        let pros: Vec<&str> = option
            .pros
            .iter()
            .take(REASONING_PRO_LIMIT)
            .map(String::as_str)
            .collect();
        format!("{}{}", REASONING_PREFIX, pros.join(REASONING_CONNECTIVE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{OneAtATimeSensitivity, SensitivityLevel};

    const EPS: f64 = 1e-9;

    fn cost_quality() -> Vec<Criterion> {
        vec![
            Criterion::new("cost", 0.4, "").unwrap(),
            Criterion::new("quality", 0.6, "").unwrap(),
        ]
    }

    fn option(title: &str, cost: f64, quality: f64) -> DecisionOption {
        DecisionOption::new(title, "")
            .with_score("cost", cost)
            .with_score("quality", quality)
    }

    // Scoring Tests

    #[test]
    fn analyze_rejects_overflowing_weighted_score() {
        let criteria = vec![
            Criterion::new("c1", 10.0, "").unwrap(),
            Criterion::new("c2", 10.0, "").unwrap(),
        ];
        let options = vec![
            DecisionOption::new("Mid", "").with_score("c1", 7.0),
            DecisionOption::new("Overflow", "")
                .with_score("c1", 1e308)
                .with_score("c2", -1e308),
            DecisionOption::new("Top", "").with_score("c1", 9.0),
        ];

        let err = WeightedSumAnalyzer::new().analyze(&criteria, &options).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("option").map(String::as_str), Some("Overflow"));
        assert_eq!(err.details.get("field").map(String::as_str), Some("criteria_scores"));
    }

    #[test]
    fn weighted_score_sums_products() {
        let criteria = cost_quality();
        let score = WeightedSumAnalyzer::weighted_score(&option("A", 8.0, 5.0), &criteria, &[0.4, 0.6]);
        assert!((score - 6.2).abs() < EPS);
    }

    #[test]
    fn weighted_score_missing_entry_is_zero() {
        let criteria = cost_quality();
        let partial = DecisionOption::new("A", "").with_score("cost", 10.0);
        let score = WeightedSumAnalyzer::weighted_score(&partial, &criteria, &[0.4, 0.6]);
        assert!((score - 4.0).abs() < EPS);
    }

    #[test]
    fn weighted_score_ignores_unregistered_criteria() {
        let criteria = vec![Criterion::new("cost", 1.0, "").unwrap()];
        let extra = DecisionOption::new("A", "")
            .with_score("cost", 2.0)
            .with_score("legacy", 100.0);
        let score = WeightedSumAnalyzer::weighted_score(&extra, &criteria, &[1.0]);
        assert!((score - 2.0).abs() < EPS);
    }

    // Ranking Tests

    #[test]
    fn rank_orders_descending() {
        let criteria = cost_quality();
        let options = vec![option("A", 8.0, 5.0), option("B", 5.0, 9.0)];
        let ranked = WeightedSumAnalyzer::rank(&options, &criteria, &[0.4, 0.6]);

        let titles: Vec<_> = ranked.iter().map(|r| r.option.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn rank_keeps_insertion_order_on_ties() {
        let criteria = cost_quality();
        let options = vec![
            option("First", 5.0, 5.0),
            option("Top", 9.0, 9.0),
            option("Second", 5.0, 5.0),
            option("Third", 5.0, 5.0),
        ];
        let ranked = WeightedSumAnalyzer::rank(&options, &criteria, &[0.4, 0.6]);

        let titles: Vec<_> = ranked.iter().map(|r| r.option.title.as_str()).collect();
        assert_eq!(titles, vec!["Top", "First", "Second", "Third"]);
    }

    // Analysis Tests

    #[test]
    fn analyze_requires_options_and_criteria() {
        let analyzer = WeightedSumAnalyzer::new();

        let err = analyzer.analyze(&cost_quality(), &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);

        let err = analyzer.analyze(&[], &[option("A", 1.0, 1.0)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
        assert_eq!(err.details.get("criteria"), Some(&"0".to_string()));
    }

    #[test]
    fn analyze_cost_quality_scenario() {
        let options = vec![option("A", 8.0, 5.0), option("B", 5.0, 9.0)];
        let report = WeightedSumAnalyzer::new().analyze(&cost_quality(), &options).unwrap();

        assert_eq!(report.recommendation.best_option, "B");
        assert_eq!(report.recommendation.confidence, Confidence::High);
        assert_eq!(report.rankings[0].rank, 1);
        assert_eq!(report.rankings[0].title, "B");
        assert!((report.rankings[0].score - 7.4).abs() < EPS);
        assert_eq!(report.rankings[1].rank, 2);
        assert!((report.rankings[1].score - 6.2).abs() < EPS);
    }

    #[test]
    fn analyze_all_equal_is_low_confidence() {
        let options = vec![option("A", 5.0, 5.0), option("B", 5.0, 5.0)];
        let report = WeightedSumAnalyzer::new().analyze(&cost_quality(), &options).unwrap();

        assert_eq!(report.recommendation.best_option, "A");
        assert_eq!(report.recommendation.confidence, Confidence::Low);
    }

    #[test]
    fn analyze_single_option_is_low_confidence() {
        let report = WeightedSumAnalyzer::new()
            .analyze(&cost_quality(), &[option("Only", 3.0, 4.0)])
            .unwrap();

        assert_eq!(report.rankings.len(), 1);
        assert_eq!(report.recommendation.confidence, Confidence::Low);
    }

    #[test]
    fn analyze_confidence_boundaries() {
        let criteria = vec![Criterion::new("value", 1.0, "").unwrap()];
        let scored = |best: f64, worst: f64| {
            vec![
                DecisionOption::new("Best", "").with_score("value", best),
                DecisionOption::new("Worst", "").with_score("value", worst),
            ]
        };
        let analyzer = WeightedSumAnalyzer::new();

        // ratio 4 / 2 = 2.0 is not > 2
        let report = analyzer.analyze(&criteria, &scored(4.0, 2.0)).unwrap();
        assert_eq!(report.recommendation.confidence, Confidence::Medium);

        // ratio 3 / 2 = 1.5 is not > 1.5
        let report = analyzer.analyze(&criteria, &scored(3.0, 1.0)).unwrap();
        assert_eq!(report.recommendation.confidence, Confidence::Low);

        // ratio 6 / 2 = 3.0
        let report = analyzer.analyze(&criteria, &scored(6.0, 4.0)).unwrap();
        assert_eq!(report.recommendation.confidence, Confidence::High);
    }

    #[test]
    fn analyze_negative_best_score_is_not_clamped() {
        let criteria = vec![Criterion::new("value", 1.0, "").unwrap()];
        let options = vec![
            DecisionOption::new("Less bad", "").with_score("value", -1.0),
            DecisionOption::new("Worse", "").with_score("value", -3.0),
        ];

        let report = WeightedSumAnalyzer::new().analyze(&criteria, &options).unwrap();
        assert_eq!(report.recommendation.best_option, "Less bad");
        assert_eq!(report.recommendation.confidence, Confidence::Low);
    }

    #[test]
    fn reasoning_quotes_first_three_pros() {
        let opt = DecisionOption::new("A", "")
            .with_pro("cheap")
            .with_pro("fast")
            .with_pro("local")
            .with_pro("quiet");

        assert_eq!(
            WeightedSumAnalyzer::reasoning(&opt),
            "The main strengths of this option are: cheap, fast, local"
        );
    }

    #[test]
    fn reasoning_without_pros_keeps_template() {
        let opt = DecisionOption::new("A", "");
        assert_eq!(
            WeightedSumAnalyzer::reasoning(&opt),
            "The main strengths of this option are: "
        );
    }

    #[test]
    fn analyze_reports_basic_sensitivity_and_cons() {
        let options = vec![
            option("A", 8.0, 5.0).with_con("slow"),
            option("B", 5.0, 9.0).with_con("pricey"),
        ];
        let report = WeightedSumAnalyzer::new().analyze(&cost_quality(), &options).unwrap();

        assert_eq!(
            report.sensitivity_analysis.most_sensitive_criterion.as_deref(),
            Some("cost")
        );
        assert_eq!(report.sensitivity_analysis.sensitivity_level, SensitivityLevel::Medium);
        // risk list follows insertion order, not ranking
        assert_eq!(report.risk_analysis[0].option, "A");
        assert_eq!(report.risk_analysis[1].option, "B");
    }

    #[test]
    fn analyze_with_one_at_a_time_sensitivity() {
        let options = vec![option("A", 8.0, 5.0), option("B", 5.0, 9.0)];
        let analyzer = WeightedSumAnalyzer::new().with_sensitivity(OneAtATimeSensitivity::default());
        let report = analyzer.analyze(&cost_quality(), &options).unwrap();

        assert_eq!(
            report.sensitivity_analysis.most_sensitive_criterion.as_deref(),
            Some("quality")
        );
        assert_eq!(report.sensitivity_analysis.criteria.len(), 2);
    }

    // Normalization Tests

    #[test]
    fn raw_weights_are_used_by_default() {
        let criteria = vec![
            Criterion::new("cost", 2.0, "").unwrap(),
            Criterion::new("quality", 6.0, "").unwrap(),
        ];
        let weights = WeightedSumAnalyzer::new().effective_weights(&criteria).unwrap();
        assert_eq!(weights, vec![2.0, 6.0]);
    }

    #[test]
    fn normalized_weights_sum_to_one() {
        let criteria = vec![
            Criterion::new("cost", 2.0, "").unwrap(),
            Criterion::new("quality", 6.0, "").unwrap(),
        ];
        let weights = WeightedSumAnalyzer::new()
            .with_normalized_weights(true)
            .effective_weights(&criteria)
            .unwrap();

        assert!((weights[0] - 0.25).abs() < EPS);
        assert!((weights[1] - 0.75).abs() < EPS);
    }

    #[test]
    fn normalizing_zero_total_is_invalid_state() {
        let criteria = vec![Criterion::new("cost", 0.0, "").unwrap()];
        let err = WeightedSumAnalyzer::new()
            .with_normalized_weights(true)
            .analyze(&criteria, &[option("A", 1.0, 1.0)])
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[test]
    fn report_serializes_expected_keys() {
        let options = vec![option("A", 8.0, 5.0), option("B", 5.0, 9.0)];
        let report = WeightedSumAnalyzer::new().analyze(&cost_quality(), &options).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["recommendation"]["best_option"], "B");
        assert_eq!(json["recommendation"]["confidence"], "high");
        assert!(json["rankings"].is_array());
        assert!(json["sensitivity_analysis"].is_object());
        assert!(json["risk_analysis"].is_array());
    }
}
