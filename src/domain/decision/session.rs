//! Decision Session - Per-request accumulator for criteria and options.

use std::collections::HashSet;

use crate::domain::foundation::{DomainError, ValidationError};

use super::{Criterion, DecisionOption, DecisionReport, WeightedSumAnalyzer};

/// Criteria and options gathered for one analysis.
///
/// A session belongs to a single request. It is built with exclusive
/// access (`&mut self`), then analyzed, then dropped. Criteria must be
/// registered before the options that score them: `add_option` rejects
/// score keys that name no registered criterion.
#[derive(Debug, Clone, Default)]
pub struct DecisionSession {
    criteria: Vec<Criterion>,
    options: Vec<DecisionOption>,
}

impl DecisionSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a criterion.
    ///
    /// # Errors
    /// - Blank name, negative or non-finite weight
    /// - A criterion with the same name is already registered
    pub fn add_criterion(&mut self, criterion: Criterion) -> Result<(), ValidationError> {
        criterion.validate()?;
        if self.criteria.iter().any(|c| c.name == criterion.name) {
            return Err(ValidationError::duplicate("name", criterion.name));
        }
        self.criteria.push(criterion);
        Ok(())
    }

    /// Registers an option.
    ///
    /// # Errors
    /// - Blank title or non-finite score
    /// - An option with the same title is already registered
    /// - A score key names no registered criterion
    pub fn add_option(&mut self, option: DecisionOption) -> Result<(), ValidationError> {
        option.validate()?;
        if self.options.iter().any(|o| o.title == option.title) {
            return Err(ValidationError::duplicate("title", option.title));
        }

        let known: HashSet<&str> = self.criteria.iter().map(|c| c.name.as_str()).collect();
        let mut unknown: Vec<&String> = option
            .criteria_scores
            .keys()
            .filter(|key| !known.contains(key.as_str()))
            .collect();
        unknown.sort();
        if let Some(key) = unknown.first() {
            return Err(ValidationError::unknown_reference(
                "criteria_scores",
                key.as_str(),
            ));
        }

        self.options.push(option);
        Ok(())
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    /// Analyzes with raw weights and the basic strategies.
    pub fn analyze_decision(&self) -> Result<DecisionReport, DomainError> {
        self.analyze_with(&WeightedSumAnalyzer::default())
    }

    /// Analyzes with a configured analyzer.
    pub fn analyze_with(&self, analyzer: &WeightedSumAnalyzer) -> Result<DecisionReport, DomainError> {
        analyzer.analyze(&self.criteria, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::Confidence;
    use crate::domain::foundation::ErrorCode;

    fn session_with_criteria() -> DecisionSession {
        let mut session = DecisionSession::new();
        session.add_criterion(Criterion::new("cost", 0.4, "Total price").unwrap()).unwrap();
        session.add_criterion(Criterion::new("quality", 0.6, "Build quality").unwrap()).unwrap();
        session
    }

    #[test]
    fn empty_session_is_invalid_state() {
        let err = DecisionSession::new().analyze_decision().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[test]
    fn criteria_without_options_is_invalid_state() {
        let err = session_with_criteria().analyze_decision().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[test]
    fn add_criterion_rejects_duplicate_name() {
        let mut session = session_with_criteria();
        let err = session
            .add_criterion(Criterion::new("cost", 1.0, "").unwrap())
            .unwrap_err();
        assert_eq!(err, ValidationError::duplicate("name", "cost"));
        assert_eq!(session.criteria().len(), 2);
    }

    #[test]
    fn add_criterion_rejects_negative_weight() {
        let mut session = DecisionSession::new();
        let criterion = Criterion {
            name: "cost".to_string(),
            weight: -1.0,
            description: String::new(),
        };
        assert!(session.add_criterion(criterion).is_err());
        assert!(session.criteria().is_empty());
    }

    #[test]
    fn add_option_rejects_duplicate_title() {
        let mut session = session_with_criteria();
        session.add_option(DecisionOption::new("A", "")).unwrap();
        let err = session.add_option(DecisionOption::new("A", "again")).unwrap_err();
        assert_eq!(err, ValidationError::duplicate("title", "A"));
    }

    #[test]
    fn add_option_rejects_unknown_criterion_key() {
        let mut session = session_with_criteria();
        let err = session
            .add_option(
                DecisionOption::new("A", "")
                    .with_score("cost", 1.0)
                    .with_score("qualty", 2.0),
            )
            .unwrap_err();

        assert_eq!(err, ValidationError::unknown_reference("criteria_scores", "qualty"));
        assert!(session.options().is_empty());
    }

    #[test]
    fn add_option_before_criteria_rejects_scores() {
        let mut session = DecisionSession::new();
        let err = session
            .add_option(DecisionOption::new("A", "").with_score("cost", 1.0))
            .unwrap_err();
        assert_eq!(err.field(), "criteria_scores");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut session = session_with_criteria();
        session.add_option(DecisionOption::new("Z", "")).unwrap();
        session.add_option(DecisionOption::new("A", "")).unwrap();

        let titles: Vec<_> = session.options().iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Z", "A"]);
    }

    #[test]
    fn analyze_decision_end_to_end() {
        let mut session = session_with_criteria();
        session
            .add_option(
                DecisionOption::new("A", "Option A")
                    .with_score("cost", 8.0)
                    .with_score("quality", 5.0)
                    .with_pro("cheap"),
            )
            .unwrap();
        session
            .add_option(
                DecisionOption::new("B", "Option B")
                    .with_score("cost", 5.0)
                    .with_score("quality", 9.0)
                    .with_pro("durable")
                    .with_pro("warranty")
                    .with_con("expensive"),
            )
            .unwrap();

        let report = session.analyze_decision().unwrap();

        assert_eq!(report.recommendation.best_option, "B");
        assert_eq!(report.recommendation.confidence, Confidence::High);
        assert_eq!(
            report.recommendation.reasoning,
            "The main strengths of this option are: durable, warranty"
        );
        assert!((report.ranking_of("A").unwrap().score - 6.2).abs() < 1e-9);
        assert_eq!(report.risk_analysis.len(), 1);
        assert_eq!(report.risk_analysis[0].risk, "expensive");
    }

    #[test]
    fn analyze_is_repeatable() {
        let mut session = session_with_criteria();
        session
            .add_option(DecisionOption::new("A", "").with_score("cost", 3.0))
            .unwrap();
        session
            .add_option(DecisionOption::new("B", "").with_score("quality", 2.0))
            .unwrap();

        let first = session.analyze_decision().unwrap();
        let second = session.analyze_decision().unwrap();
        assert_eq!(first, second);
    }
}
