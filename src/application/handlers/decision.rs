//! AnalyzeDecisionHandler - Command handler for multi-criteria decision analysis.

use std::sync::Arc;

use tracing::debug;

use crate::domain::decision::{
    Criterion, DecisionOption, DecisionReport, DecisionSession, WeightedSumAnalyzer,
};
use crate::domain::foundation::DomainError;

/// Command to analyze a set of options against weighted criteria.
#[derive(Debug, Clone)]
pub struct AnalyzeDecisionCommand {
    pub criteria: Vec<Criterion>,
    pub options: Vec<DecisionOption>,
}

/// Handler for decision analysis.
///
/// Each call builds its own session; the analyzer is shared.
pub struct AnalyzeDecisionHandler {
    analyzer: Arc<WeightedSumAnalyzer>,
}

impl AnalyzeDecisionHandler {
    pub fn new(analyzer: Arc<WeightedSumAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn handle(&self, cmd: AnalyzeDecisionCommand) -> Result<DecisionReport, DomainError> {
        let mut session = DecisionSession::new();

        // Criteria first, so option score keys can be checked against them
        for criterion in cmd.criteria {
            session.add_criterion(criterion)?;
        }
        for option in cmd.options {
            session.add_option(option)?;
        }

        let report = session.analyze_with(&self.analyzer)?;

        debug!(
            criteria = session.criteria().len(),
            options = session.options().len(),
            best_option = %report.recommendation.best_option,
            confidence = %report.recommendation.confidence,
            "Decision analyzed"
        );

        Ok(report)
    }
}
