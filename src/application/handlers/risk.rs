//! AssessRisksHandler - Command handler for risk scoring.

use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::risk::{RiskAssessor, RiskFactor, RiskReport};

/// Command to assess a list of independent risk factors.
#[derive(Debug, Clone)]
pub struct AssessRisksCommand {
    pub risk_factors: Vec<RiskFactor>,
}

/// Handler for risk assessment.
#[derive(Debug, Clone, Default)]
pub struct AssessRisksHandler {
    assessor: RiskAssessor,
}

impl AssessRisksHandler {
    pub fn new(assessor: RiskAssessor) -> Self {
        Self { assessor }
    }

    pub fn handle(&self, cmd: AssessRisksCommand) -> Result<RiskReport, DomainError> {
        let report = self.assessor.assess_risks(&cmd.risk_factors)?;

        let overall = &report.overall_assessment;
        debug!(
            factors = report.risk_factors.len(),
            average_score = overall.average_score,
            risk_level = %overall.risk_level,
            "Risks assessed"
        );

        Ok(report)
    }
}
