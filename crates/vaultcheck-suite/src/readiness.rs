//! Production readiness: eight boolean predicates, one point each.
//!
//! Predicates read the runner's counters and fresh oracle answers, never the
//! stored per-check results, so the assessment reflects the filesystem at
//! the instant it is computed.

use serde::{Deserialize, Serialize};
use vaultcheck_kernel::{CheckRunner, Oracle, ReadinessMarkers};

pub const MAX_SCORE: u32 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessAssessments {
    pub smart_contracts: bool,
    pub operator_software: bool,
    pub frontend_integration: bool,
    pub zk_circuits: bool,
    pub deployment_scripts: bool,
    pub documentation: bool,
    pub configuration: bool,
    pub testing_framework: bool,
}

impl ReadinessAssessments {
    /// Predicates in scoring order.
    pub fn entries(&self) -> [(&'static str, bool); MAX_SCORE as usize] {
        [
            ("smart_contracts", self.smart_contracts),
            ("operator_software", self.operator_software),
            ("frontend_integration", self.frontend_integration),
            ("zk_circuits", self.zk_circuits),
            ("deployment_scripts", self.deployment_scripts),
            ("documentation", self.documentation),
            ("configuration", self.configuration),
            ("testing_framework", self.testing_framework),
        ]
    }

    pub fn score(&self) -> u32 {
        self.entries().iter().filter(|(_, ready)| *ready).count() as u32
    }
}

/// Recommendation tier. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadinessTier {
    EarlyStage,
    DevelopmentStage,
    MostlyReady,
    ProductionReady,
}

impl ReadinessTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            ReadinessTier::ProductionReady
        } else if percentage >= 75.0 {
            ReadinessTier::MostlyReady
        } else if percentage >= 50.0 {
            ReadinessTier::DevelopmentStage
        } else {
            ReadinessTier::EarlyStage
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            ReadinessTier::ProductionReady => {
                "PRODUCTION READY - System is ready for mainnet deployment"
            }
            ReadinessTier::MostlyReady => "MOSTLY READY - Minor issues to address before production",
            ReadinessTier::DevelopmentStage => {
                "DEVELOPMENT STAGE - Significant work needed before production"
            }
            ReadinessTier::EarlyStage => {
                "EARLY STAGE - Major components missing, not ready for production"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessAssessment {
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub assessments: ReadinessAssessments,
    pub recommendation: String,
}

impl ReadinessAssessment {
    pub fn from_assessments(assessments: ReadinessAssessments) -> Self {
        let score = assessments.score();
        let percentage = f64::from(score) / f64::from(MAX_SCORE) * 100.0;
        Self {
            score,
            max_score: MAX_SCORE,
            percentage,
            assessments,
            recommendation: ReadinessTier::from_percentage(percentage)
                .recommendation()
                .to_string(),
        }
    }

    pub fn tier(&self) -> ReadinessTier {
        ReadinessTier::from_percentage(self.percentage)
    }
}

pub fn assess_readiness(
    runner: &CheckRunner,
    markers: &ReadinessMarkers,
    oracle: &dyn Oracle,
) -> ReadinessAssessment {
    let marker_exists =
        |marker: &Option<String>| marker.as_deref().is_some_and(|path| oracle.exists(path));

    let assessments = ReadinessAssessments {
        smart_contracts: runner.tests_passed() >= markers.smart_contracts_min_passed,
        operator_software: marker_exists(&markers.operator_software),
        frontend_integration: marker_exists(&markers.frontend_integration),
        zk_circuits: marker_exists(&markers.zk_circuits),
        deployment_scripts: marker_exists(&markers.deployment_scripts),
        documentation: marker_exists(&markers.documentation),
        configuration: marker_exists(&markers.configuration),
        testing_framework: runner.tests_run() > 0,
    };

    for (component, ready) in assessments.entries() {
        tracing::info!(component, ready, "readiness predicate");
    }

    ReadinessAssessment::from_assessments(assessments)
}
