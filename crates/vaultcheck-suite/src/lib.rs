//! EigenVault conformance suite.
//!
//! Composes kernel oracle queries into one validator per component
//! category, runs them in a fixed order, and turns the outcomes into a
//! readiness assessment and a persisted report.

mod readiness;
mod report;
mod suite;
pub mod validators;

pub use readiness::{
    MAX_SCORE, ReadinessAssessment, ReadinessAssessments, ReadinessTier, assess_readiness,
};
pub use report::{
    DEFAULT_REPORT_FILE, PASS_RATE_THRESHOLD, Report, ReportError, ReportSummary,
    SystemComponents, generate_report, write_report,
};
pub use suite::{RegisteredCheck, Suite, SuiteError, run_suite};
pub use validators::Validator;
