//! Check runner: executes named checks and records one result per call.
//!
//! Counters live on the runner value, so independent runs can coexist in one
//! process. `tests_passed <= tests_run` holds after every call, and the
//! result sequence length always equals `tests_run`.

use crate::error::CheckError;
use crate::finding::Findings;
use serde::{Deserialize, Serialize};

const DETAILS_PASSED: &str = "Test completed successfully";
const DETAILS_FAILED: &str = "Test failed validation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Passed,
    Failed,
    Error,
}

/// Outcome of one check, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: String,
}

#[derive(Debug, Default)]
pub struct CheckRunner {
    tests_run: usize,
    tests_passed: usize,
    results: Vec<CheckResult>,
    findings: Vec<Findings>,
}

impl CheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one check and record its outcome.
    ///
    /// `Ok(true)` is `PASSED`, `Ok(false)` is `FAILED`, and `Err(fault)` is
    /// `ERROR` with the fault message as details. Faults never propagate.
    pub fn run<F>(&mut self, name: impl Into<String>, check: F) -> bool
    where
        F: FnOnce(&mut Findings) -> Result<bool, CheckError>,
    {
        let name = name.into();
        self.tests_run += 1;
        tracing::info!(check = %name, "running check");

        let mut findings = Findings::new();
        let (status, details) = match check(&mut findings) {
            Ok(true) => {
                self.tests_passed += 1;
                tracing::info!(check = %name, "passed");
                (CheckStatus::Passed, DETAILS_PASSED.to_string())
            }
            Ok(false) => {
                tracing::info!(check = %name, "failed");
                (CheckStatus::Failed, DETAILS_FAILED.to_string())
            }
            Err(err) => {
                tracing::error!(check = %name, error = %err, "check raised a fault");
                (CheckStatus::Error, err.to_string())
            }
        };

        let passed = status == CheckStatus::Passed;
        self.results.push(CheckResult {
            name,
            status,
            details,
        });
        self.findings.push(findings);
        passed
    }

    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    pub fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    /// Results in execution order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Each result paired with the findings its check collected.
    pub fn outcomes(&self) -> impl Iterator<Item = (&CheckResult, &Findings)> {
        self.results.iter().zip(self.findings.iter())
    }

    pub fn findings_for(&self, name: &str) -> Option<&Findings> {
        self.outcomes()
            .find(|(result, _)| result.name == name)
            .map(|(_, findings)| findings)
    }

    /// Percentage of passed checks; `0.0` when nothing has run.
    pub fn success_rate(&self) -> f64 {
        if self.tests_run == 0 {
            0.0
        } else {
            self.tests_passed as f64 / self.tests_run as f64 * 100.0
        }
    }
}
