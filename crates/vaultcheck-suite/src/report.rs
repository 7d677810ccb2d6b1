//! Report generation and persistence.
//!
//! Field names and nesting are a stable interface for downstream tooling.

use crate::readiness::{ReadinessAssessment, assess_readiness};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vaultcheck_kernel::{Category, CheckResult, CheckRunner, Manifest, Oracle};

pub const DEFAULT_REPORT_FILE: &str = "eigenvault_test_report.json";

/// Minimum success rate (percent) for a zero exit status.
pub const PASS_RATE_THRESHOLD: f64 = 75.0;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to render report JSON: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write report: {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub tests_run: usize,
    pub tests_passed: usize,
    pub success_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemComponents {
    pub smart_contracts: usize,
    pub libraries: usize,
    pub interfaces: usize,
    /// Operator artifacts that exist right now, not the declared count.
    pub operator_modules: usize,
    pub circuits: usize,
    pub frontend_files: usize,
}

impl SystemComponents {
    pub fn collect(manifest: &Manifest, oracle: &dyn Oracle) -> Self {
        Self {
            smart_contracts: manifest.count(Category::SmartContracts),
            libraries: manifest.count(Category::Libraries),
            interfaces: manifest.count(Category::Interfaces),
            operator_modules: manifest
                .entries(Category::OperatorSoftware)
                .filter(|entry| oracle.exists(&entry.path))
                .count(),
            circuits: manifest.count(Category::Circuits),
            frontend_files: manifest.count(Category::Frontend),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: String,
    pub summary: ReportSummary,
    pub test_results: Vec<CheckResult>,
    pub production_readiness: ReadinessAssessment,
    pub system_components: SystemComponents,
}

impl Report {
    pub fn passes_gate(&self) -> bool {
        self.summary.success_rate >= PASS_RATE_THRESHOLD
    }

    /// Process exit status: 0 at or above the pass-rate gate, 1 below it.
    pub fn exit_code(&self) -> i32 {
        if self.passes_gate() { 0 } else { 1 }
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn generate_report(runner: &CheckRunner, manifest: &Manifest, oracle: &dyn Oracle) -> Report {
    let production_readiness = assess_readiness(runner, &manifest.readiness, oracle);
    Report {
        timestamp: local_timestamp(),
        summary: ReportSummary {
            tests_run: runner.tests_run(),
            tests_passed: runner.tests_passed(),
            success_rate: runner.success_rate(),
        },
        test_results: runner.results().to_vec(),
        production_readiness,
        system_components: SystemComponents::collect(manifest, oracle),
    }
}

/// Overwrite `path` with the pretty-printed report.
pub fn write_report(report: &Report, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    let rendered = report.to_json_pretty()?;
    let write_err = |source| ReportError::WriteFile {
        path: path.to_string_lossy().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, rendered).map_err(write_err)?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
