//! # Vaultcheck Kernel
//!
//! Static structural conformance checks: a check is admissible evidence
//! exactly when it is derived from a declared artifact manifest and answered
//! by a filesystem oracle, nothing else.
//!
//! This crate is **category-agnostic**: it does not prescribe what a check
//! verifies. It only prescribes where expected artifacts are declared, how
//! their presence and content are observed, and how check outcomes are
//! counted and recorded.
//!
//! ## Architecture
//!
//! ```text
//! Manifest        ← Declared artifacts, required tokens, readiness markers
//!     │
//! Oracle          ← exists(path), contains(path, token); no caching
//!     │
//! Findings        ← Per-item found/missing/warning diagnostics
//!     │
//! CheckRunner     ← Ok(bool) | Err(fault) → PASSED / FAILED / ERROR
//! ```

pub mod error;
pub mod finding;
pub mod manifest;
pub mod oracle;
pub mod runner;

pub use error::{CheckError, ManifestError, OracleError};
pub use finding::{Finding, FindingKind, Findings};
pub use manifest::{
    ArtifactEntry, Category, ConfigRequirements, DocRequirements, FrontendIntegration,
    InterfaceMethods, Manifest, OperatorRequirements, ReadinessMarkers, ScriptRequirements,
};
pub use oracle::{FsOracle, Oracle};
pub use runner::{CheckResult, CheckRunner, CheckStatus};
