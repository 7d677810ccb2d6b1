//! Error types for vaultcheck kernel operations.

use std::path::Path;

/// Errors arising while loading or validating an artifact manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not well-formed TOML or does not match the schema.
    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The manifest parsed but violates a structural rule.
    #[error("invalid manifest: {0}")]
    Invalid(String),
}

/// Errors returned by an oracle when file content is required.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl OracleError {
    pub(crate) fn read_file(path: &Path, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }
}

/// A runtime fault raised while executing one check.
///
/// The runner records it as an `ERROR` result; it never aborts the suite.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("{0}")]
    Fault(String),
}
