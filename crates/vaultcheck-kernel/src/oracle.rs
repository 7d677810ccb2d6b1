//! Filesystem oracle: the only way checks observe the inspected project.
//!
//! Every query re-touches the filesystem. Nothing is cached, so an answer is
//! only as fresh as the instant of the call.

use crate::error::OracleError;
use std::fs;
use std::path::{Path, PathBuf};

pub trait Oracle {
    fn exists(&self, path: &str) -> bool;

    /// Whole-file text content. Errors are runtime faults for the caller.
    fn read_text(&self, path: &str) -> Result<String, OracleError>;

    /// Substring search. Fails closed: an absent or unreadable file never
    /// contains anything.
    fn contains(&self, path: &str, token: &str) -> bool {
        self.read_text(path)
            .map(|text| text.contains(token))
            .unwrap_or(false)
    }

    /// Whether the file carries an execute permission bit. Fails closed.
    fn is_executable(&self, path: &str) -> bool;
}

/// Oracle over the real filesystem, resolving relative paths against `root`.
#[derive(Debug, Clone)]
pub struct FsOracle {
    root: PathBuf,
}

impl FsOracle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Oracle for FsOracle {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read_text(&self, path: &str) -> Result<String, OracleError> {
        let resolved = self.resolve(path);
        fs::read_to_string(&resolved).map_err(|source| OracleError::read_file(&resolved, source))
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &str) -> bool {
        use std::os::unix::fs::PermissionsExt;

        fs::metadata(self.resolve(path))
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }
}
