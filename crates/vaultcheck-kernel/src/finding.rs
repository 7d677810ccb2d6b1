//! Per-item diagnostics collected while a check runs.
//!
//! Findings are console side-output. They never change a check's verdict;
//! the check function decides that on its own.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A required artifact, token, or marker is present.
    Found,
    /// A required artifact or token is absent.
    Missing,
    /// A soft marker is absent or an artifact looks incomplete.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Findings {
    items: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.push(FindingKind::Found, subject.into(), message.into());
    }

    pub fn missing(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.push(FindingKind::Missing, subject.into(), message.into());
    }

    pub fn warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.push(FindingKind::Warning, subject.into(), message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.items.iter()
    }

    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, kind: FindingKind, subject: String, message: String) {
        match kind {
            FindingKind::Found => tracing::debug!(subject = %subject, "{message}"),
            FindingKind::Missing => tracing::warn!(subject = %subject, "missing: {message}"),
            FindingKind::Warning => tracing::warn!(subject = %subject, "warning: {message}"),
        }
        self.items.push(Finding {
            kind,
            subject,
            message,
        });
    }
}
