//! Check report types.

use serde::Serialize;

use crate::error::{Violation, ViolationKind};

/// Which checker produced a report.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum CheckKind {
    MarkupSafety,
    Navigation,
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarkupSafety => write!(f, "markup-safety"),
            Self::Navigation => write!(f, "navigation"),
        }
    }
}

/// Result of one checker run.
///
/// All violations found are collected here; the checker never stops at the
/// first one. CI must fail whenever `ok` is false.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// The checker that ran.
    pub check: CheckKind,
    /// Number of documents read.
    pub scanned_files: usize,
    /// Whether no violations were found.
    pub ok: bool,
    /// Every violation, in discovery order.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub(crate) fn new(check: CheckKind, scanned_files: usize, violations: Vec<Violation>) -> Self {
        Self {
            check,
            scanned_files,
            ok: violations.is_empty(),
            violations,
        }
    }

    /// Number of violations found.
    #[must_use]
    pub fn violations_count(&self) -> usize {
        self.violations.len()
    }

    /// Violations of a single kind.
    pub fn violations_of(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }
}
