//! Error and violation types for the documentation checks.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A fatal failure of the check environment.
///
/// These are distinct from [`Violation`] (a content defect found in a
/// document). A `CheckError` means the check could not run to completion,
/// so it aborts the run instead of being collected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// A configured input path does not exist.
    #[error("Path does not exist: {}", .path.display())]
    MissingPath { path: PathBuf },

    /// A configured directory input points at something else.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// Directory traversal failed (permission denied, vanished entry, ...).
    #[error("Directory traversal error under {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid UTF-8.
    #[error("File is not valid UTF-8: {}", .path.display())]
    InvalidEncoding { path: PathBuf },

    /// The navigation configuration could not be parsed.
    #[error("Invalid navigation config {}: {message}", .path.display())]
    NavigationParse { path: PathBuf, message: String },

    /// A requested sidebar is absent from the navigation configuration.
    #[error("Sidebar '{name}' not found in navigation config")]
    MissingSidebar { name: String },
}

/// The kind of content defect a [`Violation`] describes.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ViolationKind {
    /// `<` directly followed by an ASCII letter outside a code fence.
    InlineTag,
    /// `{` or `}` outside a code fence.
    Brace,
    /// A code fence opened and never closed.
    UnterminatedFence,
    /// A navigation entry names a document id that does not exist.
    MissingDocument,
    /// Two documents resolve to the same id.
    DuplicateId,
}

/// One detected problem in the documentation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Violation {
    /// File the problem was found in (relative to the scanned root when known).
    pub file: PathBuf,
    /// Line number (1-indexed); 0 when the problem is not tied to a line.
    pub line: usize,
    /// Which check fired.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    pub(crate) fn new(
        file: impl Into<PathBuf>,
        line: usize,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            kind,
            message: message.into(),
        }
    }

    /// Format the violation for human-readable output.
    ///
    /// `{file}:{line} {message}` when a line is known, `{file}: {message}` otherwise.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        if self.line > 0 {
            format!("{}:{} {}", self.file.display(), self.line, self.message)
        } else {
            format!("{}: {}", self.file.display(), self.message)
        }
    }
}
