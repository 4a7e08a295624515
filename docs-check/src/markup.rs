//! Markup-safety scanner for generated documents.
//!
//! MDX treats `<Tag` as the start of embedded JSX and `{ ... }` as an
//! expression, so generated prose must not contain either outside a code
//! fence. The scan is an explicit two-state machine: a pure transition per
//! line plus a pure per-line hazard detector applied only outside fences.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::FencePolicy;
use crate::error::{Violation, ViolationKind};

/// Marker that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// `<` immediately followed by an ASCII letter: the start of an inline tag.
/// `a < b` and `value <= 5` do not match.
static INLINE_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"<[A-Za-z]") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid inline tag regex: {err}"),
});

/// Scanner state for code fence tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceState {
    Outside,
    InsideFence {
        /// Line (1-indexed) of the opening marker.
        opened_at: usize,
    },
}

impl FenceState {
    /// State after `line`, or `None` if `line` is not a fence marker.
    ///
    /// A marker line toggles the state and is itself never scanned.
    #[must_use]
    pub fn transition(self, line: &str, line_number: usize) -> Option<Self> {
        if !line.trim().starts_with(FENCE_MARKER) {
            return None;
        }
        Some(match self {
            Self::Outside => Self::InsideFence {
                opened_at: line_number,
            },
            Self::InsideFence { .. } => Self::Outside,
        })
    }

    #[must_use]
    pub fn is_inside(self) -> bool {
        matches!(self, Self::InsideFence { .. })
    }
}

/// An unsafe construct found on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    InlineTag,
    Brace,
}

impl Hazard {
    #[must_use]
    pub fn kind(self) -> ViolationKind {
        match self {
            Self::InlineTag => ViolationKind::InlineTag,
            Self::Brace => ViolationKind::Brace,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InlineTag => "contains raw '<' that looks like JSX",
            Self::Brace => "contains raw '{' or '}'",
        }
    }
}

/// Hazards present on one line, at most one of each kind.
#[must_use]
pub fn detect_hazards(line: &str) -> Vec<Hazard> {
    let mut hazards = Vec::new();
    if INLINE_TAG_PATTERN.is_match(line) {
        hazards.push(Hazard::InlineTag);
    }
    if line.contains(['{', '}']) {
        hazards.push(Hazard::Brace);
    }
    hazards
}

/// Scan document content for markup hazards outside code fences.
///
/// `file` is used verbatim in the produced violations.
pub fn scan_markup_content(content: &str, file: &Path, policy: FencePolicy) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut state = FenceState::Outside;

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1; // 1-indexed

        if let Some(next) = state.transition(line, line_number) {
            state = next;
            continue;
        }
        if state.is_inside() {
            continue;
        }

        for hazard in detect_hazards(line) {
            violations.push(Violation::new(
                file,
                line_number,
                hazard.kind(),
                hazard.message(),
            ));
        }
    }

    if let FenceState::InsideFence { opened_at } = state
        && policy == FencePolicy::Strict
    {
        violations.push(Violation::new(
            file,
            opened_at,
            ViolationKind::UnterminatedFence,
            "opens a code fence that is never closed",
        ));
    }

    violations
}
