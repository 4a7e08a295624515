//! Shared output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for `CheckReport`.
//! Color/terminal formatting belongs to the CLI layer.

use std::io::Write;

use crate::report::{CheckKind, CheckReport};

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format several reports as a single JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json_all(reports: &[CheckReport], writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// One-line summary of a report.
#[must_use]
pub fn summary_line(report: &CheckReport) -> String {
    match (report.check, report.ok) {
        (CheckKind::MarkupSafety, true) => format!(
            "MDX safety check passed for {} _meta docs.",
            report.scanned_files
        ),
        (CheckKind::MarkupSafety, false) => format!(
            "MDX safety check failed: {} violation(s) in {} _meta docs.",
            report.violations_count(),
            report.scanned_files
        ),
        (CheckKind::Navigation, true) => "Sidebar validation passed.".to_owned(),
        (CheckKind::Navigation, false) => format!(
            "Sidebar validation failed: {} violation(s).",
            report.violations_count()
        ),
    }
}

/// Write every violation, one per line, to `writer`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_violations(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    for violation in &report.violations {
        writeln!(writer, "{}", violation.format_human_readable())?;
    }
    Ok(())
}
