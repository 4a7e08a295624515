//! # docs-check
//!
//! Build-time consistency checks for the documentation site.
//!
//! Two independent checkers, each producing a [`CheckReport`]:
//!
//! - **Markup safety** ([`check_markup_safety`]): generated `_meta` documents
//!   must not contain raw `<Tag` or `{`/`}` outside code fences, since MDX
//!   would parse them as JSX or expressions.
//! - **Navigation consistency** ([`check_navigation`]): every doc id the
//!   sidebar references must resolve to a document on disk.
//!
//! Content defects are collected into the report; environment failures
//! (missing directories, unreadable files) abort with a [`CheckError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docs_check::{MarkupSafetyConfig, NavigationCheckConfig, NavigationConfig};
//! use docs_check::{check_markup_safety, check_navigation};
//!
//! let markup = check_markup_safety(&MarkupSafetyConfig::new("docs/_meta")).unwrap();
//! println!("markup ok: {}", markup.ok);
//!
//! let navigation = NavigationConfig::load("sidebars.json".as_ref()).unwrap();
//! let report = check_navigation(&NavigationCheckConfig::new("docs"), &navigation).unwrap();
//! println!("missing references: {}", report.violations_count());
//! ```

mod config;
mod doc_index;
mod error;
pub mod frontmatter;
pub mod fs;
pub mod markup;
pub mod navigation;
pub mod output;
mod report;

pub use config::{
    DEFAULT_SIDEBAR, DuplicatePolicy, FencePolicy, MarkupSafetyConfig, NavigationCheckConfig,
    SidebarSelection,
};
pub use doc_index::{DocIndex, DuplicateDoc};
pub use error::{CheckError, Violation, ViolationKind};
pub use navigation::{NavItem, NavNode, NavigationConfig, collect_doc_ids};
pub use report::{CheckKind, CheckReport};

use tracing::{debug, info};

use crate::fs::{display_path, find_documents, read_document};
use crate::markup::scan_markup_content;

/// Scan the generated documents in `config.meta_dir` for unsafe markup.
///
/// Only direct children with an accepted extension are scanned.
///
/// # Errors
///
/// Returns an error if the directory does not exist or a file cannot be read.
/// Unsafe content is never an error; it is reported in the returned report.
pub fn check_markup_safety(config: &MarkupSafetyConfig) -> Result<CheckReport, CheckError> {
    let files = find_documents(&config.meta_dir, &config.extensions, false)?;

    let mut violations = Vec::new();
    for path in &files {
        let content = read_document(path)?;
        let file = display_path(&config.meta_dir, path);
        let found = scan_markup_content(&content, &file, config.fence_policy);
        debug!(file = %file.display(), violations = found.len(), "scanned document");
        violations.extend(found);
    }

    info!(
        files = files.len(),
        violations = violations.len(),
        "markup safety check finished"
    );
    Ok(CheckReport::new(CheckKind::MarkupSafety, files.len(), violations))
}

/// Verify that every doc id referenced by the selected sidebars exists under
/// `config.docs_root`.
///
/// Each missing reference is reported once per occurrence, in navigation
/// order. Under [`DuplicatePolicy::Deny`] documents sharing an id are
/// reported as well.
///
/// # Errors
///
/// Returns an error if the docs root is missing, a document cannot be read,
/// or a named sidebar is absent from `navigation`.
pub fn check_navigation(
    config: &NavigationCheckConfig,
    navigation: &NavigationConfig,
) -> Result<CheckReport, CheckError> {
    let selected: Vec<(&str, &[NavItem])> = match &config.sidebars {
        SidebarSelection::Named(name) => {
            let items = navigation
                .sidebar(name)
                .ok_or_else(|| CheckError::MissingSidebar { name: name.clone() })?;
            vec![(name.as_str(), items)]
        }
        SidebarSelection::All => navigation
            .sidebars
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
            .collect(),
    };

    let index = DocIndex::build(&config.docs_root, &config.extensions)?;

    let mut violations = Vec::new();
    if config.duplicate_policy == DuplicatePolicy::Deny {
        for dup in index.duplicates() {
            violations.push(Violation::new(
                &dup.duplicate,
                0,
                ViolationKind::DuplicateId,
                format!(
                    "resolves to doc id '{}' already used by {}",
                    dup.id,
                    dup.first.display()
                ),
            ));
        }
    }

    for (name, items) in selected {
        let referenced = collect_doc_ids(items);
        debug!(sidebar = name, references = referenced.len(), "collected sidebar ids");
        for id in referenced.iter().filter(|id| !index.contains(id)) {
            violations.push(Violation::new(
                &navigation.source,
                0,
                ViolationKind::MissingDocument,
                format!("sidebar '{name}' references missing doc id '{id}'"),
            ));
        }
    }

    info!(
        documents = index.scanned_files(),
        violations = violations.len(),
        "navigation check finished"
    );
    Ok(CheckReport::new(
        CheckKind::Navigation,
        index.scanned_files(),
        violations,
    ))
}
