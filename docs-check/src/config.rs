//! Configuration types for the documentation checks.
//!
//! Each checker gets its own config. Default scan roots (`docs/_meta`, `docs`,
//! `sidebars.json`) are a CLI concern, not baked into the library, so the
//! checks can run against any tree, including temporary fixtures in tests.

use std::path::PathBuf;

/// Name of the sidebar checked when none is given explicitly.
pub const DEFAULT_SIDEBAR: &str = "docsSidebar";

/// What to do with a code fence that is opened but never closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum FencePolicy {
    /// Report the opening fence as a violation (default).
    #[default]
    Strict,
    /// Silently treat the rest of the file as fenced.
    Permissive,
}

/// What to do when two documents resolve to the same id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum DuplicatePolicy {
    /// Report every document that reuses an id already taken (default).
    #[default]
    Deny,
    /// Accept duplicates; the id simply exists.
    Allow,
}

/// Which sidebars of the navigation configuration to verify.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SidebarSelection {
    /// A single named sidebar; it must exist in the configuration.
    Named(String),
    /// Every sidebar in the configuration, in name order.
    All,
}

impl Default for SidebarSelection {
    fn default() -> Self {
        Self::Named(DEFAULT_SIDEBAR.to_owned())
    }
}

/// Options for the markup-safety check over generated `_meta` documents.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct MarkupSafetyConfig {
    /// Directory whose direct children are scanned. Required.
    pub meta_dir: PathBuf,
    /// Extensions (without the dot) of files to scan. Others are ignored.
    pub extensions: Vec<String>,
    /// Handling of unterminated code fences.
    pub fence_policy: FencePolicy,
}

impl MarkupSafetyConfig {
    #[must_use]
    pub fn new(meta_dir: impl Into<PathBuf>) -> Self {
        Self {
            meta_dir: meta_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for MarkupSafetyConfig {
    fn default() -> Self {
        Self {
            meta_dir: PathBuf::new(),
            extensions: vec!["md".to_owned()],
            fence_policy: FencePolicy::default(),
        }
    }
}

/// Options for the navigation consistency check.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct NavigationCheckConfig {
    /// Root of the document tree, walked recursively. Required.
    pub docs_root: PathBuf,
    /// Extensions (without the dot) that count as documents.
    pub extensions: Vec<String>,
    /// Sidebars to verify.
    pub sidebars: SidebarSelection,
    /// Handling of documents sharing an id.
    pub duplicate_policy: DuplicatePolicy,
}

impl NavigationCheckConfig {
    #[must_use]
    pub fn new(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            ..Self::default()
        }
    }
}

impl Default for NavigationCheckConfig {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::new(),
            extensions: vec!["md".to_owned(), "mdx".to_owned()],
            sidebars: SidebarSelection::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}
