//! Document discovery on disk.
//!
//! The tree is treated as a read-only snapshot: every file is opened, read in
//! full and closed before the next one. Any I/O failure is fatal for the run.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CheckError;

/// Whether a walk entry is a file to consider.
///
/// Symlinked directories are never descended into (no loops), but a symlink
/// to anything other than a directory counts as a file and is read through.
/// A dangling link therefore surfaces as a read error rather than vanishing.
fn is_candidate_file(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink() && !entry.path().is_dir()
}

/// Check if the file has one of the accepted extensions.
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|accepted| accepted == ext))
}

/// Fail unless `path` exists and is a directory.
///
/// # Errors
///
/// Returns [`CheckError::MissingPath`] or [`CheckError::NotADirectory`].
pub fn ensure_dir(path: &Path) -> Result<(), CheckError> {
    if !path.exists() {
        return Err(CheckError::MissingPath {
            path: path.to_owned(),
        });
    }
    if !path.is_dir() {
        return Err(CheckError::NotADirectory {
            path: path.to_owned(),
        });
    }
    Ok(())
}

/// Find all documents under `root` with one of `extensions`.
///
/// When `recursive` is false only the direct children of `root` are
/// considered; otherwise every subdirectory is entered. Symlinked files are
/// included, symlinked directories are not entered. The result is sorted so
/// runs over an unchanged tree are reproducible.
///
/// # Errors
///
/// Returns an error if `root` is not a directory or if traversal fails.
pub fn find_documents(
    root: &Path,
    extensions: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>, CheckError> {
    ensure_dir(root)?;

    let mut walker = WalkDir::new(root).follow_links(false).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = entry_result.map_err(|source| CheckError::Walk {
            root: root.to_owned(),
            source,
        })?;

        if !is_candidate_file(&entry) {
            continue;
        }

        let path = entry.path();
        if has_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Read a whole document as UTF-8.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String, CheckError> {
    let bytes = std::fs::read(path).map_err(|source| CheckError::Io {
        path: path.to_owned(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| CheckError::InvalidEncoding {
        path: path.to_owned(),
    })
}

/// Path of `path` relative to `root`, `/`-separated, extension stripped.
///
/// This is the implicit id of a document without an explicit front-matter id:
/// `docs/guide/setup.md` under `docs` becomes `guide/setup`.
#[must_use]
pub fn relative_id_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Path of `path` relative to `root` for display in diagnostics.
#[must_use]
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
