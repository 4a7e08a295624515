//! Index of document ids present on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CheckError;
use crate::frontmatter::resolve_doc_id;
use crate::fs::{display_path, find_documents, read_document};

/// Two documents resolving to the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDoc {
    pub id: String,
    /// The document that claimed the id first (in sorted path order).
    pub first: PathBuf,
    /// The later document reusing it.
    pub duplicate: PathBuf,
}

/// Every document id found under a root, with the file that defines it.
#[derive(Debug, Clone, Default)]
pub struct DocIndex {
    ids: HashMap<String, PathBuf>,
    duplicates: Vec<DuplicateDoc>,
    scanned_files: usize,
}

impl DocIndex {
    /// Walk `root` recursively and resolve the id of every document.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing or any document cannot be read.
    pub fn build(root: &Path, extensions: &[String]) -> Result<Self, CheckError> {
        let mut index = Self::default();
        for path in find_documents(root, extensions, true)? {
            let content = read_document(&path)?;
            let id = resolve_doc_id(root, &path, &content);
            debug!(file = %path.display(), id = %id, "resolved doc id");
            index.insert(id, display_path(root, &path));
        }
        Ok(index)
    }

    fn insert(&mut self, id: String, file: PathBuf) {
        self.scanned_files += 1;
        if let Some(first) = self.ids.get(&id) {
            self.duplicates.push(DuplicateDoc {
                id,
                first: first.clone(),
                duplicate: file,
            });
        } else {
            self.ids.insert(id, file);
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    #[must_use]
    pub fn duplicates(&self) -> &[DuplicateDoc] {
        &self.duplicates
    }

    /// Number of documents read.
    #[must_use]
    pub fn scanned_files(&self) -> usize {
        self.scanned_files
    }
}
