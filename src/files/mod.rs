//! Project snapshots: relative path to text content

pub mod loader;

use std::collections::BTreeMap;

use crate::tree::FileTree;

/// Relative `/`-separated path (no leading slash) to file content
///
/// A `BTreeMap` keeps every traversal sorted, so renderings and filter results
/// are deterministic across runs.
pub type FileSet = BTreeMap<String, String>;

/// A loaded project snapshot with convenience views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFiles {
    files: FileSet,
}

impl ProjectFiles {
    pub fn new(files: FileSet) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Sum of UTF-8 byte lengths of all contents
    pub fn total_size(&self) -> u64 {
        self.files.values().map(|content| content.len() as u64).sum()
    }

    /// Size-annotated directory tree
    pub fn file_tree(&self) -> String {
        FileTree::from_files(&self.files).render()
    }
}

impl From<FileSet> for ProjectFiles {
    fn from(files: FileSet) -> Self {
        Self::new(files)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProjectFiles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(path, content)| (path.into(), content.into()))
                .collect(),
        )
    }
}
