//! Size-annotated directory tree rendering
//!
//! A flat FileSet is folded into nested directory nodes, sizes are summed
//! bottom-up once every file is inserted, then the tree is rendered
//! depth-first:
//!
//! ```text
//! ├── README.md (9 bytes)
//! └── src/ (8 bytes)
//!     ├── lib/ (4 bytes)
//!     │   └── helper.py (4 bytes)
//!     └── main.py (4 bytes)
//! ```

use std::collections::BTreeMap;

use crate::files::FileSet;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// A node in the project tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory {
        name: String,
        children: BTreeMap<String, TreeNode>,
        /// Sum of every file beneath; set by `FileTree::from_files`
        size: u64,
    },
    File {
        name: String,
        /// UTF-8 encoded length of the content
        size: u64,
    },
}

impl TreeNode {
    fn directory(name: &str) -> Self {
        TreeNode::Directory {
            name: name.to_string(),
            children: BTreeMap::new(),
            size: 0,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory { name, .. } | TreeNode::File { name, .. } => name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            TreeNode::Directory { size, .. } | TreeNode::File { size, .. } => *size,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    /// Look up a direct child by name
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Directory { children, .. } => children.get(name),
            TreeNode::File { .. } => None,
        }
    }

    /// Recompute directory sizes from the leaves up and return this node's size
    fn compute_sizes(&mut self) -> u64 {
        match self {
            TreeNode::File { size, .. } => *size,
            TreeNode::Directory { children, size, .. } => {
                *size = children.values_mut().map(TreeNode::compute_sizes).sum();
                *size
            }
        }
    }
}

/// The project tree, rooted at an unnamed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTree {
    root: TreeNode,
}

impl FileTree {
    pub fn from_files(files: &FileSet) -> Self {
        let mut root = TreeNode::directory("");

        for (path, content) in files {
            insert(&mut root, path, content.len() as u64);
        }
        root.compute_sizes();

        Self { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn total_size(&self) -> u64 {
        self.root.size()
    }

    /// Find a node by `/`-separated path
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        segments(path).try_fold(&self.root, |node, segment| node.child(segment))
    }

    /// Render one line per node; empty string for an empty tree
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        if let TreeNode::Directory { children, .. } = &self.root {
            render_children(children, "", &mut lines);
        }
        lines.join("\n")
    }
}

/// Render the size-annotated tree for a FileSet
pub fn build_tree(files: &FileSet) -> String {
    FileTree::from_files(files).render()
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty() && *segment != ".")
}

fn insert(root: &mut TreeNode, path: &str, size: u64) {
    let parts: Vec<&str> = segments(path).collect();
    let Some((file_name, dirs)) = parts.split_last() else {
        tracing::warn!("Skipping path without a file name: {:?}", path);
        return;
    };

    let mut node = root;
    for dir in dirs {
        let TreeNode::Directory { children, .. } = node else {
            unreachable!("only directories are descended into");
        };
        let entry = children
            .entry(dir.to_string())
            .or_insert_with(|| TreeNode::directory(dir));
        if !entry.is_directory() {
            tracing::warn!(
                "{:?} is both a file and a directory in {:?}; keeping the directory",
                dir,
                path
            );
            *entry = TreeNode::directory(dir);
        }
        node = entry;
    }

    let TreeNode::Directory { children, .. } = node else {
        unreachable!("only directories are descended into");
    };
    if children.get(*file_name).is_some_and(TreeNode::is_directory) {
        tracing::warn!(
            "{:?} is both a file and a directory; keeping the directory",
            path
        );
        return;
    }
    children.insert(
        file_name.to_string(),
        TreeNode::File {
            name: file_name.to_string(),
            size,
        },
    );
}

fn render_children(children: &BTreeMap<String, TreeNode>, prefix: &str, lines: &mut Vec<String>) {
    let count = children.len();
    for (index, child) in children.values().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        match child {
            TreeNode::File { name, size } => {
                lines.push(format!("{prefix}{connector}{name} ({size} bytes)"));
            }
            TreeNode::Directory {
                name,
                children: grandchildren,
                size,
            } => {
                lines.push(format!("{prefix}{connector}{name}/ ({size} bytes)"));
                let indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
                render_children(grandchildren, &format!("{prefix}{indent}"), lines);
            }
        }
    }
}
