//! Workspace project-tree contract and its filesystem realization.
//!
//! The scanner in [`crate::resolve::workspace_scan`] walks this tree
//! depth-first. Every inspection is fallible so a single unreadable item
//! can be skipped without unwinding the whole traversal.

use ignore::WalkBuilder;
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("workspace item is unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    PhysicalFile,
    Directory,
    /// Anything else the host surfaces: symlinks, virtual folders,
    /// placeholder entries.
    Misc,
}

/// One node of a project tree.
pub trait TreeItem {
    fn name(&self) -> Result<String, TreeError>;
    fn kind(&self) -> ItemKind;
    /// Resolved path for file-like items, `None` for containers.
    fn file_path(&self) -> Result<Option<PathBuf>, TreeError>;
    fn children(&self) -> Result<Vec<&dyn TreeItem>, TreeError>;
}

/// Yields the top-level projects of the workspace.
pub trait WorkspaceTree {
    fn projects(&self) -> Vec<&dyn TreeItem>;
}

/// Filesystem-backed tree: one project per workspace root folder.
///
/// The tree is materialized fresh on every call to [`FsWorkspaceTree::discover`]
/// — nothing is cached between resolutions. Siblings are sorted by file
/// name so traversal order is reproducible; the walker honors gitignore
/// rules and skips hidden entries unless told otherwise.
#[derive(Debug, Default)]
pub struct FsWorkspaceTree {
    projects: Vec<FsNode>,
}

#[derive(Debug)]
struct FsNode {
    name: String,
    path: PathBuf,
    kind: ItemKind,
    children: Vec<FsNode>,
}

impl FsWorkspaceTree {
    pub fn discover(roots: &[PathBuf], include_hidden: bool) -> Self {
        let mut projects = Vec::new();
        for root in roots {
            match build_project(root, include_hidden) {
                Some(project) => projects.push(project),
                None => debug!("workspace root yielded no items: {}", root.display()),
            }
        }
        Self { projects }
    }
}

impl WorkspaceTree for FsWorkspaceTree {
    fn projects(&self) -> Vec<&dyn TreeItem> {
        self.projects
            .iter()
            .map(|p| p as &dyn TreeItem)
            .collect()
    }
}

impl TreeItem for FsNode {
    fn name(&self) -> Result<String, TreeError> {
        Ok(self.name.clone())
    }

    fn kind(&self) -> ItemKind {
        self.kind
    }

    fn file_path(&self) -> Result<Option<PathBuf>, TreeError> {
        match self.kind {
            ItemKind::Directory => Ok(None),
            ItemKind::PhysicalFile | ItemKind::Misc => Ok(Some(self.path.clone())),
        }
    }

    fn children(&self) -> Result<Vec<&dyn TreeItem>, TreeError> {
        Ok(self.children.iter().map(|c| c as &dyn TreeItem).collect())
    }
}

fn node_for(path: &Path, kind: ItemKind) -> FsNode {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    FsNode {
        name,
        path: path.to_path_buf(),
        kind,
        children: Vec::new(),
    }
}

/// Builds the nested item tree for one root. Entries the walker cannot
/// inspect are skipped, never fatal.
fn build_project(root: &Path, include_hidden: bool) -> Option<FsNode> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(!include_hidden)
        .sort_by_file_name(std::cmp::Ord::cmp);

    // `stack[d]` is the open directory at depth `d`; entries arrive in
    // depth-first order so a shallower entry closes everything deeper.
    let mut stack: Vec<FsNode> = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping workspace entry: {err}");
                continue;
            }
        };

        let kind = match entry.file_type() {
            Some(ft) if ft.is_dir() => ItemKind::Directory,
            Some(ft) if ft.is_file() => ItemKind::PhysicalFile,
            _ => ItemKind::Misc,
        };
        let node = node_for(entry.path(), kind);
        let depth = entry.depth();

        while stack.len() > depth {
            let done = stack.pop()?;
            match stack.last_mut() {
                Some(parent) => parent.children.push(done),
                None => return Some(done),
            }
        }

        if kind == ItemKind::Directory {
            stack.push(node);
        } else if let Some(parent) = stack.last_mut() {
            parent.children.push(node);
        } else {
            // Root is itself a file-like entry.
            return Some(node);
        }
    }

    while stack.len() > 1 {
        let done = stack.pop()?;
        stack.last_mut()?.children.push(done);
    }
    stack.pop()
}
