//! Flattens the workspace project tree into schema file candidates.

use crate::utils::paths::is_schema_file_name;
use crate::workspace_tree::{TreeItem, WorkspaceTree};
use log::debug;
use std::path::PathBuf;

/// Every schema file reachable from the workspace's projects, in
/// depth-first pre-order. The order is the traversal order — it is the
/// tie-break when the same name is declared in several files, so it must
/// be reproducible for an unchanged workspace.
pub fn collect_schema_files(tree: &dyn WorkspaceTree) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for project in tree.projects() {
        visit(project, &mut found);
    }
    found
}

/// One item, then its children. An item that errors while being inspected
/// is skipped along with its subtree; the rest of the traversal continues.
fn visit(item: &dyn TreeItem, found: &mut Vec<PathBuf>) {
    let name = match item.name() {
        Ok(name) => name,
        Err(err) => {
            debug!("skipping workspace item: {err}");
            return;
        }
    };

    if is_schema_file_name(&name) {
        match item.file_path() {
            Ok(Some(path)) => found.push(path),
            Ok(None) => {}
            Err(err) => debug!("skipping workspace item {name}: {err}"),
        }
    }

    match item.children() {
        Ok(children) => {
            for child in children {
                visit(child, found);
            }
        }
        Err(err) => debug!("skipping children of {name}: {err}"),
    }
}
