//! The tiered definition search.
//!
//! One invocation is a single ordered search with first-match-wins
//! semantics and no backtracking: the active document, then its direct
//! imports, then every schema file in the workspace. Every failure mode —
//! host not ready, unsupported document, nothing under the cursor, no
//! declaration anywhere — degrades to `None` with nothing observable
//! changed in the editor.
//!
//! Nothing here is cached: imports, workspace items and file contents are
//! re-read on every invocation, so rapid repeated invocations are safe and
//! always see the current workspace.

pub mod extract;
pub mod imports;
pub mod normalize;
pub mod scanner;
pub mod workspace_scan;

use crate::editor::{Editor, Navigation};
use crate::host::FileReader;
use crate::utils::paths::{is_generated_source_path, is_schema_path};
use crate::workspace_tree::WorkspaceTree;
use log::{debug, info};
use scanner::{Definition, DefinitionPattern};
use std::path::Path;
use tower_lsp_server::lsp_types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Schema,
    Generated,
}

impl DocumentKind {
    /// `None` for any kind of document this command does not handle.
    pub fn of_path(path: &Path) -> Option<Self> {
        if is_schema_path(path) {
            Some(Self::Schema)
        } else if is_generated_source_path(path) {
            Some(Self::Generated)
        } else {
            None
        }
    }
}

/// Runs the full search and, on a hit, drives the editor to the
/// declaration: open the document, place the cursor on the first character
/// of the name, bring the view to focus. Returns the performed jump.
pub fn resolve_definition(
    editor: &mut dyn Editor,
    files: &dyn FileReader,
    workspace: &dyn WorkspaceTree,
) -> Option<Navigation> {
    let document = editor.active_document()?;
    let kind = DocumentKind::of_path(&document.path)?;

    let raw = extract::identifier_under_cursor(editor.cursor())?;
    let target = match kind {
        DocumentKind::Schema => raw.as_str(),
        DocumentKind::Generated => normalize::strip_generated_prefix(&raw),
    };
    if target.is_empty() {
        return None;
    }

    // One compiled pattern serves all tiers.
    let pattern = DefinitionPattern::new(target);
    debug!("resolving definition of {target} from {}", document.name);

    if kind == DocumentKind::Schema {
        if let Some(definition) = pattern.find_first(&document.text) {
            debug!("{target} declared in the active document");
            return jump_to(editor, &document.path, &definition);
        }

        let document_dir = document.path.parent().unwrap_or_else(|| Path::new(""));
        for import in imports::direct_imports(&document.text, document_dir) {
            if !files.exists(&import) {
                debug!("skipping dangling import {}", import.display());
                continue;
            }
            let text = match files.read_to_string(&import) {
                Ok(text) => text,
                Err(err) => {
                    debug!("skipping import: {err}");
                    continue;
                }
            };
            if let Some(definition) = pattern.find_first(&text) {
                debug!("{target} declared in import {}", import.display());
                return jump_to(editor, &import, &definition);
            }
        }
    }

    for candidate in workspace_scan::collect_schema_files(workspace) {
        if !files.exists(&candidate) {
            continue;
        }
        let text = match files.read_to_string(&candidate) {
            Ok(text) => text,
            Err(err) => {
                debug!("skipping workspace file: {err}");
                continue;
            }
        };
        if let Some(definition) = pattern.find_first(&text) {
            debug!("{target} declared in workspace file {}", candidate.display());
            return jump_to(editor, &candidate, &definition);
        }
    }

    debug!("no declaration of {target} found");
    None
}

fn jump_to(editor: &mut dyn Editor, path: &Path, definition: &Definition) -> Option<Navigation> {
    let position = Position::new(
        definition.line.saturating_sub(1) as u32,
        definition.column as u32,
    );

    let view = match editor.open_document(path) {
        Ok(view) => view,
        Err(err) => {
            // The match is confirmed but unusable; nothing observable may
            // escape, so the resolution ends here.
            debug!("{err}");
            return None;
        }
    };
    view.set_cursor(position);
    view.activate();

    info!(
        "jumped to {} declared at {}:{}:{}",
        definition.name,
        path.display(),
        definition.line,
        definition.column,
    );
    Some(Navigation {
        path: path.to_path_buf(),
        position,
    })
}
