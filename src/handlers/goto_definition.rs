use crate::ext::duration::DurationFormat;
use crate::host::FsFileReader;
use crate::lsp_editor::LspEditor;
use crate::resolve::resolve_definition;
use crate::server::Backend;
use crate::utils::paths::{path_buf_to_uri, uri_to_path_buf};
use crate::workspace_tree::FsWorkspaceTree;
use log::debug;
use ropey::Rope;
use std::path::PathBuf;
use std::time::Instant;
use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::lsp_types::{GotoDefinitionParams, GotoDefinitionResponse, Location, Range};

/// Builds the per-request host adapters and runs the pipeline. Everything
/// — imports, workspace tree, file contents — is assembled fresh for this
/// one request and dropped afterwards.
pub async fn handle_goto_definition(
    backend: &Backend,
    params: GotoDefinitionParams,
) -> Result<Option<GotoDefinitionResponse>> {
    let uri = params.text_document_position_params.text_document.uri;
    let position = params.text_document_position_params.position;

    let Some(path) = uri_to_path_buf(&uri) else {
        return Ok(None);
    };

    // The open buffer is the source of truth for the focused document;
    // fall back to disk if the client never opened it with us.
    let rope = match backend.documents.get(&path) {
        Some(rope) => rope,
        None => match std::fs::read_to_string(&path) {
            Ok(text) => Rope::from_str(&text),
            Err(err) => {
                debug!("cannot read requested document {}: {err}", path.display());
                return Ok(None);
            }
        },
    };

    let settings = backend.settings.read().await.clone();
    let mut roots: Vec<PathBuf> = backend.workspace_roots.read().await.clone();
    for extra in &settings.extra_workspace_roots {
        if !roots.contains(extra) {
            roots.push(extra.clone());
        }
    }

    let workspace = FsWorkspaceTree::discover(&roots, settings.include_hidden);
    let reader = FsFileReader;
    let mut editor = LspEditor::new(path.clone(), &rope, position);

    let started = Instant::now();
    let navigation = resolve_definition(&mut editor, &reader, &workspace);
    debug!("definition resolution took {}", started.elapsed().log_str());

    Ok(navigation.and_then(|nav| {
        let document_dir = path.parent().unwrap_or_else(|| std::path::Path::new(""));
        let shown = pathdiff::diff_paths(&nav.path, document_dir).unwrap_or_else(|| nav.path.clone());
        debug!("responding with location in {}", shown.display());

        let target_uri = path_buf_to_uri(&nav.path)?;
        Some(GotoDefinitionResponse::Scalar(Location::new(
            target_uri,
            Range::new(nav.position, nav.position),
        )))
    }))
}
