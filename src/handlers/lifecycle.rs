use crate::config::Settings;
use crate::server::Backend;
use crate::utils::paths::uri_to_path_buf;
use log::info;
use std::path::PathBuf;
use tower_lsp_server::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, InitializeParams, Uri,
};

pub async fn handle_initialize(backend: &Backend, params: &InitializeParams) {
    let settings = Settings::from_initialize(params);

    // Client-reported folder order is the workspace enumeration order,
    // which makes it the cross-project tie-break. Keep it.
    let mut roots: Vec<PathBuf> = Vec::new();
    if let Some(folders) = &params.workspace_folders {
        for folder in folders {
            push_root(&mut roots, &folder.uri);
        }
    }
    if let Some(root_uri) = get_root_uri(params) {
        push_root(&mut roots, &root_uri);
    }
    info!("workspace roots: {roots:?}");

    *backend.workspace_roots.write().await = roots;
    *backend.settings.write().await = settings;
}

fn push_root(roots: &mut Vec<PathBuf>, uri: &Uri) {
    if let Some(path) = uri_to_path_buf(uri) {
        if !roots.contains(&path) {
            roots.push(path);
        }
    }
}

#[allow(deprecated)] // root_uri is deprecated in favor of workspace_folders
fn get_root_uri(params: &InitializeParams) -> Option<Uri> {
    params.root_uri.clone()
}

pub async fn handle_did_open(backend: &Backend, params: DidOpenTextDocumentParams) {
    backend.documents.handle_did_open(params);
}

pub async fn handle_did_change(backend: &Backend, params: DidChangeTextDocumentParams) {
    backend.documents.handle_did_change(params);
}

pub async fn handle_did_save(backend: &Backend, params: DidSaveTextDocumentParams) {
    backend.documents.handle_did_save(params);
}

pub async fn handle_did_close(backend: &Backend, params: DidCloseTextDocumentParams) {
    backend.documents.handle_did_close(&params);
}
