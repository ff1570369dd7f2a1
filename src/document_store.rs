use crate::utils::paths::{is_supported_document, uri_to_path_buf};
use dashmap::DashMap;
use log::debug;
use ropey::Rope;
use std::path::{Path, PathBuf};
use tower_lsp_server::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams,
};

/// Open-buffer snapshots, keyed by path.
///
/// Both schema documents and generated-code documents are tracked, since
/// goto-definition is served from either. The active document's buffer
/// wins over its on-disk content during a resolution; everything else is
/// always read fresh from disk.
#[derive(Debug, Default)]
pub struct DocumentStore {
    pub document_map: DashMap<PathBuf, Rope>,
}

impl DocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            document_map: DashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<Rope> {
        self.document_map.get(path).map(|doc| doc.value().clone())
    }

    pub fn handle_did_open(&self, params: DidOpenTextDocumentParams) -> Option<PathBuf> {
        debug!("opened: {}", params.text_document.uri.path());
        if !is_supported_document(&params.text_document.uri) {
            return None;
        }
        let path = uri_to_path_buf(&params.text_document.uri)?;

        self.document_map
            .insert(path.clone(), Rope::from_str(&params.text_document.text));
        Some(path)
    }

    pub fn handle_did_change(&self, mut params: DidChangeTextDocumentParams) -> Option<PathBuf> {
        debug!("changed: {}", params.text_document.uri.path());
        if !is_supported_document(&params.text_document.uri) {
            return None;
        }
        let path = uri_to_path_buf(&params.text_document.uri)?;

        if params.content_changes.is_empty() {
            return None;
        }
        let content = params.content_changes.remove(0).text;
        self.document_map
            .insert(path.clone(), Rope::from_str(&content));
        Some(path)
    }

    pub fn handle_did_save(&self, params: DidSaveTextDocumentParams) -> Option<PathBuf> {
        debug!("saved: {}", params.text_document.uri.path());
        if !is_supported_document(&params.text_document.uri) {
            return None;
        }
        let path = uri_to_path_buf(&params.text_document.uri)?;

        if let Some(text) = params.text {
            self.document_map.insert(path.clone(), Rope::from_str(&text));
        }
        Some(path)
    }

    pub fn handle_did_close(&self, params: &DidCloseTextDocumentParams) {
        debug!("closed: {}", params.text_document.uri.path());
        if let Some(path) = uri_to_path_buf(&params.text_document.uri) {
            self.document_map.remove(&path);
        }
    }
}
