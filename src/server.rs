use crate::config::Settings;
use crate::document_store::DocumentStore;
use crate::handlers::{goto_definition, lifecycle};
use log::info;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, GotoDefinitionParams, GotoDefinitionResponse, InitializeParams,
    InitializeResult, InitializedParams, OneOf, ServerCapabilities, ServerInfo,
    TextDocumentSyncCapability, TextDocumentSyncKind, TextDocumentSyncOptions,
};
use tower_lsp_server::{Client, LanguageServer};

#[derive(Debug)]
pub struct Backend {
    pub client: Client,
    pub documents: DocumentStore,
    pub workspace_roots: RwLock<Vec<PathBuf>>,
    pub settings: RwLock<Settings>,
}

impl Backend {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            workspace_roots: RwLock::new(Vec::new()),
            settings: RwLock::new(Settings::default()),
        }
    }
}

impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("initializing server...");
        lifecycle::handle_initialize(self, &params).await;

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "protobuf-goto-language-server".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        will_save: Some(false),
                        will_save_wait_until: Some(false),
                        save: Some(true.into()),
                    },
                )),
                definition_provider: Some(OneOf::Left(true)),
                ..ServerCapabilities::default()
            },
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("server initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        info!("shutting down server...");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        lifecycle::handle_did_open(self, params).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        lifecycle::handle_did_change(self, params).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        lifecycle::handle_did_save(self, params).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        lifecycle::handle_did_close(self, params).await;
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        goto_definition::handle_goto_definition(self, params).await
    }
}

#[cfg(feature = "test-harness")]
impl Backend {
    pub async fn did_open_sync(&self, params: DidOpenTextDocumentParams) -> Result<i32> {
        lifecycle::handle_did_open(self, params).await;
        Ok(0)
    }

    pub async fn did_change_sync(&self, params: DidChangeTextDocumentParams) -> Result<i32> {
        lifecycle::handle_did_change(self, params).await;
        Ok(0)
    }
}
