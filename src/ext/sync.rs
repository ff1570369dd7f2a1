//! Synchronous counterparts of the document notifications.
//!
//! The integration harness calls these instead of the fire-and-forget
//! notifications so a following request can never race the store update.
//! Registered only when the `test-harness` feature is enabled.

use tower_lsp_server::lsp_types::{
    request::Request, DidChangeTextDocumentParams, DidOpenTextDocumentParams,
};

#[derive(Debug)]
pub enum DidOpenSync {}

impl Request for DidOpenSync {
    type Params = DidOpenTextDocumentParams;
    type Result = i32; // Can't be empty otherwise it will be treated as a notification.
    const METHOD: &'static str = "test/didOpenSync";
}

#[derive(Debug)]
pub enum DidChangeSync {}

impl Request for DidChangeSync {
    type Params = DidChangeTextDocumentParams;
    type Result = i32;
    const METHOD: &'static str = "test/didChangeSync";
}
