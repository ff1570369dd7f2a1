//! Host editor contracts.
//!
//! The resolution pipeline never talks to the host directly; it borrows
//! these traits for the duration of a single invocation and drops them
//! afterwards. The production implementation lives in [`crate::lsp_editor`],
//! where navigation is recorded and handed back to the LSP client.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tower_lsp_server::lsp_types::Position;

/// Snapshot of the focused document at the moment a resolution starts.
#[derive(Debug, Clone)]
pub struct ActiveDocument {
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

/// The jump a resolution performed: which file, and where in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: PathBuf,
    pub position: Position,
}

#[derive(Debug, Error)]
#[error("failed to open document: {}", .0.display())]
pub struct OpenError(pub PathBuf);

/// The selection cursor of the focused document.
///
/// Word extension mirrors how an editor extends a selection: each call
/// grows the selection from the current position to the adjacent word
/// boundary and returns the text it covered. `move_to` discards any
/// selection and places the cursor at an absolute position.
pub trait EditorCursor {
    fn position(&self) -> Position;
    fn extend_word_left(&mut self) -> String;
    fn extend_word_right(&mut self) -> String;
    fn move_to(&mut self, position: Position);
}

/// An opened document's view: cursor placement plus focus.
pub trait DocumentView {
    fn set_cursor(&mut self, position: Position);
    fn activate(&mut self);
}

/// The editor itself: active document, its cursor, and the ability to
/// open (or re-focus) a document by path.
pub trait Editor {
    /// `None` when no document has focus or the host is not ready yet.
    fn active_document(&self) -> Option<ActiveDocument>;

    fn cursor(&mut self) -> &mut dyn EditorCursor;

    /// Opens `path` in an editor view, creating one if needed. The view is
    /// only valid until the next call on this editor.
    fn open_document(&mut self, path: &Path) -> Result<&mut dyn DocumentView, OpenError>;
}
