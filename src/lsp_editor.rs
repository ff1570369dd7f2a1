//! The editor contract realized over an LSP request.
//!
//! An LSP server does not own the client's cursor; the client jumps when
//! it receives the returned `Location`. So the cursor here operates on a
//! rope snapshot of the requested document, and opening/activating a
//! document records the navigation instead of performing it.

use crate::editor::{ActiveDocument, DocumentView, Editor, EditorCursor, Navigation, OpenError};
use ropey::Rope;
use std::path::{Path, PathBuf};
use tower_lsp_server::lsp_types::Position;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Selection cursor over a rope snapshot. Positions are char-based like
/// the rest of the server; out-of-range positions clamp to the buffer.
#[derive(Debug)]
pub struct RopeCursor {
    rope: Rope,
    position: Position,
}

impl RopeCursor {
    #[must_use]
    pub fn new(rope: Rope, position: Position) -> Self {
        Self { rope, position }
    }

    fn char_offset(&self) -> usize {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line_index = (self.position.line as usize).min(last_line);
        let line = self.rope.line(line_index);

        let mut line_len = line.len_chars();
        if line_len > 0 && line.char(line_len - 1) == '\n' {
            line_len -= 1;
        }

        self.rope.line_to_char(line_index) + (self.position.character as usize).min(line_len)
    }
}

impl EditorCursor for RopeCursor {
    fn position(&self) -> Position {
        self.position
    }

    fn extend_word_left(&mut self) -> String {
        let offset = self.char_offset();
        let mut start = offset;
        while start > 0 && is_word_char(self.rope.char(start - 1)) {
            start -= 1;
        }
        self.rope.slice(start..offset).to_string()
    }

    fn extend_word_right(&mut self) -> String {
        let offset = self.char_offset();
        let mut end = offset;
        while end < self.rope.len_chars() && is_word_char(self.rope.char(end)) {
            end += 1;
        }
        self.rope.slice(offset..end).to_string()
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

/// What the pipeline asked the editor to do with the winning document.
#[derive(Debug, Default)]
struct RecordedView {
    path: PathBuf,
    cursor: Option<Position>,
    activated: bool,
}

impl DocumentView for RecordedView {
    fn set_cursor(&mut self, position: Position) {
        self.cursor = Some(position);
    }

    fn activate(&mut self) {
        self.activated = true;
    }
}

#[derive(Debug)]
pub struct LspEditor {
    document: ActiveDocument,
    cursor: RopeCursor,
    view: Option<RecordedView>,
}

impl LspEditor {
    #[must_use]
    pub fn new(path: PathBuf, rope: &Rope, position: Position) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            document: ActiveDocument {
                name,
                path,
                text: rope.to_string(),
            },
            cursor: RopeCursor::new(rope.clone(), position),
            view: None,
        }
    }

    /// The navigation the pipeline performed, once a view was opened,
    /// positioned and activated.
    #[must_use]
    pub fn recorded_navigation(&self) -> Option<Navigation> {
        let view = self.view.as_ref()?;
        if !view.activated {
            return None;
        }
        Some(Navigation {
            path: view.path.clone(),
            position: view.cursor?,
        })
    }
}

impl Editor for LspEditor {
    fn active_document(&self) -> Option<ActiveDocument> {
        Some(self.document.clone())
    }

    fn cursor(&mut self) -> &mut dyn EditorCursor {
        &mut self.cursor
    }

    fn open_document(&mut self, path: &Path) -> Result<&mut dyn DocumentView, OpenError> {
        let view = self.view.insert(RecordedView {
            path: path.to_path_buf(),
            ..RecordedView::default()
        });
        Ok(view)
    }
}
