//! Pulls the identifier under the cursor out of the focused document.

use crate::editor::EditorCursor;
use tower_lsp_server::lsp_types::Position;

/// Restores the saved cursor position when dropped, so extraction can
/// never leave a stray selection behind, whatever path it exits through.
struct RestoreOnExit<'a> {
    cursor: &'a mut dyn EditorCursor,
    saved: Position,
}

impl Drop for RestoreOnExit<'_> {
    fn drop(&mut self) {
        self.cursor.move_to(self.saved);
    }
}

/// The contiguous word token around the cursor: the selection is extended
/// left to the previous word boundary and right to the next one, and the
/// two halves are concatenated and trimmed. `None` when the cursor sits
/// on whitespace or punctuation.
pub fn identifier_under_cursor(cursor: &mut dyn EditorCursor) -> Option<String> {
    let mut guard = RestoreOnExit {
        saved: cursor.position(),
        cursor,
    };
    let left = guard.cursor.extend_word_left();
    let right = guard.cursor.extend_word_right();
    drop(guard);

    let token = format!("{left}{right}");
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
