//! Extracts a schema document's direct imports.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

// `import "<path>";` with the path in double quotes. The keyword is
// literal: `import public` / `import weak` forms do not match.
#[allow(clippy::unwrap_used)]
static IMPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^[ \t]*import[ \t]+"([^"]+)"[ \t]*;"#).unwrap());

/// Resolves the document's `import` statements against its own directory,
/// in document order. Duplicates are kept and transitive imports are not
/// followed; targets may be dangling — the caller skips those.
pub fn direct_imports(text: &str, document_dir: &Path) -> Vec<PathBuf> {
    IMPORT_PATTERN
        .captures_iter(text)
        .map(|captures| document_dir.join(&captures[1]))
        .collect()
}
