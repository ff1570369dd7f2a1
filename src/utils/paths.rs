use std::path::{Path, PathBuf};
use tower_lsp_server::lsp_types::Uri;
use tower_lsp_server::UriExt;

pub const SCHEMA_EXTENSION: &str = "proto";

/// Extensions of generated-code documents derived from a schema
/// (protoc C++ output headers and implementation files).
pub const GENERATED_EXTENSIONS: [&str; 4] = ["h", "hpp", "cc", "cpp"];

pub fn is_schema_path(path: &Path) -> bool {
    has_extension(path, &[SCHEMA_EXTENSION])
}

pub fn is_generated_source_path(path: &Path) -> bool {
    has_extension(path, &GENERATED_EXTENSIONS)
}

pub fn is_supported_document(uri: &Uri) -> bool {
    uri.to_file_path()
        .is_some_and(|p| is_schema_path(&p) || is_generated_source_path(&p))
}

/// Case-insensitive check on the file *name*, so items without a real
/// filesystem path (e.g. miscellaneous project items) still match.
pub fn is_schema_file_name(name: &str) -> bool {
    name.len() > SCHEMA_EXTENSION.len() + 1
        && name
            .to_ascii_lowercase()
            .ends_with(&format!(".{SCHEMA_EXTENSION}"))
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

pub fn uri_to_path_buf(uri: &Uri) -> Option<PathBuf> {
    uri.to_file_path().map(|p| p.into_owned())
}

pub fn path_buf_to_uri(path: &Path) -> Option<Uri> {
    Uri::from_file_path(path)
}
