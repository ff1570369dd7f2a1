use log::warn;
use serde::Deserialize;
use std::path::PathBuf;
use tower_lsp_server::lsp_types::InitializeParams;

/// Client-supplied settings, taken from `initializationOptions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Additional roots to scan in the workspace tier, on top of the
    /// workspace folders the client reports.
    pub extra_workspace_roots: Vec<PathBuf>,
    /// Scan hidden files and directories too.
    pub include_hidden: bool,
}

impl Settings {
    #[must_use]
    pub fn from_initialize(params: &InitializeParams) -> Self {
        let Some(options) = params.initialization_options.clone() else {
            return Self::default();
        };
        match serde_json::from_value(options) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("ignoring malformed initializationOptions: {err}");
                Self::default()
            }
        }
    }
}
