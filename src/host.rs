//! File access contract consumed by the resolution tiers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

/// Reads candidate files for the import and workspace tiers.
///
/// Non-existence is reported distinctly from a read failure; the pipeline
/// treats both as "skip this candidate" but logs them differently.
pub trait FileReader {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String, ReadError>;
}

/// `std::fs`-backed reader used by the server.
#[derive(Debug, Default)]
pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, ReadError> {
        fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ReadError::NotFound(path.to_path_buf())
            } else {
                ReadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }
}
