//! Source file enumeration.
//!
//! Scans the configured source directory for entries matching the
//! configured extension. Matching is by name only and case-insensitive;
//! the scan does not recurse and entries come back in directory order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while enumerating source files.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Source directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read source directory: {0}")]
    ReadError(#[from] io::Error),
}

/// Result type for discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// List the entries directly inside `dir` whose final `.extension`
/// component matches `extension` (given without the leading dot),
/// ignoring case.
///
/// Order is whatever the directory iterator yields. Entries with no
/// extension never match, and nothing beyond the name is checked.
pub fn list_video_files(
    dir: impl AsRef<Path>,
    extension: &str,
) -> DiscoveryResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(DiscoveryError::DirectoryNotFound(dir.to_path_buf()));
    }

    let wanted = extension.to_lowercase();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase() == wanted)
            .unwrap_or(false);

        if matches {
            tracing::debug!("Matched {}", path.display());
            files.push(path);
        }
    }

    tracing::info!("Found {} file(s) in {}", files.len(), dir.display());
    Ok(files)
}
