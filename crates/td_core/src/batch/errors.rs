//! Error types for the batch pass.

use thiserror::Error;

use crate::config::ConfigError;
use crate::discovery::DiscoveryError;
use crate::process::ProcessError;

/// Top-level batch error.
///
/// Lower layers convert in via `From`; `Aborted` is the fail-fast exit
/// taken when the tool rejects a file.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("File discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("{0}")]
    Process(#[from] ProcessError),

    /// ffmpeg rejected a file; the rest of the batch was not attempted.
    #[error("ffmpeg failed on '{file}' with exit code {exit_code}: {stderr}")]
    Aborted {
        file: String,
        exit_code: i32,
        stderr: String,
    },
}

impl BatchError {
    /// Create the fail-fast abort error for one rejected file.
    pub fn aborted(file: impl Into<String>, exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::Aborted {
            file: file.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;
