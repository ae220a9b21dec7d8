//! Tool runner with captured output and explicit search-path override.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors that can occur when launching external tools.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The executable could not be started at all.
    #[error("Failed to spawn {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// Create a spawn failure error.
    pub fn spawn_failed(program: impl Into<String>, source: io::Error) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            source,
        }
    }
}

/// Result type for process operations.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Captured result of one finished tool invocation.
///
/// A non-zero exit code is data, not an error; only a failed spawn is.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code; -1 when the process died without one.
    pub exit_code: i32,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
    /// Captured stderr, lossily decoded.
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the tool reported success.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an external program to completion and hands back its output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> ProcessResult<CommandOutput>;
}

/// Real runner backed by `std::process::Command`.
///
/// The optional search directory is prepended to `PATH` for each child;
/// the override is computed once and handed to every spawn, the parent
/// environment is never touched.
pub struct ToolRunner {
    path_override: Option<OsString>,
}

impl ToolRunner {
    /// Runner that resolves tools through the inherited `PATH`.
    pub fn new() -> Self {
        Self {
            path_override: None,
        }
    }

    /// Runner that looks in `dir` first when resolving tools.
    pub fn with_search_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path_override: Some(prepend_to_path(dir.as_ref())),
        }
    }

    /// The `PATH` value handed to children, if overridden.
    pub fn search_path(&self) -> Option<&OsStr> {
        self.path_override.as_deref()
    }
}

impl Default for ToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ToolRunner {
    fn run(&self, program: &str, args: &[String]) -> ProcessResult<CommandOutput> {
        tracing::debug!("Running: {} {}", program, args.join(" "));

        let mut command = Command::new(program);
        command.args(args);
        if let Some(path) = self.search_path() {
            command.env("PATH", path);
        }

        let output = command
            .output()
            .map_err(|e| ProcessError::spawn_failed(program, e))?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Compute a `PATH` value with `dir` prepended to the inherited one.
fn prepend_to_path(dir: &Path) -> OsString {
    let mut entries: Vec<PathBuf> = vec![dir.to_path_buf()];
    if let Some(current) = env::var_os("PATH") {
        entries.extend(env::split_paths(&current));
    }
    env::join_paths(entries).unwrap_or_else(|_| dir.as_os_str().to_os_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_dir_is_prepended() {
        let runner = ToolRunner::with_search_dir("/opt/ffmpeg/bin");

        let path = runner.search_path().unwrap();
        let first = env::split_paths(path).next().unwrap();
        assert_eq!(first, PathBuf::from("/opt/ffmpeg/bin"));
    }

    #[test]
    fn plain_runner_inherits_path() {
        let runner = ToolRunner::new();
        assert!(runner.search_path().is_none());
    }

    #[test]
    fn spawn_failure_names_the_program() {
        let runner = ToolRunner::new();
        let err = runner
            .run("definitely-not-a-real-tool-7f3a", &[])
            .unwrap_err();

        assert!(matches!(err, ProcessError::SpawnFailed { .. }));
        assert!(err.to_string().contains("definitely-not-a-real-tool-7f3a"));
    }

    #[test]
    fn success_is_exit_zero() {
        let ok = CommandOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        };
        let failed = CommandOutput {
            exit_code: 1,
            ..ok.clone()
        };

        assert!(ok.success());
        assert!(!failed.success());
    }
}
