//! Batch run report.

use std::path::PathBuf;

/// One successfully processed file.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    /// Input path.
    pub source: PathBuf,
    /// Where the stripped copy was written.
    pub output: PathBuf,
}

/// Summary of a completed batch.
///
/// Only produced when every file went through; a fail-fast abort
/// surfaces as an error instead.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// RFC 3339 timestamp from when the batch started.
    pub started_at: String,
    /// Files processed, in the order they ran.
    pub processed: Vec<ProcessedFile>,
}

impl BatchReport {
    pub(crate) fn new() -> Self {
        Self {
            started_at: chrono::Local::now().to_rfc3339(),
            processed: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, source: PathBuf, output: PathBuf) {
        self.processed.push(ProcessedFile { source, output });
    }

    /// Number of files processed.
    pub fn len(&self) -> usize {
        self.processed.len()
    }

    /// Whether the batch matched no files at all.
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}
