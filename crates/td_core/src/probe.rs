//! Stream inspection via ffprobe.
//!
//! Inspection output stays opaque text end to end. [`parse_streams`] is
//! a separate pass for callers that want the per-stream summary; nothing
//! here feeds back into command assembly.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::commands::{InspectCommand, FFPROBE};
use crate::process::{CommandRunner, ProcessError};

/// Errors from the inspection pass.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{0}")]
    Process(#[from] ProcessError),

    #[error("Failed to parse stream info: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// One stream as reported by ffprobe.
///
/// Only the entries the inspection command asks for are modeled; the
/// summary is display material, never an input to stream selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    /// Stream index within the container.
    pub index: u32,
    /// Codec type (`video`, `audio`, `subtitle`, ...) when reported.
    pub codec_type: Option<String>,
    /// Language tag when the stream carries one.
    pub language: Option<String>,
}

impl fmt::Display for StreamSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codec = self.codec_type.as_deref().unwrap_or("unknown");
        match self.language.as_deref() {
            Some(lang) => write!(f, "#{} {} [{}]", self.index, codec, lang),
            None => write!(f, "#{} {}", self.index, codec),
        }
    }
}

/// Wire format of the ffprobe JSON we ask for.
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    index: u32,
    #[serde(default)]
    codec_type: Option<String>,
    #[serde(default)]
    tags: Option<ProbeTags>,
}

#[derive(Debug, Deserialize)]
struct ProbeTags {
    #[serde(default)]
    language: Option<String>,
}

/// Raw ffprobe output for one file.
///
/// A probe that runs but exits non-zero yields an empty string; only a
/// failed spawn is an error.
pub fn inspect_file(runner: &dyn CommandRunner, source: &Path) -> ProbeResult<String> {
    let args = InspectCommand::new(source).build();
    let output = runner.run(FFPROBE, &args)?;

    if !output.success() {
        tracing::warn!(
            "ffprobe exited with code {} for {}",
            output.exit_code,
            source.display()
        );
        return Ok(String::new());
    }

    Ok(output.stdout)
}

/// Raw ffprobe output for every file, in input order.
pub fn inspect_files(
    runner: &dyn CommandRunner,
    sources: &[PathBuf],
) -> ProbeResult<Vec<String>> {
    let mut results = Vec::with_capacity(sources.len());
    for source in sources {
        results.push(inspect_file(runner, source)?);
    }
    Ok(results)
}

/// Parse raw inspection text into per-stream summaries.
///
/// Empty text parses to an empty list, pairing with the empty-string
/// convention of [`inspect_file`].
pub fn parse_streams(raw: &str) -> ProbeResult<Vec<StreamSummary>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let output: ProbeOutput = serde_json::from_str(raw)?;
    Ok(output
        .streams
        .into_iter()
        .map(|s| StreamSummary {
            index: s.index,
            codec_type: s.codec_type,
            language: s.tags.and_then(|t| t.language),
        })
        .collect())
}
