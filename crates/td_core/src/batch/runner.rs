//! Sequential fail-fast strip pass.

use std::path::Path;

use crate::commands::{StripCommand, FFMPEG};
use crate::config::Config;
use crate::discovery;
use crate::process::CommandRunner;

use super::errors::{BatchError, BatchResult};
use super::report::BatchReport;

/// Run the audio-removal pass over every matching file in the source
/// directory.
///
/// Files are processed one at a time in discovery order; each child
/// process is drained before the next starts. The first file ffmpeg
/// rejects aborts the batch. An empty discovery is a successful batch of
/// zero files.
pub fn run_batch(config: &Config, runner: &dyn CommandRunner) -> BatchResult<BatchReport> {
    let files = discovery::list_video_files(config.source_dir(), config.extension_filter())?;

    tracing::info!(
        "Processing {} file(s) from {}",
        files.len(),
        config.source_dir().display()
    );

    let mut report = BatchReport::new();
    for file in files {
        strip_file(&file, config, runner, &mut report)?;
    }

    tracing::info!("Batch finished: {} file(s) processed", report.len());
    Ok(report)
}

/// Strip the first audio track from a single file.
fn strip_file(
    file: &Path,
    config: &Config,
    runner: &dyn CommandRunner,
    report: &mut BatchReport,
) -> BatchResult<()> {
    let file_name = file.file_name().unwrap_or_default().to_string_lossy();

    tracing::info!("Removing audio track 0 from {}", file_name);

    let target_dir = config.target_dir();
    let command = StripCommand::new(file, &target_dir);
    let output_path = command.output_path();

    let output = runner.run(FFMPEG, &command.build())?;

    if !output.success() {
        for line in output.stderr.lines() {
            tracing::error!("ffmpeg: {}", line);
        }
        return Err(BatchError::aborted(
            file_name,
            output.exit_code,
            output.stderr,
        ));
    }

    tracing::info!("Wrote {}", output_path.display());
    report.record(file.to_path_buf(), output_path);
    Ok(())
}
