mod cli;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use td_core::config::{self, Config};
use td_core::process::ToolRunner;
use td_core::{batch, discovery, logging, probe};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let runner = ToolRunner::with_search_dir(config.ffmpeg_dir());

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_strip(&config, &runner),
        Commands::Inspect { summary } => inspect(&config, &runner, summary),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => config::load(path)?,
        None => config::load_default()?,
    };
    Ok(config)
}

/// Run the batch strip pass and report the outcome.
fn run_strip(config: &Config, runner: &ToolRunner) -> Result<()> {
    let report = batch::run_batch(config, runner)?;

    tracing::info!(
        "Done: {} file(s) written to {}",
        report.len(),
        config.target_dir().display()
    );
    Ok(())
}

/// Print stream info for every matching file.
///
/// Raw JSON by default; `--summary` prints the parsed one-line-per-stream
/// form instead. A file the probe rejects prints nothing but its name.
fn inspect(config: &Config, runner: &ToolRunner, summary: bool) -> Result<()> {
    let files = discovery::list_video_files(config.source_dir(), config.extension_filter())?;
    let raws = probe::inspect_files(runner, &files)?;

    for (file, raw) in files.iter().zip(&raws) {
        println!("{}", file.display());

        if summary {
            for stream in probe::parse_streams(raw)? {
                println!("  {stream}");
            }
        } else if !raw.is_empty() {
            println!("{}", raw.trim_end());
        }
    }

    Ok(())
}
