use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trackdrop")]
#[command(version, about = "Batch audio-track removal for video directories")]
pub struct Cli {
    /// Path to config file (default: config.json above the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strip the first audio track from every matching file (default)
    Run,

    /// Print per-file stream info without touching anything
    Inspect {
        /// One parsed line per stream instead of raw JSON
        #[arg(long)]
        summary: bool,
    },
}
