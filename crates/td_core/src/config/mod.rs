//! Configuration loading for TrackDrop.
//!
//! The config is a small JSON file with four required string keys. It is
//! read once at startup and never written back; a missing key makes the
//! whole file malformed. By default it lives at `config.json` one level
//! above the working directory.
//!
//! # Example
//!
//! ```no_run
//! use td_core::config;
//!
//! let config = config::load_default().unwrap();
//! println!("Source folder: {}", config.source_dir().display());
//! ```

mod loader;
mod settings;

pub use loader::{default_path, load, load_default, ConfigError, ConfigResult};
pub use settings::Config;
