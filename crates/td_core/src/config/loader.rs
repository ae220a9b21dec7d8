//! Config loading from disk.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::Config;

/// Errors that can occur while loading the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default config location: `config.json` in the parent of the working
/// directory. A working directory without a parent falls back to itself.
pub fn default_path() -> ConfigResult<PathBuf> {
    let cwd = env::current_dir()?;
    let base = cwd.parent().unwrap_or(cwd.as_path());
    Ok(base.join("config.json"))
}

/// Load the config from `path`.
///
/// The file must exist, parse as JSON and carry all four keys; nothing
/// is defaulted or written back.
pub fn load(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load the config from the default location.
pub fn load_default() -> ConfigResult<Config> {
    load(default_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const GOOD: &str = r#"{
        "ffmpeg_dir": "/opt/ffmpeg/bin",
        "source_dir": "/media/in",
        "target_dir": "/media/out",
        "file_extension_filter": "mkv"
    }"#;

    #[test]
    fn load_reads_valid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, GOOD).unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.extension_filter(), "mkv");
        assert_eq!(config.target_dir(), PathBuf::from("/media/out"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn missing_key_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "ffmpeg_dir": "/opt/ffmpeg/bin",
                "target_dir": "/media/out",
                "file_extension_filter": "mkv"
            }"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
        assert!(err.to_string().contains("source_dir"));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn default_path_points_at_parent() {
        let path = default_path().unwrap();
        let cwd = env::current_dir().unwrap();

        assert_eq!(path.file_name().unwrap(), "config.json");
        assert_eq!(path.parent(), cwd.parent().or(Some(cwd.as_path())));
    }
}
