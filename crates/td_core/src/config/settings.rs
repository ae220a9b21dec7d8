//! Configuration schema.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
///
/// All four keys are required and there are no defaults. Extra keys in
/// the file are ignored. Loaded once at startup; never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the ffmpeg and ffprobe executables.
    ffmpeg_dir: String,
    /// Directory scanned for input video files.
    source_dir: String,
    /// Directory the processed files are written to.
    target_dir: String,
    /// Extension (no leading dot) input files must carry.
    file_extension_filter: String,
}

impl Config {
    /// Build a config from explicit values.
    ///
    /// Normal startup goes through [`load`](super::load); this is for
    /// tests and embedding callers.
    pub fn new(
        ffmpeg_dir: impl Into<String>,
        source_dir: impl Into<String>,
        target_dir: impl Into<String>,
        file_extension_filter: impl Into<String>,
    ) -> Self {
        Self {
            ffmpeg_dir: ffmpeg_dir.into(),
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            file_extension_filter: file_extension_filter.into(),
        }
    }

    /// Directory the external tools are resolved from first.
    pub fn ffmpeg_dir(&self) -> PathBuf {
        PathBuf::from(&self.ffmpeg_dir)
    }

    /// Directory scanned for input files.
    pub fn source_dir(&self) -> PathBuf {
        PathBuf::from(&self.source_dir)
    }

    /// Directory output files are written to.
    pub fn target_dir(&self) -> PathBuf {
        PathBuf::from(&self.target_dir)
    }

    /// Extension input files must carry, without the leading dot.
    pub fn extension_filter(&self) -> &str {
        &self.file_extension_filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_all_fields() {
        let config: Config = serde_json::from_str(
            r#"{
                "ffmpeg_dir": "/opt/ffmpeg/bin",
                "source_dir": "/media/in",
                "target_dir": "/media/out",
                "file_extension_filter": "mkv"
            }"#,
        )
        .unwrap();

        assert_eq!(config.ffmpeg_dir(), PathBuf::from("/opt/ffmpeg/bin"));
        assert_eq!(config.source_dir(), PathBuf::from("/media/in"));
        assert_eq!(config.target_dir(), PathBuf::from("/media/out"));
        assert_eq!(config.extension_filter(), "mkv");
    }

    #[test]
    fn missing_key_is_rejected() {
        let result: Result<Config, _> = serde_json::from_str(
            r#"{
                "ffmpeg_dir": "/opt/ffmpeg/bin",
                "target_dir": "/media/out",
                "file_extension_filter": "mkv"
            }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: Config = serde_json::from_str(
            r#"{
                "ffmpeg_dir": "/opt/ffmpeg/bin",
                "source_dir": "/media/in",
                "target_dir": "/media/out",
                "file_extension_filter": "mkv",
                "comment": "scratch setup"
            }"#,
        )
        .unwrap();

        assert_eq!(config.extension_filter(), "mkv");
    }
}
