//! ffmpeg audio-removal command builder.
//!
//! The argument layout is fixed: keep every video and subtitle stream,
//! drop the first audio stream, keep the second, and stream-copy all
//! kept tracks. Stream selection is never derived from probe output.

use std::path::{Path, PathBuf};

/// Builder for the audio-removal ffmpeg invocation.
///
/// Generates the argument tokens for one source file; the program name
/// is not included.
pub struct StripCommand<'a> {
    source: &'a Path,
    target_dir: &'a Path,
}

impl<'a> StripCommand<'a> {
    /// Create a builder for `source`, writing into `target_dir`.
    pub fn new(source: &'a Path, target_dir: &'a Path) -> Self {
        Self { source, target_dir }
    }

    /// Output file path: the source file name joined onto the target
    /// directory. Collisions are left to ffmpeg.
    pub fn output_path(&self) -> PathBuf {
        let name = self.source.file_name().unwrap_or_default();
        self.target_dir.join(name)
    }

    /// Build the complete argument tokens.
    pub fn build(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        tokens.push("-i".to_string());
        tokens.push(self.source.to_string_lossy().to_string());

        self.add_stream_selection(&mut tokens);
        self.add_codec_copy(&mut tokens);

        tokens.push(self.output_path().to_string_lossy().to_string());

        tokens
    }

    /// Keep all video and subtitle streams, drop audio 0, keep audio 1.
    fn add_stream_selection(&self, tokens: &mut Vec<String>) {
        for arg in ["-map", "0:v", "-map", "0:s", "-map", "-0:a:0", "-map", "0:a:1"] {
            tokens.push(arg.to_string());
        }
    }

    /// Stream-copy every kept track.
    fn add_codec_copy(&self, tokens: &mut Vec<String>) {
        for arg in ["-c:v", "copy", "-c:a", "copy", "-c:s", "copy"] {
            tokens.push(arg.to_string());
        }
    }
}
