//! ffprobe stream-inspection command builder.

use std::path::Path;

/// Builder for the stream-inspection ffprobe invocation.
///
/// The entry selection is fixed: stream index, codec type and language
/// tag, emitted as JSON. What happens to that text is the caller's
/// business.
pub struct InspectCommand<'a> {
    source: &'a Path,
}

impl<'a> InspectCommand<'a> {
    /// Create a builder for `source`.
    pub fn new(source: &'a Path) -> Self {
        Self { source }
    }

    /// Build the complete argument tokens.
    pub fn build(&self) -> Vec<String> {
        vec![
            "-v".to_string(),
            "error".to_string(),
            "-show_entries".to_string(),
            "stream=index,codec_type:stream_tags=language".to_string(),
            "-of".to_string(),
            "json".to_string(),
            self.source.to_string_lossy().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_fixed_argument_order() {
        let tokens = InspectCommand::new(Path::new("/media/in/Movie.mkv")).build();

        let expected: Vec<String> = [
            "-v",
            "error",
            "-show_entries",
            "stream=index,codec_type:stream_tags=language",
            "-of",
            "json",
            "/media/in/Movie.mkv",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(tokens, expected);
    }
}
