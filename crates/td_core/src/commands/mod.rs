//! External tool command assembly.
//!
//! Builders produce argument vectors for ffmpeg/ffprobe; they never
//! spawn anything. The program name is carried separately so the process
//! runner can resolve it through the search-path override.

mod inspect;
mod strip;

pub use inspect::InspectCommand;
pub use strip::StripCommand;

/// Program name of the media processor.
pub const FFMPEG: &str = "ffmpeg";

/// Program name of the stream inspector.
pub const FFPROBE: &str = "ffprobe";
