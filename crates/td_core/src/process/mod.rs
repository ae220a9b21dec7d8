//! External process execution.
//!
//! Everything that spawns a tool goes through the [`CommandRunner`]
//! seam, so the batch logic can be exercised with stub runners. The real
//! [`ToolRunner`] resolves tools through an explicit search-path
//! override instead of mutating the process environment.

mod runner;

pub use runner::{CommandOutput, CommandRunner, ProcessError, ProcessResult, ToolRunner};
