//! Batch orchestration.
//!
//! Wires discovery, command assembly and the process runner into the
//! sequential strip pass. The pass is fail-fast: the first file the tool
//! rejects aborts the whole run, and the files after it are never
//! touched.

mod errors;
mod report;
mod runner;

pub use errors::{BatchError, BatchResult};
pub use report::{BatchReport, ProcessedFile};
pub use runner::run_batch;
