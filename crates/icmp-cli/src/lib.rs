//! Library side of the `icmp-specgen` binary: logging setup and the run
//! pipeline.

pub mod logging;
pub mod pipeline;

pub use pipeline::{InputSource, OutputTarget, RunOptions, RunOutcome, run};
