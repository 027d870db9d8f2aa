//! Stage-level error taxonomy for the extraction pipeline.
//!
//! Every stage classifies its own failures into exactly two severities:
//!
//! - **Fatal**: the run cannot meaningfully continue (e.g. the target URL
//!   never loaded). The driver propagates these to the caller.
//! - **Recoverable**: the stage is abandoned but the pipeline proceeds with
//!   whatever state exists, producing a degraded but still-exported result.
//!
//! There are no automatic retries anywhere: a failure is either swallowed
//! and logged, or it ends the run.

use thiserror::Error;

/// A failure raised by one pipeline stage.
#[derive(Debug, Error)]
pub enum StageError {
    /// The run cannot continue. Propagated to the process exit path.
    #[error("fatal: {0}")]
    Fatal(String),
    /// The stage is abandoned; downstream stages still run.
    #[error("{0}")]
    Recoverable(String),
}

impl StageError {
    /// Whether this failure should end the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StageError::Fatal(_))
    }
}
