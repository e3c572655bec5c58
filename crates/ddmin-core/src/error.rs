//! Fatal contract violations the engine can observe.
//!
//! None of these are recoverable: they indicate the oracle, splitter, or
//! iterator the caller supplied broke its contract. The engine never retries
//! or degrades gracefully around them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DdminError {
    /// The oracle returned something other than `PASS`/`FAIL`, or the
    /// mandatory assertion probe at the top of a run did not return `FAIL`.
    #[error("oracle contract violation: {detail}")]
    OracleContractViolation { detail: String },

    /// `split(n, k)` did not return exactly `k` contiguous, non-overlapping
    /// slices covering `[0, n)`.
    #[error("splitter contract violation for n={expected_n}, k={got_slices}: {detail}")]
    SplitterContractViolation {
        expected_n: usize,
        got_slices: usize,
        detail: String,
    },

    /// A subset/complement iterator yielded an index outside `[0, n)`.
    #[error("iterator yielded out-of-range index {index} for n={n}")]
    IteratorContractViolation { n: usize, index: usize },
}
