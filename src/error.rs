//! Error classification for the engine (spec.md §7).
//!
//! The engine distinguishes three kinds of problem: caller errors (surfaced
//! immediately), recoverable per-region issues (skipped silently — these
//! are not represented as errors at all, see below), and internal
//! invariant violations (never expected, fatal to the invocation).

use thiserror::Error;

/// Errors the engine can return from [`crate::orchestrator::compare`].
///
/// Recoverable per-region issues (an absent optional header/footer, a
/// zero-row table) have no variant here by design: the orchestrator's
/// region loop treats absence as an empty list and continues, rather than
/// raising and catching an error for something that is not a failure
/// (spec.md §7).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedlineError {
    /// The caller supplied an input shape the engine cannot work with —
    /// e.g. a document view that fails its own contract. Surfaced
    /// immediately; no partial output is produced.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A self-check inside the engine failed: a round-trip projection
    /// didn't reproduce its source text, or statistics didn't balance
    /// against the emitted segment stream. This indicates an engine bug,
    /// never a problem with the input, and must never be masked.
    #[error("internal invariant violation: {0}")]
    InvariantViolation(String),
}
