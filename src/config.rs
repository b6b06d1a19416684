//! Engine configuration (spec.md §6). No persisted state, no wire
//! protocol, no environment variables at the engine boundary — this is a
//! plain struct the orchestrator reads once per invocation.

/// Tunable thresholds and knobs for a single [`crate::orchestrator::compare`]
/// call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Paragraphs are treated as "the same" for alignment purposes when
    /// their similarity is at least this value. Lower admits looser
    /// matches (may misalign unrelated paragraphs); higher makes most
    /// paragraphs insert/delete rather than match. Default `0.4`.
    pub paragraph_similarity_threshold: f64,

    /// Delete/insert pairs are treated as a move when their normalized
    /// similarity is at least this value. Default `0.85`.
    pub move_similarity_threshold: f64,

    /// Minimum whitespace-token count for a delete/insert to be eligible
    /// for move detection. Default `3`.
    pub min_move_words: usize,

    /// Threshold used when aligning table rows by their concatenated-cell
    /// proxy text. Default `0.4`.
    pub row_similarity_threshold: f64,

    /// Process independent regions (body, each table, each section's
    /// header/footer) concurrently with `rayon` and combine results by
    /// addition/merge (spec.md §5 "parallelism opportunities"). Disabled
    /// by default since correctness must not depend on it.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            paragraph_similarity_threshold: 0.4,
            move_similarity_threshold: 0.85,
            min_move_words: 3,
            row_similarity_threshold: 0.4,
            parallel: false,
        }
    }
}
