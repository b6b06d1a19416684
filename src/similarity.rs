//! Similarity scorer: a hybrid of word-set Jaccard and character-sequence
//! ratio (spec.md §4.2, ≈5% of budget).
//!
//! Jaccard handles paragraph reorderings with heavy word overlap; the
//! sequence ratio handles short edits (e.g. a single changed number) where
//! the set-based score collapses. Taking the max combines the strengths
//! without tuning weights.

use similar::{Algorithm, TextDiff};
use std::collections::HashSet;

/// Returns a similarity score in `[0, 1]` between `a` and `b`.
///
/// - `1.0` if byte-identical, or if both are empty after trimming.
/// - `0.0` if exactly one is empty after trimming.
/// - Otherwise `max(jaccard, seq_ratio)`, see module docs.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let ta = a.trim();
    let tb = b.trim();
    if ta.is_empty() && tb.is_empty() {
        return 1.0;
    }
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    jaccard(ta, tb).max(seq_ratio(ta, tb))
}

/// Word-set Jaccard similarity: `|W(a) ∩ W(b)| / |W(a) ∪ W(b)|` over
/// lowercased whitespace-separated tokens. `0.0` if either set is empty.
fn jaccard(a: &str, b: &str) -> f64 {
    let words_a: HashSet<String> = a.split_whitespace().map(|w| w.to_lowercase()).collect();
    let words_b: HashSet<String> = b.split_whitespace().map(|w| w.to_lowercase()).collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    intersection as f64 / union as f64
}

/// Character-sequence ratio: `2*M / (len(a) + len(b))`, where `M` is the
/// total length of matched blocks from a greedy longest-matching-block
/// decomposition — the same definition `difflib.SequenceMatcher.ratio()`
/// uses. Delegates to the `similar` crate's character diff rather than
/// hand-rolling the sequence matcher.
fn seq_ratio(a: &str, b: &str) -> f64 {
    let la = a.to_lowercase();
    let lb = b.to_lowercase();
    TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(&la, &lb)
        .ratio() as f64
}
