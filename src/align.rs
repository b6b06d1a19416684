//! Paragraph aligner: LCS dynamic programming with the similarity scorer
//! as the fuzzy equality oracle (spec.md §4.5, ≈20% of budget).
//!
//! The same routine aligns table rows (spec.md §4.6 step 4) by passing a
//! row-proxy string (cells joined by `" | "`) instead of paragraph text —
//! grounded in `compare_it::compare_structured`'s row-comparison style,
//! generalized from CSV key-matching to LCS-with-fuzzy-equality.

use log::trace;

use crate::model::AlignmentRecord;
use crate::similarity::similarity;

/// Align two ordered lists of proxy strings (`orig`, `modified`) using
/// classic LCS backtracking, treating two entries as "equal" when
/// `similarity(a, b) >= threshold` (spec.md §4.5).
///
/// The DP table memoizes every scorer call made during the fill; the
/// backtrack phase re-consults the same cells rather than re-scoring
/// (spec.md §9 "Similarity scorer caching" — a pure optimization that must
/// not change results, since backtrack re-evaluates the identical
/// similarity predicate the fill already computed).
pub fn align(orig: &[String], modified: &[String], threshold: f64) -> Vec<AlignmentRecord> {
    let m = orig.len();
    let n = modified.len();
    trace!("aligning {m} x {n} entries at threshold {threshold}");

    // sim_cache[i][j] memoizes similarity(orig[i], modified[j]) for i in
    // 0..m, j in 0..n, computed lazily as the fill sweeps the table.
    let mut sim_cache: Vec<Vec<Option<bool>>> = vec![vec![None; n]; m];
    let mut is_similar = |i: usize, j: usize, sim_cache: &mut Vec<Vec<Option<bool>>>| -> bool {
        if let Some(v) = sim_cache[i][j] {
            return v;
        }
        let v = similarity(&orig[i], &modified[j]) >= threshold;
        sim_cache[i][j] = Some(v);
        v
    };

    // L[i][j]: LCS length of orig[0..i] and modified[0..j].
    let mut l = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            if is_similar(i - 1, j - 1, &mut sim_cache) {
                l[i][j] = l[i - 1][j - 1] + 1;
            } else {
                l[i][j] = l[i - 1][j].max(l[i][j - 1]);
            }
        }
    }

    let mut alignments = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && is_similar(i - 1, j - 1, &mut sim_cache) {
            alignments.push(AlignmentRecord::matched(i - 1, j - 1));
            i -= 1;
            j -= 1;
            continue;
        }

        // Favor treating an unmatched modified entry as an insertion on
        // ties — the deliberate tie-break policy of spec.md §4.5.
        if j > 0 && (i == 0 || l[i][j - 1] >= l[i - 1][j]) {
            alignments.push(AlignmentRecord::inserted(j - 1));
            j -= 1;
        } else {
            alignments.push(AlignmentRecord::deleted(i - 1));
            i -= 1;
        }
    }

    alignments.reverse();
    trace!("alignment produced {} records from {m} x {n}", alignments.len());
    alignments
}
