//! Move detector: greedily pairs delete/insert candidates whose normalized
//! text is mutually similar above a threshold (spec.md §4.4, ≈15% of
//! budget). Used both inside a single paragraph (word-level) and across
//! paragraph lists (paragraph-level) from the one generic procedure below.
//!
//! Grounded in `compare_it::match_files`'s `find_similarity_matches`:
//! scan unused candidates, keep the best-scoring one, mark it used.

use log::trace;

use crate::model::{Segment, SegmentKind};
use crate::similarity::similarity;

/// Default minimum whitespace-token count for a delete/insert to be
/// eligible for move detection.
pub const MIN_MOVE_WORDS: usize = 3;
/// Default similarity threshold above which a delete/insert pair is
/// treated as a move.
pub const MOVE_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Normalize text for move comparison: lowercase, trim, collapse internal
/// whitespace to a single space.
pub fn normalize_for_move(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Greedily pair indices from `deletes` with indices from `inserts` by
/// normalized-text similarity, longest deletion first. Returns a mapping
/// `delete_index -> insert_index` into the slices passed in. Both slices
/// are candidate *texts* only (callers supply whatever "index" they want
/// paired back by providing parallel index lists); `min_words` and
/// `threshold` are the two configurable knobs (spec.md §6).
///
/// This one function serves both the word-level variant (candidates are
/// segments within one paragraph) and the paragraph-level variant
/// (candidates are whole held-aside paragraphs) per spec.md §4.4.
pub fn match_moves(
    delete_texts: &[&str],
    insert_texts: &[&str],
    min_words: usize,
    threshold: f64,
) -> std::collections::HashMap<usize, usize> {
    let mut deletions: Vec<(usize, String)> = delete_texts
        .iter()
        .enumerate()
        .filter(|(_, t)| word_count(t) >= min_words)
        .map(|(i, t)| (i, normalize_for_move(t)))
        .collect();

    let insertions: Vec<(usize, String)> = insert_texts
        .iter()
        .enumerate()
        .filter(|(_, t)| word_count(t) >= min_words)
        .map(|(i, t)| (i, normalize_for_move(t)))
        .collect();

    let mut pairs = std::collections::HashMap::new();
    if deletions.is_empty() || insertions.is_empty() {
        return pairs;
    }

    // Longer deletions first: more confident matches win (spec.md §4.4 step 4).
    deletions.sort_by(|a, b| word_count(&b.1).cmp(&word_count(&a.1)));

    let mut used: std::collections::HashSet<usize> = std::collections::HashSet::new();

    for (del_idx, del_norm) in &deletions {
        let mut best: Option<(usize, f64)> = None;
        for (ins_idx, ins_norm) in &insertions {
            if used.contains(ins_idx) {
                continue;
            }
            let sim = similarity(del_norm, ins_norm);
            if sim >= threshold {
                match best {
                    Some((_, best_sim)) if sim <= best_sim => {}
                    _ => best = Some((*ins_idx, sim)),
                }
            }
        }
        if let Some((ins_idx, sim)) = best {
            trace!("move candidate: delete[{del_idx}] -> insert[{ins_idx}] (similarity {sim:.3})");
            pairs.insert(*del_idx, ins_idx);
            used.insert(ins_idx);
        }
    }

    pairs
}

/// Word-level move detection over one paragraph's word-diff segments
/// (spec.md §4.4). Rewrites paired `Delete`/`Insert` segments to
/// `MoveSource`/`MoveDest`; all other segments pass through unchanged.
pub fn detect_moves(segments: Vec<Segment>) -> Vec<Segment> {
    let delete_texts: Vec<&str> = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Delete)
        .map(|s| s.text.as_str())
        .collect();
    let insert_texts: Vec<&str> = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Insert)
        .map(|s| s.text.as_str())
        .collect();

    if delete_texts.is_empty() || insert_texts.is_empty() {
        return segments;
    }

    // Map "nth delete"/"nth insert" back to absolute segment indices.
    let delete_positions: Vec<usize> = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.kind == SegmentKind::Delete)
        .map(|(i, _)| i)
        .collect();
    let insert_positions: Vec<usize> = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.kind == SegmentKind::Insert)
        .map(|(i, _)| i)
        .collect();

    let pairs = match_moves(
        &delete_texts,
        &insert_texts,
        MIN_MOVE_WORDS,
        MOVE_SIMILARITY_THRESHOLD,
    );

    if pairs.is_empty() {
        return segments;
    }

    let mut move_source_at: std::collections::HashSet<usize> = std::collections::HashSet::new();
    let mut move_dest_at: std::collections::HashSet<usize> = std::collections::HashSet::new();
    for (&del_nth, &ins_nth) in &pairs {
        move_source_at.insert(delete_positions[del_nth]);
        move_dest_at.insert(insert_positions[ins_nth]);
    }

    segments
        .into_iter()
        .enumerate()
        .map(|(i, mut s)| {
            if move_source_at.contains(&i) {
                s.kind = SegmentKind::MoveSource;
            } else if move_dest_at.contains(&i) {
                s.kind = SegmentKind::MoveDest;
            }
            s
        })
        .collect()
}
