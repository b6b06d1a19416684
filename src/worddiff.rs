//! Word differ: LCS-style diff over token streams (spec.md §4.3, ≈12% of
//! budget).
//!
//! Tokenizes both texts and runs `similar`'s Myers diff (an LCS-based
//! shortest-edit-script algorithm) over the token slices. `similar` already
//! groups a "replace" region as a deletion run immediately followed by an
//! insertion run — never interleaved — so folding `iter_all_changes()` by
//! tag is sufficient to satisfy the round-trip property without a custom
//! opcode walk.

use crate::model::{Segment, SegmentKind};
use crate::token::tokenize;
use similar::{Algorithm, ChangeTag, TextDiff};

/// Compute a word-level diff between `orig_text` and `mod_text`.
///
/// Round-trip property: concatenating the `Equal`/`Delete` segments'
/// text reproduces `orig_text`; concatenating `Equal`/`Insert` reproduces
/// `mod_text` (spec.md §4.3). Empty-text segments are elided.
pub fn diff_words(orig_text: &str, mod_text: &str) -> Vec<Segment> {
    let orig_tokens = tokenize(orig_text);
    let mod_tokens = tokenize(mod_text);
    let orig_strs: Vec<&str> = orig_tokens.iter().map(|t| t.text).collect();
    let mod_strs: Vec<&str> = mod_tokens.iter().map(|t| t.text).collect();

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(&orig_strs, &mod_strs);

    let mut segments: Vec<Segment> = Vec::new();
    let mut current_kind: Option<ChangeTag> = None;
    let mut current_text = String::new();

    for change in diff.iter_all_changes() {
        let tag = change.tag();
        if current_kind == Some(tag) {
            current_text.push_str(change.value());
        } else {
            flush(&mut segments, current_kind, &mut current_text);
            current_kind = Some(tag);
            current_text.push_str(change.value());
        }
    }
    flush(&mut segments, current_kind, &mut current_text);

    segments
}

fn flush(segments: &mut Vec<Segment>, kind: Option<ChangeTag>, text: &mut String) {
    if let Some(tag) = kind {
        if !text.is_empty() {
            segments.push(Segment::new(std::mem::take(text), segment_kind(tag)));
        } else {
            text.clear();
        }
    }
}

fn segment_kind(tag: ChangeTag) -> SegmentKind {
    match tag {
        ChangeTag::Equal => SegmentKind::Equal,
        ChangeTag::Delete => SegmentKind::Delete,
        ChangeTag::Insert => SegmentKind::Insert,
    }
}

/// Project a segment stream back to one side's text, keeping only the
/// kinds that belong to that projection (spec.md §3 round-trip invariant).
pub fn project(segments: &[Segment], keep: &[SegmentKind]) -> String {
    segments
        .iter()
        .filter(|s| keep.contains(&s.kind))
        .map(|s| s.text.as_str())
        .collect()
}
