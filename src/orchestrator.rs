//! Comparison orchestrator (spec.md §4.6, ≈45% of budget).
//!
//! Consumes parsed originals and modifieds (paragraphs, tables, sections);
//! calls the aligner, differ, and move detector in a fixed order;
//! accumulates statistics; and emits an ordered stream of annotated
//! paragraphs/rows for the renderer.
//!
//! Data flow: parsed inputs -> aligner -> per-alignment branch (match ->
//! word differ -> word-level move detector; insert/delete held aside) ->
//! paragraph-level move detector over held-aside inserts/deletes ->
//! segment stream + stats.

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::align;
use crate::config::EngineConfig;
use crate::error::RedlineError;
use crate::model::{
    AlignmentKind, AlignmentRecord, AnnotatedParagraph, Cell, DocumentView, Paragraph, Segment,
    SegmentKind, SectionView, Statistics, Table,
};
use crate::moves;
use crate::worddiff;

/// One independent unit of comparison work: the body, one table pair, or
/// one section's header/footer region. Each job is self-contained so it
/// can run on any thread without shared mutable state.
type Job<'a> = Box<dyn Fn() -> Result<(Vec<AnnotatedParagraph>, Statistics), RedlineError> + Send + Sync + 'a>;

/// Result of a single `compare()` invocation: the ordered segment stream
/// plus aggregate statistics (spec.md §4.6).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonOutput {
    pub stream: Vec<AnnotatedParagraph>,
    pub stats: Statistics,
}

/// Compare two document views end to end: body paragraphs, tables, then
/// header/footer regions of each section, in that order (spec.md §4.6).
///
/// Per-region failures (a missing optional header, a zero-row table) are
/// never surfaced as errors — they are skipped because the region is
/// simply absent, not caught and discarded. Only an internal invariant
/// violation (round-trip or statistics mismatch) can make this return
/// `Err` (spec.md §7).
pub fn compare<D: DocumentView>(
    orig: &D,
    modified: &D,
    config: &EngineConfig,
) -> Result<ComparisonOutput, RedlineError> {
    let orig_paras = orig.paragraphs();
    let mod_paras = modified.paragraphs();
    let orig_tables = orig.tables();
    let mod_tables = modified.tables();
    let orig_sections = orig.sections();
    let mod_sections = modified.sections();

    debug!(
        "comparing {} -> {} body paragraphs, {} -> {} tables, {} -> {} sections (parallel={})",
        orig_paras.len(),
        mod_paras.len(),
        orig_tables.len(),
        mod_tables.len(),
        orig_sections.len(),
        mod_sections.len(),
        config.parallel
    );

    let mut jobs: Vec<Job<'_>> = Vec::new();

    // Step 1-3: body paragraphs, with paragraph-level move detection over
    // the held-aside inserts/deletes.
    jobs.push(Box::new(move || {
        compare_paragraph_region(&orig_paras, &mod_paras, config)
    }));

    // Step 4: tables, one job per table index.
    let max_tables = orig_tables.len().max(mod_tables.len());
    for idx in 0..max_tables {
        let ot = orig_tables.get(idx).cloned();
        let mt = mod_tables.get(idx).cloned();
        jobs.push(Box::new(move || compare_table_pair(ot.as_ref(), mt.as_ref(), config)));
    }

    // Step 5: header/footer regions, one job per section/region pair.
    // Absence on either side is skipped silently inside the job — this
    // never produces an error for a missing region.
    let section_count = orig_sections.len().min(mod_sections.len());
    for s in 0..section_count {
        let os = &orig_sections[s];
        let ms = &mod_sections[s];
        for (op, mp) in [
            (os.header(), ms.header()),
            (os.first_page_header(), ms.first_page_header()),
            (os.footer(), ms.footer()),
            (os.first_page_footer(), ms.first_page_footer()),
        ] {
            jobs.push(Box::new(move || compare_region_pair(&op, &mp, config)));
        }
    }

    // Parallelism is purely a scheduling choice (spec.md §5): jobs are
    // independent, and results are merged back in the fixed order the jobs
    // were created in, so enabling it cannot change the output.
    let results: Vec<Result<(Vec<AnnotatedParagraph>, Statistics), RedlineError>> = if config.parallel
    {
        jobs.into_par_iter().map(|job| job()).collect()
    } else {
        jobs.into_iter().map(|job| job()).collect()
    };

    let mut stream = Vec::new();
    let mut stats = Statistics::default();
    for result in results {
        let (region_stream, region_stats) = result?;
        stream.extend(region_stream);
        stats += region_stats;
    }

    // Step 6: internal self-checks. These must never be masked.
    if let Err(e) = verify_conservation(&stream, &stats) {
        warn!("internal invariant check failed: {e}");
        return Err(e);
    }
    if let Err(e) = verify_move_bijection(&stream) {
        warn!("internal invariant check failed: {e}");
        return Err(e);
    }

    debug!(
        "comparison produced {} annotated paragraphs/rows, stats={:?}",
        stream.len(),
        stats
    );

    Ok(ComparisonOutput { stream, stats })
}

/// Compare one table index where either side (but never both) may be
/// absent: whole-table insert/delete emits every row as a single
/// insert/delete segment (spec.md §4.6 step 4).
fn compare_table_pair(
    orig: Option<&Table>,
    modified: Option<&Table>,
    config: &EngineConfig,
) -> Result<(Vec<AnnotatedParagraph>, Statistics), RedlineError> {
    match (orig, modified) {
        (Some(ot), Some(mt)) => compare_table(ot, mt, config),
        (None, Some(mt)) => {
            let mut stream = Vec::new();
            let mut stats = Statistics::default();
            for row in &mt.rows {
                push_whole_row(&mut stream, &mut stats, row, SegmentKind::Insert);
            }
            Ok((stream, stats))
        }
        (Some(ot), None) => {
            let mut stream = Vec::new();
            let mut stats = Statistics::default();
            for row in &ot.rows {
                push_whole_row(&mut stream, &mut stats, row, SegmentKind::Delete);
            }
            Ok((stream, stats))
        }
        (None, None) => unreachable!("caller only calls this for an index present on one side"),
    }
}

/// Compare one header/footer region; absent on either side is skipped
/// silently (spec.md §4.6 step 5, §7).
fn compare_region_pair(
    orig: &[Paragraph],
    modified: &[Paragraph],
    config: &EngineConfig,
) -> Result<(Vec<AnnotatedParagraph>, Statistics), RedlineError> {
    if orig.is_empty() || modified.is_empty() {
        trace!(
            "skipping region: absent on {} side ({} orig paragraphs, {} mod paragraphs)",
            if orig.is_empty() { "original" } else { "modified" },
            orig.len(),
            modified.len()
        );
        return Ok((Vec::new(), Statistics::default()));
    }
    compare_paragraph_region(orig, modified, config)
}

fn push_whole_row(
    stream: &mut Vec<AnnotatedParagraph>,
    stats: &mut Statistics,
    row: &[Cell],
    kind: SegmentKind,
) {
    let text = row_text(row);
    let words = text.split_whitespace().count() as u64;
    stats.record(kind, words);
    stream.push(AnnotatedParagraph::new(
        vec![Segment::new(text, kind)],
        false,
        true,
    ));
}

fn row_text(row: &[Cell]) -> String {
    row.iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Compare one ordered paragraph list against another, including
/// paragraph-level move detection over the paragraphs that didn't align
/// as matches. Shared by the document body and every header/footer
/// region (spec.md §4.6 steps 1-3, §4.6 step 5).
fn compare_paragraph_region(
    orig_paras: &[Paragraph],
    mod_paras: &[Paragraph],
    config: &EngineConfig,
) -> Result<(Vec<AnnotatedParagraph>, Statistics), RedlineError> {
    let orig_texts: Vec<String> = orig_paras.iter().map(|p| p.text.clone()).collect();
    let mod_texts: Vec<String> = mod_paras.iter().map(|p| p.text.clone()).collect();
    let alignments = align::align(&orig_texts, &mod_texts, config.paragraph_similarity_threshold);

    struct Hold {
        text: String,
        is_heading: bool,
        is_insert: bool,
    }

    let mut finals: Vec<Option<AnnotatedParagraph>> = Vec::with_capacity(alignments.len());
    let mut holds: Vec<Option<Hold>> = Vec::with_capacity(alignments.len());

    for rec in &alignments {
        match rec.kind {
            AlignmentKind::Match => {
                let oi = rec.orig_idx.expect("match has orig_idx");
                let mi = rec.mod_idx.expect("match has mod_idx");
                let orig_text = &orig_paras[oi].text;
                let mod_text = &mod_paras[mi].text;
                let is_heading = mod_paras[mi].is_heading;
                let segments = word_level_diff_segments(orig_text, mod_text)?;
                finals.push(Some(AnnotatedParagraph::new(segments, is_heading, false)));
                holds.push(None);
            }
            AlignmentKind::Insert => {
                let mi = rec.mod_idx.expect("insert has mod_idx");
                let text = mod_paras[mi].text.clone();
                if text.trim().is_empty() {
                    continue;
                }
                let is_heading = mod_paras[mi].is_heading;
                finals.push(None);
                holds.push(Some(Hold {
                    text,
                    is_heading,
                    is_insert: true,
                }));
            }
            AlignmentKind::Delete => {
                let oi = rec.orig_idx.expect("delete has orig_idx");
                let text = orig_paras[oi].text.clone();
                if text.trim().is_empty() {
                    continue;
                }
                let is_heading = orig_paras[oi].is_heading;
                finals.push(None);
                holds.push(Some(Hold {
                    text,
                    is_heading,
                    is_insert: false,
                }));
            }
        }
    }

    // Paragraph-level move detection over the held-aside whole paragraphs
    // (spec.md §4.4 "paragraph-level variant").
    let delete_items: Vec<(usize, &str)> = holds
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            h.as_ref()
                .filter(|h| !h.is_insert)
                .map(|h| (i, h.text.as_str()))
        })
        .collect();
    let insert_items: Vec<(usize, &str)> = holds
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            h.as_ref()
                .filter(|h| h.is_insert)
                .map(|h| (i, h.text.as_str()))
        })
        .collect();

    let delete_texts: Vec<&str> = delete_items.iter().map(|(_, t)| *t).collect();
    let insert_texts: Vec<&str> = insert_items.iter().map(|(_, t)| *t).collect();

    let pairs = moves::match_moves(
        &delete_texts,
        &insert_texts,
        config.min_move_words,
        config.move_similarity_threshold,
    );

    let move_source_final: std::collections::HashSet<usize> =
        pairs.keys().map(|&del_pos| delete_items[del_pos].0).collect();
    let move_dest_final: std::collections::HashSet<usize> =
        pairs.values().map(|&ins_pos| insert_items[ins_pos].0).collect();

    for (i, hold) in holds.into_iter().enumerate() {
        if let Some(h) = hold {
            let kind = if move_source_final.contains(&i) {
                SegmentKind::MoveSource
            } else if move_dest_final.contains(&i) {
                SegmentKind::MoveDest
            } else if h.is_insert {
                SegmentKind::Insert
            } else {
                SegmentKind::Delete
            };
            finals[i] = Some(AnnotatedParagraph::new(
                vec![Segment::new(h.text, kind)],
                h.is_heading,
                false,
            ));
        }
    }

    let stream: Vec<AnnotatedParagraph> = finals.into_iter().map(|f| f.expect("every slot filled")).collect();

    let mut stats = Statistics::default();
    for para in &stream {
        for seg in &para.segments {
            stats.record(seg.kind, seg.word_count());
        }
    }

    Ok((stream, stats))
}

/// Word-level diff for one matched body paragraph (or header/footer
/// paragraph) pair, including the word-level move detector pass and the
/// "one side empty after trim" open question resolved per DESIGN.md:
/// treated as no change, counted against the non-empty side's word
/// count. That short-circuit is unreachable in practice here — a Match
/// alignment requires `similarity(orig, mod) >= threshold`, and
/// `similarity` returns `0.0` whenever exactly one side is empty after
/// trimming — but it documents the resolved open question and costs
/// nothing to keep. A trimmed-equal-and-empty pair (two aligned empty
/// paragraphs) emits no segment at all, per spec.md §3's "segment text
/// is never empty" invariant.
fn word_level_diff_segments(orig_text: &str, mod_text: &str) -> Result<Vec<Segment>, RedlineError> {
    let ot = orig_text.trim();
    let mt = mod_text.trim();

    if ot == mt {
        if ot.is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![Segment::new(mod_text.to_string(), SegmentKind::Equal)]);
    }
    if ot.is_empty() || mt.is_empty() {
        let text = if mt.is_empty() { orig_text } else { mod_text };
        return Ok(vec![Segment::new(text.to_string(), SegmentKind::Equal)]);
    }

    diff_and_verify_round_trip(orig_text, mod_text)
}

/// Word-level diff for one matched table-cell pair (spec.md §4.6 step
/// 4). Unlike a body paragraph match, a cell pair's alignment is keyed
/// off the whole *row*'s proxy text, so a single cell can legitimately
/// have one side empty after trimming — a row gained or lost a value in
/// that column. That must surface as an insert/delete on the
/// gained/lost side (as the original `diff_texts` does), not as a no-op
/// Equal, so this does not take the body paragraph's empty-side
/// short-circuit and always falls through to the word differ instead.
/// A trimmed-equal-and-empty cell pair (both sides blank) still emits no
/// segment, same as the body-paragraph case.
fn diff_table_cell_segments(orig_text: &str, mod_text: &str) -> Result<Vec<Segment>, RedlineError> {
    let ot = orig_text.trim();
    let mt = mod_text.trim();

    if ot == mt {
        if ot.is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![Segment::new(mod_text.to_string(), SegmentKind::Equal)]);
    }

    diff_and_verify_round_trip(orig_text, mod_text)
}

fn diff_and_verify_round_trip(orig_text: &str, mod_text: &str) -> Result<Vec<Segment>, RedlineError> {
    let diffed = worddiff::diff_words(orig_text, mod_text);
    let with_moves = moves::detect_moves(diffed);
    if let Err(e) = verify_round_trip(&with_moves, orig_text, mod_text) {
        warn!("internal invariant check failed: {e}");
        return Err(e);
    }
    Ok(with_moves)
}

fn verify_round_trip(
    segments: &[Segment],
    orig_text: &str,
    mod_text: &str,
) -> Result<(), RedlineError> {
    let orig_proj = worddiff::project(
        segments,
        &[SegmentKind::Equal, SegmentKind::Delete, SegmentKind::MoveSource],
    );
    if orig_proj != orig_text {
        return Err(RedlineError::InvariantViolation(format!(
            "round-trip to original text failed: expected {orig_text:?}, got {orig_proj:?}"
        )));
    }

    let mod_proj = worddiff::project(
        segments,
        &[SegmentKind::Equal, SegmentKind::Insert, SegmentKind::MoveDest],
    );
    if mod_proj != mod_text {
        return Err(RedlineError::InvariantViolation(format!(
            "round-trip to modified text failed: expected {mod_text:?}, got {mod_proj:?}"
        )));
    }

    Ok(())
}

fn verify_conservation(stream: &[AnnotatedParagraph], stats: &Statistics) -> Result<(), RedlineError> {
    let total_words: u64 = stream
        .iter()
        .flat_map(|p| p.segments.iter())
        .map(|s| s.word_count())
        .sum();
    if stats.total() != total_words {
        return Err(RedlineError::InvariantViolation(format!(
            "statistics ({}) do not balance against emitted segment word count ({total_words})",
            stats.total()
        )));
    }
    Ok(())
}

fn verify_move_bijection(stream: &[AnnotatedParagraph]) -> Result<(), RedlineError> {
    let sources = stream
        .iter()
        .flat_map(|p| p.segments.iter())
        .filter(|s| s.kind == SegmentKind::MoveSource)
        .count();
    let dests = stream
        .iter()
        .flat_map(|p| p.segments.iter())
        .filter(|s| s.kind == SegmentKind::MoveDest)
        .count();
    if sources != dests {
        return Err(RedlineError::InvariantViolation(format!(
            "move_source count ({sources}) does not match move_dest count ({dests})"
        )));
    }
    Ok(())
}

/// Align table rows by their concatenated-cell proxy text, diff matched
/// rows cell by cell, and emit whole-row segments for inserted/deleted
/// rows (spec.md §4.6 step 4).
fn compare_table(
    orig: &Table,
    modified: &Table,
    config: &EngineConfig,
) -> Result<(Vec<AnnotatedParagraph>, Statistics), RedlineError> {
    let orig_proxies: Vec<String> = orig.rows.iter().map(|r| row_text(r)).collect();
    let mod_proxies: Vec<String> = modified.rows.iter().map(|r| row_text(r)).collect();
    let alignments: Vec<AlignmentRecord> =
        align::align(&orig_proxies, &mod_proxies, config.row_similarity_threshold);

    let mut stream = Vec::new();
    let mut stats = Statistics::default();

    for rec in alignments {
        match rec.kind {
            AlignmentKind::Match => {
                let oi = rec.orig_idx.expect("match has orig_idx");
                let mi = rec.mod_idx.expect("match has mod_idx");
                let orow = &orig.rows[oi];
                let mrow = &modified.rows[mi];
                let max_cols = orow.len().max(mrow.len());

                let mut segments = Vec::new();
                for col in 0..max_cols {
                    match (orow.get(col), mrow.get(col)) {
                        (Some(oc), Some(mc)) => {
                            segments.extend(diff_table_cell_segments(&oc.text, &mc.text)?);
                        }
                        (None, Some(mc)) => segments.push(Segment::new(mc.text.clone(), SegmentKind::Insert)),
                        (Some(oc), None) => segments.push(Segment::new(oc.text.clone(), SegmentKind::Delete)),
                        (None, None) => unreachable!("col < max(len, len) guarantees at least one side"),
                    }
                    if col + 1 < max_cols {
                        segments.push(Segment::new(" | ", SegmentKind::Equal));
                    }
                }

                for s in &segments {
                    stats.record(s.kind, s.word_count());
                }
                stream.push(AnnotatedParagraph::new(segments, false, true));
            }
            AlignmentKind::Insert => {
                let mi = rec.mod_idx.expect("insert has mod_idx");
                push_whole_row(&mut stream, &mut stats, &modified.rows[mi], SegmentKind::Insert);
            }
            AlignmentKind::Delete => {
                let oi = rec.orig_idx.expect("delete has orig_idx");
                push_whole_row(&mut stream, &mut stats, &orig.rows[oi], SegmentKind::Delete);
            }
        }
    }

    Ok((stream, stats))
}

/// Trivial `DocumentView`/`SectionView` implementation useful for tests
/// and for adapters that have no sections at all.
#[derive(Debug, Clone, Default)]
pub struct NoSections;
impl SectionView for NoSections {}

/// A minimal in-memory `DocumentView` for constructing test fixtures and
/// for embedding by real adapters.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument<S: SectionView = NoSections> {
    pub paragraphs: Vec<Paragraph>,
    pub tables: Vec<Table>,
    pub sections: Vec<S>,
}

impl<S: SectionView + Clone> DocumentView for MemoryDocument<S> {
    type Section = S;

    fn paragraphs(&self) -> Vec<Paragraph> {
        self.paragraphs.clone()
    }
    fn tables(&self) -> Vec<Table> {
        self.tables.clone()
    }
    fn sections(&self) -> Vec<S> {
        self.sections.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(paragraphs: &[(&str, bool)]) -> MemoryDocument {
        MemoryDocument {
            paragraphs: paragraphs
                .iter()
                .map(|(t, h)| Paragraph::new(*t, *h))
                .collect(),
            tables: Vec::new(),
            sections: Vec::new(),
        }
    }

    #[test]
    fn pure_insertion_scenario() {
        let orig = doc(&[("Hello world.", false)]);
        let modified = doc(&[("Hello world.", false), ("New line.", false)]);
        let cfg = EngineConfig::default();

        let out = compare(&orig, &modified, &cfg).unwrap();
        assert_eq!(out.stream.len(), 2);
        assert_eq!(out.stream[0].segments[0].kind, SegmentKind::Equal);
        assert_eq!(out.stream[1].segments[0].kind, SegmentKind::Insert);
        assert_eq!(out.stats.insertions, 2);
        assert_eq!(out.stats.unchanged, 2);
    }

    #[test]
    fn pure_deletion_scenario() {
        let orig = doc(&[("Keep.", false), ("Drop this.", false)]);
        let modified = doc(&[("Keep.", false)]);
        let cfg = EngineConfig::default();

        let out = compare(&orig, &modified, &cfg).unwrap();
        assert_eq!(out.stats.deletions, 2);
        assert_eq!(out.stats.unchanged, 1);
    }

    #[test]
    fn word_level_edit_scenario_round_trips() {
        let orig = doc(&[("The price is $50.", false)]);
        let modified = doc(&[("The price is $75.", false)]);
        let cfg = EngineConfig::default();

        let out = compare(&orig, &modified, &cfg).unwrap();
        assert_eq!(out.stream.len(), 1);
        let segs = &out.stream[0].segments;
        assert!(segs.iter().any(|s| s.kind == SegmentKind::Delete && s.text.contains("$50")));
        assert!(segs.iter().any(|s| s.kind == SegmentKind::Insert && s.text.contains("$75")));
    }

    #[test]
    fn paragraph_level_move_scenario() {
        let orig = doc(&[
            ("A sentence that will relocate to the bottom.", false),
            ("Middle.", false),
            ("End.", false),
        ]);
        let modified = doc(&[
            ("Middle.", false),
            ("End.", false),
            ("A sentence that will relocate to the bottom.", false),
        ]);
        let cfg = EngineConfig::default();

        let out = compare(&orig, &modified, &cfg).unwrap();
        let move_sources: Vec<_> = out
            .stream
            .iter()
            .flat_map(|p| &p.segments)
            .filter(|s| s.kind == SegmentKind::MoveSource)
            .collect();
        let move_dests: Vec<_> = out
            .stream
            .iter()
            .flat_map(|p| &p.segments)
            .filter(|s| s.kind == SegmentKind::MoveDest)
            .collect();
        assert_eq!(move_sources.len(), 1);
        assert_eq!(move_dests.len(), 1);
        assert_eq!(out.stats.moves, 16);
        assert_eq!(out.stats.unchanged, 2);
    }

    #[test]
    fn word_level_move_inside_one_paragraph_scenario() {
        let orig = doc(&[("Alpha beta gamma delta epsilon zeta.", false)]);
        let modified = doc(&[("Delta epsilon zeta alpha beta gamma.", false)]);
        let cfg = EngineConfig::default();

        let out = compare(&orig, &modified, &cfg).unwrap();
        let segs = &out.stream[0].segments;
        assert!(segs.iter().any(|s| s.kind == SegmentKind::MoveSource));
        assert!(segs.iter().any(|s| s.kind == SegmentKind::MoveDest));
    }

    #[test]
    fn table_row_insertion_scenario() {
        let make_row = |row_idx: usize, cells: &[&str]| -> Vec<Cell> {
            cells
                .iter()
                .enumerate()
                .map(|(c, t)| Cell::new(*t, row_idx, c))
                .collect()
        };

        let orig_table = Table::new(vec![
            make_row(0, &["Name", "Role"]),
            make_row(1, &["A", "Eng"]),
        ]);
        let mod_table = Table::new(vec![
            make_row(0, &["Name", "Role"]),
            make_row(1, &["A", "Eng"]),
            make_row(2, &["B", "PM"]),
        ]);

        let orig = MemoryDocument {
            paragraphs: Vec::new(),
            tables: vec![orig_table],
            sections: Vec::<NoSections>::new(),
        };
        let modified = MemoryDocument {
            paragraphs: Vec::new(),
            tables: vec![mod_table],
            sections: Vec::<NoSections>::new(),
        };
        let cfg = EngineConfig::default();

        let out = compare(&orig, &modified, &cfg).unwrap();
        let row_paras: Vec<_> = out.stream.iter().filter(|p| p.is_table_row).collect();
        assert_eq!(row_paras.len(), 3);
        assert!(row_paras[0].segments.iter().all(|s| s.kind == SegmentKind::Equal));
        assert!(row_paras[1].segments.iter().all(|s| s.kind == SegmentKind::Equal));
        assert_eq!(row_paras[2].segments[0].kind, SegmentKind::Insert);
    }

    #[test]
    fn matched_empty_paragraphs_emit_no_segment() {
        let segs = word_level_diff_segments("", "").unwrap();
        assert!(segs.is_empty());
    }

    #[test]
    fn matched_whitespace_only_paragraphs_emit_no_segment() {
        let segs = word_level_diff_segments("   ", "\t").unwrap();
        assert!(segs.is_empty());
    }

    #[test]
    fn matched_table_cell_gaining_a_value_emits_insert_not_equal() {
        let segs = diff_table_cell_segments("", "John Smith").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].kind, SegmentKind::Insert);
        assert_eq!(segs[0].text, "John Smith");
    }

    #[test]
    fn matched_table_cell_losing_a_value_emits_delete_not_equal() {
        let segs = diff_table_cell_segments("John Smith", "").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].kind, SegmentKind::Delete);
        assert_eq!(segs[0].text, "John Smith");
    }

    #[test]
    fn matched_table_cell_both_blank_emits_no_segment() {
        let segs = diff_table_cell_segments("", "").unwrap();
        assert!(segs.is_empty());
    }

    #[test]
    fn table_row_with_a_gained_cell_value_reports_insert_not_equal_end_to_end() {
        let make_row = |row_idx: usize, cells: &[&str]| -> Vec<Cell> {
            cells
                .iter()
                .enumerate()
                .map(|(c, t)| Cell::new(*t, row_idx, c))
                .collect()
        };

        let orig_table = Table::new(vec![make_row(0, &["Ada Lovelace", ""])]);
        let mod_table = Table::new(vec![make_row(0, &["Ada Lovelace", "Engineer"])]);

        let orig = MemoryDocument {
            paragraphs: Vec::new(),
            tables: vec![orig_table],
            sections: Vec::<NoSections>::new(),
        };
        let modified = MemoryDocument {
            paragraphs: Vec::new(),
            tables: vec![mod_table],
            sections: Vec::<NoSections>::new(),
        };
        let cfg = EngineConfig::default();

        let out = compare(&orig, &modified, &cfg).unwrap();
        let row = &out.stream[0];
        assert!(row
            .segments
            .iter()
            .any(|s| s.kind == SegmentKind::Insert && s.text == "Engineer"));
        assert!(!row
            .segments
            .iter()
            .any(|s| s.kind == SegmentKind::Equal && s.text == "Engineer"));
        assert_eq!(out.stats.insertions, 1);
    }

    #[test]
    fn identical_inputs_yield_all_equal_and_zeroed_change_counters() {
        let orig = doc(&[("Same paragraph.", false), ("Another one.", true)]);
        let cfg = EngineConfig::default();

        let out = compare(&orig, &orig.clone(), &cfg).unwrap();
        assert!(out
            .stream
            .iter()
            .all(|p| p.segments.iter().all(|s| s.kind == SegmentKind::Equal)));
        assert_eq!(out.stats.insertions, 0);
        assert_eq!(out.stats.deletions, 0);
        assert_eq!(out.stats.moves, 0);
    }

    #[test]
    fn empty_inputs_yield_empty_stream_and_zeroed_stats() {
        let orig = doc(&[]);
        let cfg = EngineConfig::default();
        let out = compare(&orig, &orig.clone(), &cfg).unwrap();
        assert!(out.stream.is_empty());
        assert_eq!(out.stats, Statistics::default());
    }

    #[test]
    fn determinism_equal_inputs_produce_equal_outputs() {
        let orig = doc(&[("Alpha beta gamma delta.", false), ("Unrelated line.", false)]);
        let modified = doc(&[("Alpha beta epsilon delta.", false), ("Different text now.", false)]);
        let cfg = EngineConfig::default();

        let out1 = compare(&orig, &modified, &cfg).unwrap();
        let out2 = compare(&orig, &modified, &cfg).unwrap();
        assert_eq!(out1.stream, out2.stream);
        assert_eq!(out1.stats, out2.stats);
    }

    #[test]
    fn raising_paragraph_threshold_to_one_limits_matches_to_exact_equal() {
        let orig = doc(&[("Line one.", false), ("Line two changed a bit.", false)]);
        let modified = doc(&[("Line one.", false), ("Line two changed a lot.", false)]);
        let mut cfg = EngineConfig::default();
        cfg.paragraph_similarity_threshold = 1.0;

        let out = compare(&orig, &modified, &cfg).unwrap();
        // Only the byte-identical paragraph should show as a match;
        // the other must surface as a delete/insert pair.
        let inserts_or_deletes = out
            .stream
            .iter()
            .filter(|p| {
                p.segments
                    .iter()
                    .any(|s| matches!(s.kind, SegmentKind::Insert | SegmentKind::Delete))
            })
            .count();
        assert!(inserts_or_deletes >= 1);
    }

    #[test]
    fn header_and_footer_regions_accumulate_into_shared_stats() {
        #[derive(Clone, Default)]
        struct Section {
            header: Vec<Paragraph>,
            footer: Vec<Paragraph>,
        }
        impl SectionView for Section {
            fn header(&self) -> Vec<Paragraph> {
                self.header.clone()
            }
            fn footer(&self) -> Vec<Paragraph> {
                self.footer.clone()
            }
        }

        let orig_section = Section {
            header: vec![Paragraph::new("Confidential Draft", false)],
            footer: vec![Paragraph::new("Page footer original", false)],
        };
        let mod_section = Section {
            header: vec![Paragraph::new("Confidential Final", false)],
            footer: Vec::new(),
        };

        let orig = MemoryDocument {
            paragraphs: vec![Paragraph::new("Body text.", false)],
            tables: Vec::new(),
            sections: vec![orig_section],
        };
        let modified = MemoryDocument {
            paragraphs: vec![Paragraph::new("Body text.", false)],
            tables: Vec::new(),
            sections: vec![mod_section],
        };

        let cfg = EngineConfig::default();
        let out = compare(&orig, &modified, &cfg).unwrap();

        // Footer absent on the modified side is skipped silently: no
        // delete segment for "Page footer original" should appear.
        assert!(!out
            .stream
            .iter()
            .flat_map(|p| &p.segments)
            .any(|s| s.text.contains("Page footer original")));
        // Header differs on both sides and should contribute a word diff.
        assert!(out.stats.insertions > 0 || out.stats.deletions > 0);
    }
}
